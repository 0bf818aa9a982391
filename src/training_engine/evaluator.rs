use crate::training_engine::{
    helpers::percent,
    models::{Action, HandEvaluation, Scenario},
    strength::calculate_hand_strength,
};

/// Break-even equity: `call / (pot + call)`.
///
/// An empty pot with nothing to call returns 0.0 rather than NaN.
pub fn pot_odds(bet_to_call: u32, pot_size: u32) -> f64 {
    let total = pot_size as f64 + bet_to_call as f64;
    if total == 0.0 {
        return 0.0;
    }
    bet_to_call as f64 / total
}

/// Map a strength score to a win probability, trusting it more as the board fills.
pub fn estimate_win_probability(hand_strength: u32, board_cards: usize) -> f64 {
    let base = hand_strength as f64 / 100.0;
    let win = match board_cards {
        0 => base * 0.8 + 0.1,
        3 => base * 0.9 + 0.05,
        n if n >= 4 => base * 0.95,
        _ => base,
    };
    win.clamp(0.05, 0.95)
}

/// Profit of calling: win the pot, or lose the call.
pub fn expected_value(win_probability: f64, pot_size: u32, bet_to_call: u32) -> f64 {
    win_probability * pot_size as f64 - (1.0 - win_probability) * bet_to_call as f64
}

/// The numbers every action rule reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Odds {
    pub hand_strength: u32,
    pub pot_odds: f64,
    pub win_probability: f64,
}

/// One row of the decision table.
pub struct ActionRule {
    pub action: Action,
    pub applies: fn(&Odds) -> bool,
    pub confidence: fn(&Odds) -> f64,
    pub reasoning: fn(&Odds) -> String,
}

/// Evaluated top to bottom; the last row always applies.
pub static ACTION_RULES: [ActionRule; 3] = [
    ActionRule {
        action: Action::Fold,
        applies: |o| o.win_probability < o.pot_odds - 0.1,
        confidence: |o| ((o.pot_odds - o.win_probability) * 200.0).min(95.0),
        reasoning: |o| format!(
            "Your hand is too weak against the opponent's likely range. You need to win {} \
             of the time to break even, but you only win about {} of the time.",
            percent(o.pot_odds),
            percent(o.win_probability)
        ),
    },
    ActionRule {
        action: Action::Raise,
        applies: |o| o.win_probability > o.pot_odds + 0.15 && o.hand_strength > 60,
        confidence: |o| ((o.win_probability - o.pot_odds) * 150.0).min(95.0),
        reasoning: |_| "You have a strong hand with good equity. Raising for value will make \
                        money against weaker hands that might call."
            .to_string(),
    },
    ActionRule {
        action: Action::Call,
        applies: |_| true,
        confidence: |o| (100.0 - (o.win_probability - o.pot_odds).abs() * 200.0).max(60.0),
        reasoning: |_| "Your hand has decent equity against the opponent's range. The pot odds \
                        make calling profitable."
            .to_string(),
    },
];

/// First matching rule's action, confidence and reasoning.
pub fn select_action(odds: &Odds) -> (Action, f64, String) {
    let rule = ACTION_RULES
        .iter()
        .find(|rule| (rule.applies)(odds))
        .unwrap_or(&ACTION_RULES[ACTION_RULES.len() - 1]);
    (rule.action, (rule.confidence)(odds), (rule.reasoning)(odds))
}

/// Work out the best response to the villain's bet. Pure: the same scenario
/// always yields the same evaluation.
pub fn evaluate_hand(scenario: &Scenario) -> HandEvaluation {
    let hand_strength = calculate_hand_strength(&scenario.player_cards, &scenario.community_cards);
    let odds = Odds {
        hand_strength,
        pot_odds: pot_odds(scenario.bet_to_call, scenario.pot_size),
        win_probability: estimate_win_probability(hand_strength, scenario.community_cards.len()),
    };
    let expected_value = expected_value(odds.win_probability, scenario.pot_size, scenario.bet_to_call);
    let (correct_action, confidence, reasoning) = select_action(&odds);

    log::debug!(
        "{}: strength={} pot_odds={:.3} win={:.3} ev={:.2} -> {} ({:.1})",
        scenario.id,
        hand_strength,
        odds.pot_odds,
        odds.win_probability,
        expected_value,
        correct_action,
        confidence
    );

    HandEvaluation {
        hand_strength,
        pot_odds: odds.pot_odds,
        expected_value,
        correct_action,
        confidence,
        reasoning,
    }
}
