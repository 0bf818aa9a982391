//! Display helpers shared by the evaluator, the client adapter and the demo.
//!
//! None of these feed back into evaluation; they only turn scenario values
//! into strings a player reads.

use crate::training_engine::models::{Card, Scenario, VillainAction};

/// A fraction as a percentage with one decimal, halves rounded up
/// (0.5225 -> "52.3%").
pub fn percent(fraction: f64) -> String {
    let pct = fraction * 100.0;
    format!("{:.1}%", (pct * 10.0).round() / 10.0)
}

/// Compact hole cards, e.g. "AcKs".
pub fn hand_str(hand: &[Card; 2]) -> String {
    format!("{}{}", hand[0], hand[1])
}

/// Compact board, space separated, e.g. "Ac Ks 7h".
pub fn board_str(board: &[Card]) -> String {
    board.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

/// Cards with suit glyphs, e.g. ["10♥", "A♠"].
pub fn pretty_cards(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::pretty).collect()
}

/// One line describing the villain's move, e.g.
/// "Opponent raises to 30 into a pot of 10".
pub fn situation_summary(scenario: &Scenario) -> String {
    let verb = VillainAction::lookup(&scenario.villain_action)
        .map_or("bets", |a| a.verb);
    format!(
        "Opponent {verb} {} into a pot of {}",
        scenario.villain_bet_size, scenario.pot_size
    )
}
