//! Deal a handful of hands and grade every possible answer.
//!
//! Run with: `cargo run --example demo`
//! (`RUST_LOG=debug cargo run --example demo` shows the engine's traces.)
//!
//! Seeds are fixed so the output is reproducible. Pass a seed as the first
//! argument to look at one specific hand.

use poker_decision_engine::{
    deal_new_hand, evaluate_hand, grade_decision, training_engine::helpers, Action, DealRequest,
};

fn print_hand(seed: u64) {
    let scenario = deal_new_hand(DealRequest::seeded(seed));
    let evaluation = evaluate_hand(&scenario);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  {}  seed={}", scenario.id, scenario.phase.description(), seed);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Hero:  {}  Position: {}",
        helpers::pretty_cards(&scenario.player_cards).join(" "),
        scenario.position.description());
    if !scenario.community_cards.is_empty() {
        println!("  Board: {}", helpers::pretty_cards(&scenario.community_cards).join(" "));
    }
    println!("  Stack: {}  Blinds: {}/{}",
        scenario.stack_size, scenario.blinds.small, scenario.blinds.big);
    println!("  {}", helpers::situation_summary(&scenario));
    println!();
    println!("  Strength {}  Pot odds {:.1}%  EV {:+.2}",
        evaluation.hand_strength, evaluation.pot_odds * 100.0, evaluation.expected_value);
    println!("  Best: {} ({:.0}% confidence)", evaluation.correct_action, evaluation.confidence);
    println!("  {}", evaluation.reasoning);
    println!();
    for action in Action::ALL {
        let result = grade_decision(action, &evaluation);
        let marker = if result.correct { "✓" } else { " " };
        println!("  {marker} {:<6} {}", action.to_string(), result.grade);
    }
    println!();
}

fn main() {
    env_logger::init();

    match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => print_hand(seed),
        Some(Err(e)) => eprintln!("seed must be a number: {e}"),
        None => {
            for seed in [1u64, 7, 42, 99, 2024] {
                print_hand(seed);
            }
        }
    }
}
