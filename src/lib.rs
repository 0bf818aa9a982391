//! # poker_decision_engine
//!
//! A poker decision trainer's evaluation core.
//!
//! The engine deals a random betting situation, works out the best response
//! (fold, call or raise) from a fixed set of heuristics, and grades the
//! player's chosen action against it.
//!
//! ## How it works
//!
//! 1. [`deal_new_hand`] shuffles a deck, deals two hole cards, picks a
//!    position and a phase (revealing 0, 3, 4 or 5 community cards), and
//!    synthesises the villain's bet and the pot.
//! 2. [`evaluate_hand`] scores the hand, computes pot odds, a win probability
//!    and the expected value of calling, and picks the best action with a
//!    confidence and a written rationale.
//! 3. [`grade_decision`] compares the player's action with that verdict and
//!    assigns a letter grade from A+ to F.
//!
//! Everything but the deal is a pure function. Pass `rng_seed: Some(u64)` to
//! make the deal reproducible too.
//!
//! ## Quick start
//!
//! ```rust
//! use poker_decision_engine::{
//!     deal_new_hand, evaluate_hand, grade_decision, Action, DealRequest,
//! };
//!
//! let scenario = deal_new_hand(DealRequest::seeded(42));
//! println!("{} — {}", scenario.phase.description(), scenario.position.description());
//!
//! let evaluation = evaluate_hand(&scenario);
//! let result = grade_decision(Action::Call, &evaluation);
//! println!("best: {}  yours: {}  grade: {}", result.correct_action, result.user_action, result.grade);
//!
//! // Action literals from a UI parse with `FromStr`.
//! let raise: Action = "raise".parse().unwrap();
//! assert_eq!(raise, Action::Raise);
//! ```

pub mod error;
pub mod training_engine;

pub use error::{EngineError, EngineResult};
pub use training_engine::{
    calculate_hand_strength, create_deck, deal_new_hand, deal_new_hand_with, evaluate_hand,
    grade_decision, shuffle_deck, Action, Blinds, Card, DealRequest, DecisionResult, Grade,
    HandEvaluation, Phase, Position, Rank, Scenario, Suit, VillainAction,
};

#[cfg(test)]
mod tests;
