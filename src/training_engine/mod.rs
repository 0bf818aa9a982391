//! Decision-evaluation core — dealing, hand scoring, odds, and grading.
//!
//! ## Module overview
//!
//! | Module           | Purpose |
//! |------------------|---------|
//! | `models`         | All shared types: cards, positions, phases, scenario/evaluation/result structs |
//! | `deck`           | 52-card deck with Fisher-Yates shuffle and front-to-back dealing |
//! | `generator`      | `deal_new_hand()` — builds a random betting situation |
//! | `strength`       | Additive 0–100 hand-strength heuristic |
//! | `evaluator`      | Pot odds, win probability, EV, and the ordered action rule table |
//! | `grader`         | Letter-grade rubric for a submitted action |
//! | `helpers`        | Card/board formatting and a one-line situation summary |
//! | `client_adapter` | JSON payloads for a UI client |

pub mod client_adapter;
pub mod deck;
pub mod evaluator;
pub mod generator;
pub mod grader;
pub mod helpers;
pub mod models;
pub mod strength;

// Re-export the public API surface so callers can use
// `training_engine::evaluate_hand` without reaching into sub-modules.
pub use deck::{create_deck, shuffle_deck};
pub use evaluator::evaluate_hand;
pub use generator::{deal_new_hand, deal_new_hand_with};
pub use grader::grade_decision;
pub use models::{
    Action, Blinds, Card, DealRequest, DecisionResult, Grade, HandEvaluation, Phase,
    Position, Rank, Scenario, Suit, VillainAction,
};
pub use strength::calculate_hand_strength;
