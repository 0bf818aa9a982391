//! Letter grades for a submitted action.
//!
//! The rubric is two small lookup tables. A correct answer is graded by how
//! confident the evaluator was; a wrong one by how far it strays from the
//! right action (fold → call → raise) and, within that, by confidence.

use crate::training_engine::models::{Action, DecisionResult, Grade, HandEvaluation};

/// `(minimum confidence, grade)` for correct answers, best first.
const CORRECT_GRADES: [(f64, Grade); 4] = [
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::BPlus),
    (f64::NEG_INFINITY, Grade::B),
];

/// `(action distance, confidence below, grade)` for wrong answers.
const MISSED_GRADES: [(u8, f64, Grade); 4] = [
    (1, 70.0, Grade::CPlus),
    (1, f64::INFINITY, Grade::C),
    (2, 80.0, Grade::D),
    (2, f64::INFINITY, Grade::F),
];

/// Distance between two actions on the fold/call/raise ladder.
pub fn action_distance(a: Action, b: Action) -> u8 {
    a.ordinal().abs_diff(b.ordinal())
}

/// Grade lookup, independent of any particular evaluation.
pub fn grade_for(user_action: Action, correct_action: Action, confidence: f64) -> Grade {
    if user_action == correct_action {
        return CORRECT_GRADES
            .iter()
            .find(|(min, _)| confidence >= *min)
            .map_or(Grade::B, |&(_, grade)| grade);
    }
    let distance = action_distance(user_action, correct_action);
    MISSED_GRADES
        .iter()
        .find(|(d, below, _)| *d == distance && confidence < *below)
        .map_or(Grade::F, |&(_, _, grade)| grade)
}

/// Compare the user's action with the evaluator's and grade it.
pub fn grade_decision(user_action: Action, evaluation: &HandEvaluation) -> DecisionResult {
    let grade = grade_for(user_action, evaluation.correct_action, evaluation.confidence);
    log::debug!(
        "graded {} against {} at confidence {:.1}: {}",
        user_action,
        evaluation.correct_action,
        evaluation.confidence,
        grade
    );
    DecisionResult {
        correct: user_action == evaluation.correct_action,
        user_action,
        correct_action: evaluation.correct_action,
        expected_value: evaluation.expected_value,
        explanation: evaluation.reasoning.clone(),
        hand_strength: evaluation.hand_strength,
        pot_odds: evaluation.pot_odds,
        grade,
    }
}
