use serde_json::{json, Value};

use crate::training_engine::{
    helpers::{percent, situation_summary},
    models::{Card, DecisionResult, Scenario},
};

/// A card as the client draws it: label, suit name, glyph and colour.
fn client_card(c: &Card) -> Value {
    json!({
        "rank": c.rank.label(),
        "suit": c.suit,
        "display": c.pretty(),
        "red": c.suit.is_red()
    })
}

/// Serialize a value the engine owns; the model types have no fallible fields.
fn raw<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Map a `Scenario` to the JSON object the training screen renders.
///
/// `scenario` is the raw wire shape; the other keys are ready-made labels so
/// the client needs no poker knowledge of its own.
pub fn scenario_view(scenario: &Scenario) -> Value {
    json!({
        "scenario": raw(scenario),
        "phaseDescription": scenario.phase.description(),
        "positionDescription": scenario.position.description(),
        "summary": situation_summary(scenario),
        "playerCards": scenario.player_cards.iter().map(client_card).collect::<Vec<_>>(),
        "communityCards": scenario.community_cards.iter().map(client_card).collect::<Vec<_>>(),
        "actions": ["fold", "call", "raise"]
    })
}

/// Map a graded decision to the result panel payload.
pub fn result_view(result: &DecisionResult) -> Value {
    let headline = if result.correct { "Correct!" } else { "Not quite" };
    json!({
        "result": raw(result),
        "headline": headline,
        "potOddsPercent": percent(result.pot_odds),
        "expectedValue": format!("{:+.2}", result.expected_value)
    })
}
