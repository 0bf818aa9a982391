//! Additive hand-strength heuristic.
//!
//! This is not a hand ranker: it scores the two hole cards on a 0–100 scale
//! from a handful of fixed bonuses, then nudges the score once the flop is
//! out. Every term below is part of the scoring contract.

use crate::training_engine::{
    helpers::{board_str, hand_str},
    models::Card,
};

const PAIR_BONUS: i32 = 25;
const PREMIUM_PAIR_BONUS: i32 = 15;
const SUITED_BONUS: i32 = 8;
const CONNECTOR_BONUS: i32 = 6;
const BROADWAY_BONUS: i32 = 10;
const BOARD_PAIR_BONUS: i32 = 20;
const HIGH_BOARD_PENALTY: i32 = 10;

/// Lowest rank counted as broadway / premium for the pair bonus.
const TEN: i32 = 10;
/// Lowest board rank that counts as a high card (Jack).
const JACK: i32 = 11;

pub const MIN_STRENGTH: i32 = 0;
pub const MAX_STRENGTH: i32 = 100;

/// Score hole cards against whatever part of the board is revealed.
pub fn calculate_hand_strength(player_cards: &[Card; 2], community_cards: &[Card]) -> u32 {
    let (high, low) = {
        let a = player_cards[0].rank.value() as i32;
        let b = player_cards[1].rank.value() as i32;
        if a >= b { (a, b) } else { (b, a) }
    };

    let mut strength = high * 2 + low;

    if high == low {
        strength += PAIR_BONUS;
        if high >= TEN {
            strength += PREMIUM_PAIR_BONUS;
        }
    }
    if player_cards[0].suit == player_cards[1].suit {
        strength += SUITED_BONUS;
    }
    // Raw rank distance: A-2 is not a connector.
    if high - low == 1 {
        strength += CONNECTOR_BONUS;
    }
    if high >= TEN && low >= TEN {
        strength += BROADWAY_BONUS;
    }

    if community_cards.len() >= 3 {
        let board: Vec<i32> = community_cards.iter().map(|c| c.rank.value() as i32).collect();

        // One bonus at most, however many hole cards hit.
        if [high, low].iter().any(|v| board.contains(v)) {
            strength += BOARD_PAIR_BONUS;
        }
        if board.iter().any(|&v| v >= JACK) && high < JACK {
            strength -= HIGH_BOARD_PENALTY;
        }
    }

    let clamped = strength.clamp(MIN_STRENGTH, MAX_STRENGTH);
    log::trace!(
        "hand strength {} on [{}] = {} (raw {})",
        hand_str(player_cards),
        board_str(community_cards),
        clamped,
        strength
    );
    clamped as u32
}
