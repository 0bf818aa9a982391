use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::training_engine::{
    deck::Deck,
    helpers::{board_str, hand_str},
    models::{DealRequest, Phase, Position, Scenario, BLINDS, STACK_SIZE, VILLAIN_ACTIONS},
};

/// Random chips added on top of the blinds: 5..=24.
const POT_EXTRA_MIN: u32 = 5;
const POT_EXTRA_MAX: u32 = 24;
/// Random chips added on top of the villain's multiplied bet: 0..=4.
const BET_NOISE_MAX: u32 = 4;

/// Generate a unique scenario ID from the rng.
fn make_scenario_id<R: RngCore + ?Sized>(rng: &mut R) -> String {
    format!("HD-{:08X}", rng.next_u32())
}

/// Deal a full betting situation from `rng`.
///
/// Draw order is fixed (id, deck, position, phase, villain action, pot, bet
/// noise), so a seeded rng always yields the same scenario.
pub fn deal_new_hand_with<R: Rng + ?Sized>(rng: &mut R) -> Scenario {
    let id = make_scenario_id(rng);

    let mut deck = Deck::new_shuffled(rng);
    let player_cards = [deck.deal(), deck.deal()];

    let position = Position::ALL[rng.gen_range(0..Position::ALL.len())];
    let phase = Phase::ALL[rng.gen_range(0..Phase::ALL.len())];
    let community_cards = deck.deal_n(phase.community_cards());

    let villain = VILLAIN_ACTIONS[rng.gen_range(0..VILLAIN_ACTIONS.len())];
    let pot_size = BLINDS.total() + rng.gen_range(POT_EXTRA_MIN..=POT_EXTRA_MAX);
    let bet_to_call = (pot_size as f64 * villain.multiplier).floor() as u32
        + rng.gen_range(0..=BET_NOISE_MAX);

    log::debug!(
        "dealt {id}: {} {} {} [{}] pot={pot_size} {} {bet_to_call}",
        hand_str(&player_cards),
        position,
        phase,
        board_str(&community_cards),
        villain.verb,
    );

    Scenario {
        id,
        player_cards,
        community_cards,
        position,
        stack_size: STACK_SIZE,
        blinds: BLINDS,
        pot_size,
        bet_to_call,
        phase,
        villain_action: villain.description.to_string(),
        villain_bet_size: bet_to_call,
    }
}

/// Entry point: seed a private rng from the request and deal one scenario.
pub fn deal_new_hand(request: DealRequest) -> Scenario {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    deal_new_hand_with(&mut rng)
}
