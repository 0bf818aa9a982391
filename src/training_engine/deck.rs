use rand::Rng;
use crate::training_engine::models::{Card, Rank, Suit};

/// All 52 cards in canonical order: suits (hearts, diamonds, clubs, spades),
/// each running 2 through Ace.
pub fn ordered_cards() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (Rank::LOWEST..=Rank::HIGHEST).map(move |r| Card { suit, rank: Rank(r) }))
        .collect()
}

/// Fisher-Yates shuffle into a new vector; the input is left untouched.
pub fn shuffle_deck<R: Rng + ?Sized>(rng: &mut R, deck: &[Card]) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// A freshly shuffled 52-card deck.
pub fn create_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    shuffle_deck(rng, &ordered_cards())
}

/// A shuffled deck consumed front to back.
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Deck { cards: create_deck(rng), cursor: 0 }
    }

    /// Deal one card; panics if the deck is exhausted.
    pub fn deal(&mut self) -> Card {
        assert!(self.cursor < self.cards.len(), "Deck exhausted");
        let card = self.cards[self.cursor];
        self.cursor += 1;
        card
    }

    /// Deal `n` cards at once.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map(|_| self.deal()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// All dealt cards so far (useful for integrity checks).
    pub fn dealt_cards(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }
}
