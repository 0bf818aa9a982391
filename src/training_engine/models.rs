use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Canonical deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts   => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs    => "♣",
            Suit::Spades   => "♠",
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Hearts   => write!(f, "h"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Clubs    => write!(f, "c"),
            Suit::Spades   => write!(f, "s"),
        }
    }
}

impl FromStr for Suit {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hearts" | "h"   => Ok(Suit::Hearts),
            "diamonds" | "d" => Ok(Suit::Diamonds),
            "clubs" | "c"    => Ok(Suit::Clubs),
            "spades" | "s"   => Ok(Suit::Spades),
            _ => Err(EngineError::UnknownSuit(s.to_string())),
        }
    }
}

/// Rank 2..=14 where 14 = Ace.
///
/// Serialized as the face label (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rank(pub u8);

impl Rank {
    pub const LOWEST: u8 = 2;
    pub const HIGHEST: u8 = 14;

    pub fn new(value: u8) -> EngineResult<Self> {
        if (Self::LOWEST..=Self::HIGHEST).contains(&value) {
            Ok(Rank(value))
        } else {
            Err(EngineError::InvalidRank(value.to_string()))
        }
    }

    /// Numeric value used by every strength heuristic (A high, never low).
    pub fn value(self) -> u8 {
        self.0
    }

    /// Compact single-character symbol ("T" for ten).
    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    /// Face label as printed on the card ("10" for ten).
    pub fn label(self) -> &'static str {
        match self.0 {
            10 => "10",
            _ => self.symbol(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> String {
        rank.label().to_string()
    }
}

impl TryFrom<String> for Rank {
    type Error = EngineError;

    fn try_from(s: String) -> EngineResult<Self> {
        s.parse()
    }
}

impl FromStr for Rank {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let value = match s.to_ascii_uppercase().as_str() {
            "T" | "10" => 10,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            "A" => 14,
            digit => match digit.parse::<u8>() {
                Ok(v) if (2..=9).contains(&v) => v,
                _ => return Err(EngineError::InvalidRank(s.to_string())),
            },
        };
        Rank::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Build a card from a known-good rank; panics outside 2..=14.
    pub fn new(rank: u8, suit: Suit) -> Self {
        assert!((Rank::LOWEST..=Rank::HIGHEST).contains(&rank), "Invalid rank: {rank}");
        Card { suit, rank: Rank(rank) }
    }

    pub fn try_new(rank: u8, suit: Suit) -> EngineResult<Self> {
        Ok(Card { suit, rank: Rank::new(rank)? })
    }

    /// Human-facing form with the suit glyph, e.g. "10♥" or "A♠".
    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

// ---------------------------------------------------------------------------
// Table metadata
// ---------------------------------------------------------------------------

pub const STACK_SIZE: u32 = 100;

pub const BLINDS: Blinds = Blinds { small: 1, big: 2 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    pub fn total(self) -> u32 {
        self.small + self.big
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Button")]
    Button,
    #[serde(rename = "Small Blind")]
    SmallBlind,
    #[serde(rename = "Big Blind")]
    BigBlind,
    #[serde(rename = "Under the Gun")]
    UnderTheGun,
    #[serde(rename = "Middle Position")]
    MiddlePosition,
    #[serde(rename = "Cutoff")]
    Cutoff,
}

impl Position {
    /// The six seats a scenario can put the player in, in draw order.
    pub const ALL: [Position; 6] = [
        Position::Button,
        Position::SmallBlind,
        Position::BigBlind,
        Position::UnderTheGun,
        Position::MiddlePosition,
        Position::Cutoff,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::Button         => "Button",
            Position::SmallBlind     => "Small Blind",
            Position::BigBlind       => "Big Blind",
            Position::UnderTheGun    => "Under the Gun",
            Position::MiddlePosition => "Middle Position",
            Position::Cutoff         => "Cutoff",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Position::Button      => "Button (best position)",
            Position::UnderTheGun => "Under the Gun (early)",
            Position::Cutoff      => "Cutoff (late position)",
            other                 => other.label(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        Position::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownPosition(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Preflop, Phase::Flop, Phase::Turn, Phase::River];

    /// Number of community cards revealed at this phase.
    pub fn community_cards(self) -> usize {
        match self {
            Phase::Preflop => 0,
            Phase::Flop    => 3,
            Phase::Turn    => 4,
            Phase::River   => 5,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Phase::Preflop => "Before the flop",
            Phase::Flop    => "After the flop",
            Phase::Turn    => "After the turn",
            Phase::River   => "After the river",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Preflop => "preflop",
            Phase::Flop    => "flop",
            Phase::Turn    => "turn",
            Phase::River   => "river",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Phase {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        Phase::ALL
            .into_iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownPhase(s.to_string()))
    }
}

/// One row of the villain-action table: the bet is `pot × multiplier`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VillainAction {
    pub verb: &'static str,
    pub multiplier: f64,
    pub description: &'static str,
}

pub const VILLAIN_ACTIONS: [VillainAction; 4] = [
    VillainAction { verb: "raises to",       multiplier: 3.0, description: "opponent raises" },
    VillainAction { verb: "bets",            multiplier: 0.7, description: "opponent bets" },
    VillainAction { verb: "goes all-in for", multiplier: 1.0, description: "opponent goes all-in" },
    VillainAction { verb: "raises to",       multiplier: 2.5, description: "opponent raises big" },
];

impl VillainAction {
    /// Find the table entry a scenario's `villain_action` string came from.
    pub fn lookup(description: &str) -> Option<VillainAction> {
        VILLAIN_ACTIONS.into_iter().find(|a| a.description == description)
    }
}

// ---------------------------------------------------------------------------
// Scenario / evaluation / result types
// ---------------------------------------------------------------------------

/// Deserialized scenarios go through [`Scenario::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ScenarioWire")]
pub struct Scenario {
    pub id: String,
    pub player_cards: [Card; 2],
    /// 0, 3, 4 or 5 cards, matching `phase`.
    pub community_cards: Vec<Card>,
    pub position: Position,
    pub stack_size: u32,
    pub blinds: Blinds,
    pub pot_size: u32,
    pub bet_to_call: u32,
    pub phase: Phase,
    pub villain_action: String,
    pub villain_bet_size: u32,
}

impl Scenario {
    /// Board size must match the phase and no card may appear twice.
    pub fn validate(&self) -> EngineResult<()> {
        let expected = self.phase.community_cards();
        if self.community_cards.len() != expected {
            return Err(EngineError::PhaseCardMismatch {
                phase: self.phase.to_string(),
                expected,
                got: self.community_cards.len(),
            });
        }
        let mut seen = HashSet::new();
        for card in self.player_cards.iter().chain(&self.community_cards) {
            if !seen.insert(*card) {
                return Err(EngineError::DuplicateCard(card.to_string()));
            }
        }
        Ok(())
    }
}

/// Unchecked mirror of [`Scenario`] used only as the deserialization source.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioWire {
    id: String,
    player_cards: [Card; 2],
    community_cards: Vec<Card>,
    position: Position,
    stack_size: u32,
    blinds: Blinds,
    pot_size: u32,
    bet_to_call: u32,
    phase: Phase,
    villain_action: String,
    villain_bet_size: u32,
}

impl TryFrom<ScenarioWire> for Scenario {
    type Error = EngineError;

    fn try_from(w: ScenarioWire) -> EngineResult<Self> {
        let scenario = Scenario {
            id: w.id,
            player_cards: w.player_cards,
            community_cards: w.community_cards,
            position: w.position,
            stack_size: w.stack_size,
            blinds: w.blinds,
            pot_size: w.pot_size,
            bet_to_call: w.bet_to_call,
            phase: w.phase,
            villain_action: w.villain_action,
            villain_bet_size: w.villain_bet_size,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Fold, Action::Call, Action::Raise];

    /// Aggression order used to measure how far off a wrong answer is.
    pub fn ordinal(self) -> u8 {
        match self {
            Action::Fold  => 0,
            Action::Call  => 1,
            Action::Raise => 2,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold  => write!(f, "fold"),
            Action::Call  => write!(f, "call"),
            Action::Raise => write!(f, "raise"),
        }
    }
}

impl FromStr for Action {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold"  => Ok(Action::Fold),
            "call"  => Ok(Action::Call),
            "raise" => Ok(Action::Raise),
            _ => Err(EngineError::UnknownAction(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandEvaluation {
    /// Heuristic score in 0..=100.
    pub hand_strength: u32,
    /// Break-even win probability, 0..=1.
    pub pot_odds: f64,
    pub expected_value: f64,
    pub correct_action: Action,
    /// 0..=100.
    pub confidence: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Best to worst.
    pub const ALL: [Grade; 8] = [
        Grade::APlus, Grade::A, Grade::BPlus, Grade::B,
        Grade::CPlus, Grade::C, Grade::D, Grade::F,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A     => "A",
            Grade::BPlus => "B+",
            Grade::B     => "B",
            Grade::CPlus => "C+",
            Grade::C     => "C",
            Grade::D     => "D",
            Grade::F     => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResult {
    pub correct: bool,
    pub user_action: Action,
    pub correct_action: Action,
    pub expected_value: f64,
    pub explanation: String,
    pub hand_strength: u32,
    pub pot_odds: f64,
    pub grade: Grade,
}

// ---------------------------------------------------------------------------
// Deal request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRequest {
    /// `Some` reproduces the exact same scenario every time; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl DealRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        DealRequest { rng_seed: Some(seed) }
    }
}
