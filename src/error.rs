use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown action: {0} (expected fold, call or raise)")]
    UnknownAction(String),

    #[error("Unknown phase: {0}")]
    UnknownPhase(String),

    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    #[error("Unknown suit: {0}")]
    UnknownSuit(String),

    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("{phase} needs {expected} community cards, got {got}")]
    PhaseCardMismatch { phase: String, expected: usize, got: usize },

    #[error("Card dealt twice: {0}")]
    DuplicateCard(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
