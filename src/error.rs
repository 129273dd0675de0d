//! Error types for card construction and parsing.

use thiserror::Error;

/// Errors that can occur while building or parsing a [`Card`](crate::Card).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Input was empty or only whitespace.
    #[error("card string is empty")]
    Empty,
    /// Input has neither digits nor a rank letter.
    #[error("card string has no rank")]
    MissingRank,
    /// Input contains more than one numeric run.
    #[error("card string contains more than one numeric run")]
    InvalidCardFormat,
    /// Rank value is not in `1..=13`.
    #[error("rank {0} is out of range (expected 1 to 13)")]
    RankOutOfRange(u32),
    /// Input has a rank but no suit letter.
    #[error("card string has no suit")]
    MissingSuit,
    /// Input has more than one suit letter.
    #[error("card string has more than one suit")]
    MultipleSuits,
    /// Suit letter is not one of `C`, `D`, `H`, `S`.
    #[error("unknown suit letter {0:?}")]
    UnknownSuit(char),
}
