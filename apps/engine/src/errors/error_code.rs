//! Error codes for the Euchre engine.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are the strings a
//! collaborating transport layer is expected to put on the wire.

use core::fmt;

/// Centralized error codes for engine failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn and protocol
    /// Move attempted out of turn
    OutOfTurn,
    /// Move name not recognized
    UnknownMove,
    /// Move argument missing or malformed
    InvalidArgument,

    // Rule violations
    /// Move not accepted in the current phase
    PhaseMismatch,
    /// Card not in hand
    CardNotInHand,
    /// Must follow suit
    MustFollowSuit,
    /// Named the suit of the turned-down card
    TurnedDownSuit,
    /// Dealer must name trump in the second round
    DealerStuck,
    /// Second-round call without a suit
    MissingTrump,
    /// First-round call naming a suit other than the up-card's
    TrumpNotUpCard,
    /// Dealer has nothing to discard
    NothingToDiscard,
    /// Seat already played to this trick
    AlreadyPlayed,
    /// Game has ended
    GameOver,

    // Parsing
    /// Parse card error
    ParseCard,
    /// Parse suit error
    ParseSuit,

    /// Configuration error
    ConfigError,
    /// Internal invariant violation
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::UnknownMove => "UNKNOWN_MOVE",
            Self::InvalidArgument => "INVALID_ARGUMENT",

            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::TurnedDownSuit => "TURNED_DOWN_SUIT",
            Self::DealerStuck => "DEALER_STUCK",
            Self::MissingTrump => "MISSING_TRUMP",
            Self::TrumpNotUpCard => "TRUMP_NOT_UP_CARD",
            Self::NothingToDiscard => "NOTHING_TO_DISCARD",
            Self::AlreadyPlayed => "ALREADY_PLAYED",
            Self::GameOver => "GAME_OVER",

            Self::ParseCard => "PARSE_CARD",
            Self::ParseSuit => "PARSE_SUIT",

            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
