//! Domain-level error type returned at the boundary of every move.
//!
//! Errors never leave a half-applied phase behind: the dispatcher only swaps
//! in the new phase once a move has fully succeeded.

use thiserror::Error;

use super::error_code::ErrorCode;
use crate::domain::state::Seat;

/// Rule violations for a move that was well-formed but not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IllegalMoveKind {
    /// The current phase does not accept this move at all.
    PhaseMismatch,
    CardNotInHand,
    MustFollowSuit,
    /// Second-round call naming the suit of the turned-down card.
    TurnedDownSuit,
    /// Dealer tried to pass in the second bidding round.
    DealerStuck,
    /// Second-round call without a trump suit.
    MissingTrump,
    /// First-round call naming a suit other than the up-card's.
    TrumpNotUpCard,
    /// Dealer has no extra card to discard.
    NothingToDiscard,
    /// Seat already has a card in the current trick.
    AlreadyPlayed,
    /// The game has ended; no further moves are accepted.
    GameOver,
}

/// Malformed textual input (cards, suits, move arguments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseKind {
    Card,
    Rank,
    Suit,
    Argument,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Move attempted by a seat that does not hold the turn.
    #[error("out of turn: seat {attempted} moved but it is seat {actual}'s turn")]
    OutOfTurn { attempted: Seat, actual: Seat },
    /// Well-formed move that breaks a rule of the game.
    #[error("illegal move {kind:?}: {detail}")]
    IllegalMove {
        kind: IllegalMoveKind,
        detail: String,
    },
    /// Move name outside the protocol's verbs.
    #[error("unknown move: {0}")]
    UnknownMove(String),
    #[error("parse {kind:?}: {detail}")]
    Parse { kind: ParseKind, detail: String },
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn out_of_turn(attempted: Seat, actual: Seat) -> Self {
        Self::OutOfTurn { attempted, actual }
    }

    pub fn illegal(kind: IllegalMoveKind, detail: impl Into<String>) -> Self {
        Self::IllegalMove {
            kind,
            detail: detail.into(),
        }
    }

    pub fn unknown_move(name: impl Into<String>) -> Self {
        Self::UnknownMove(name.into())
    }

    pub fn parse(kind: ParseKind, detail: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            detail: detail.into(),
        }
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The rule that was broken, when this is an illegal-move error.
    pub fn illegal_kind(&self) -> Option<IllegalMoveKind> {
        match self {
            Self::IllegalMove { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::OutOfTurn { .. } => ErrorCode::OutOfTurn,
            Self::IllegalMove { kind, .. } => match kind {
                IllegalMoveKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                IllegalMoveKind::CardNotInHand => ErrorCode::CardNotInHand,
                IllegalMoveKind::MustFollowSuit => ErrorCode::MustFollowSuit,
                IllegalMoveKind::TurnedDownSuit => ErrorCode::TurnedDownSuit,
                IllegalMoveKind::DealerStuck => ErrorCode::DealerStuck,
                IllegalMoveKind::MissingTrump => ErrorCode::MissingTrump,
                IllegalMoveKind::TrumpNotUpCard => ErrorCode::TrumpNotUpCard,
                IllegalMoveKind::NothingToDiscard => ErrorCode::NothingToDiscard,
                IllegalMoveKind::AlreadyPlayed => ErrorCode::AlreadyPlayed,
                IllegalMoveKind::GameOver => ErrorCode::GameOver,
            },
            Self::UnknownMove(_) => ErrorCode::UnknownMove,
            Self::Parse { kind, .. } => match kind {
                ParseKind::Card | ParseKind::Rank => ErrorCode::ParseCard,
                ParseKind::Suit => ErrorCode::ParseSuit,
                ParseKind::Argument => ErrorCode::InvalidArgument,
            },
            Self::Invariant(_) => ErrorCode::Internal,
        }
    }
}
