#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Euchre rules engine: a pure state machine over the phases of a game.

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod game;

// Re-exports for public API
pub use config::EngineConfig;
pub use domain::snapshot::{snapshot, GameSnapshot};
pub use domain::{Card, GameTransition, Move, MoveName, Phase, PhaseTag, Rank, Seat, Suit};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode, IllegalMoveKind};
pub use game::{new_game, new_game_with_dealer, perform_move, Game};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
