//! Error handling for the Euchre engine.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, IllegalMoveKind, ParseKind};
pub use error_code::ErrorCode;
