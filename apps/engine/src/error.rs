use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};

/// Application-level error for binaries embedding the engine.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(e) => e.code(),
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::Domain(e) => e.to_string(),
            AppError::Config { detail } => detail.clone(),
        }
    }
}
