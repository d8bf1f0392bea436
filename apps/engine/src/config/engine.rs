use std::env;

use crate::domain::rules::PLAYERS;
use crate::domain::state::Seat;
use crate::error::AppError;

/// Environment variable holding a fixed game seed.
pub const SEED_VAR: &str = "EUCHRE_SEED";
/// Environment variable naming the first dealer's seat.
pub const FIRST_DEALER_VAR: &str = "EUCHRE_FIRST_DEALER";

/// How a new game is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Fixed seed for reproducible games; random when unset.
    pub seed: Option<u64>,
    pub first_dealer: Seat,
}

impl EngineConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_VAR) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!("{SEED_VAR} must be an unsigned integer, got '{raw}'"))
            })?),
            None => None,
        };
        let first_dealer = match lookup(FIRST_DEALER_VAR) {
            Some(raw) => parse_seat(FIRST_DEALER_VAR, &raw)?,
            None => 0,
        };
        Ok(Self { seed, first_dealer })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_first_dealer(mut self, dealer: Seat) -> Result<Self, AppError> {
        validate_seat("first dealer", dealer)?;
        self.first_dealer = dealer;
        Ok(self)
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn parse_seat(name: &str, raw: &str) -> Result<Seat, AppError> {
    let seat = raw
        .trim()
        .parse::<Seat>()
        .map_err(|_| AppError::config(format!("{name} must be a seat number, got '{raw}'")))?;
    validate_seat(name, seat)?;
    Ok(seat)
}

/// Reject seats outside the table; `name` labels the setting in the message.
pub fn validate_seat(name: &str, seat: Seat) -> Result<(), AppError> {
    if (seat as usize) < PLAYERS {
        Ok(())
    } else {
        Err(AppError::config(format!(
            "{name} must be between 0 and {}, got {seat}",
            PLAYERS - 1
        )))
    }
}
