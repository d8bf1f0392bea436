pub mod engine;

pub use engine::{validate_seat, EngineConfig};
