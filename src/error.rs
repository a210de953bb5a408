//! Error types
//!
//! Only setup can fail fatally. Everything that can go wrong inside a tick is
//! either ignored (rejected transitions, exhausted pools) or logged by the driver.

use thiserror::Error;

use crate::sim::GamePhase;

/// Invalid or inconsistent tuning data
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("category weights must sum to 1.0, got {0}")]
    WeightSum(f32),
    #[error("`{field}` must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f32,
    },
}

/// A phase change the game state machine does not allow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal phase transition {from:?} -> {to:?}")]
pub struct TransitionError {
    pub from: GamePhase,
    pub to: GamePhase,
}

/// Failure while bringing the game up; the frame loop is never started
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("browser environment unavailable: {0}")]
    Environment(&'static str),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("failed to create drawing surface: {0}")]
    Surface(String),
    #[error("failed to create graphics device: {0}")]
    Device(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
