//! Error types for life_core.

use thiserror::Error;

/// Why a placement was turned down.
///
/// This is an expected outcome, not a defect: the interface shows it as a
/// disabled pattern slot.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Refusal {
    /// The ledger holds less mana than the pattern costs.
    #[error("insufficient mana: pattern costs {cost}, {available:.2} available")]
    InsufficientResource {
        /// Cost of the pattern that was refused.
        cost: u32,
        /// Mana in the ledger at the time of the attempt.
        available: f64,
    },
}

/// Errors raised by the simulation core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// No pattern with this name exists in the catalog.
    #[error("pattern not found: {0}")]
    PatternNotFound(String),

    /// The placement was refused.
    #[error("placement refused: {0}")]
    Refused(#[from] Refusal),

    /// A direct grid access fell outside the grid.
    #[error("cell ({col}, {row}) is outside the {cols}x{rows} grid")]
    OutOfRange {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
}

impl LifeError {
    /// Whether this is the recoverable, user-visible kind.
    pub fn is_refusal(&self) -> bool {
        matches!(self, LifeError::Refused(_))
    }
}

/// A startup setting that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}={value:?} is not valid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

