//! Errors raised by the simulation core.

use thiserror::Error;

/// Errors produced while building or persisting a simulation.
///
/// Extinction is not an error; it is reported through
/// [`super::evolution::GenerationOutcome::Extinct`].
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A heritable trait was constructed below its floor (or is not finite).
    #[error("trait {name} = {value} is below its floor of {floor}")]
    TraitBelowFloor {
        /// Name of the offending trait.
        name: &'static str,
        /// Value that was rejected.
        value: f32,
        /// Minimum allowed value.
        floor: f32,
    },
    /// A cost-function exponent outside `0..=3`.
    #[error("cost exponent {0} is not one of 0, 1, 2, 3")]
    InvalidCostExponent(u8),
    /// Parameters that cannot describe a runnable arena.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
    /// Failure reading or writing a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Failure encoding or decoding JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
