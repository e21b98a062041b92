//! Error types for the decompositions

use qprep_core::QuantumError;
use qprep_state::StateError;
use thiserror::Error;

/// Result type for decomposition operations
pub type Result<T> = std::result::Result<T, PreparationError>;

/// Errors that abort a decomposition before any operation is returned
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreparationError {
    /// Input state rejected (shape, normalization, non-finite entries)
    #[error("State error: {0}")]
    StateError(#[from] StateError),

    /// Wire list or rotation expansion rejected
    #[error("Circuit error: {0}")]
    CircuitError(#[from] QuantumError),
}

impl PreparationError {
    /// Whether the input length did not match the wire count
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            PreparationError::StateError(
                StateError::DimensionMismatch { .. }
                    | StateError::InvalidDimension { .. }
                    | StateError::TooManyQubits { .. }
            )
        )
    }

    /// Whether the input was not normalized
    pub fn is_normalization_error(&self) -> bool {
        matches!(
            self,
            PreparationError::StateError(StateError::NotNormalized { .. })
        )
    }
}
