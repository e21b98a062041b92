//! Error types for state vector handling

use thiserror::Error;

/// Errors that can occur while validating or reading a state vector
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Length is not a power of two
    #[error("Invalid state dimension {dimension}, expected power of 2")]
    InvalidDimension { dimension: usize },

    /// Length does not match the declared number of qubits
    #[error("State vector must have length {expected} (2^num_qubits); got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// More qubits than a dense buffer can address
    #[error("Cannot address {num_qubits} qubits with a dense state (max {max})")]
    TooManyQubits { num_qubits: usize, max: usize },

    /// Squared magnitudes do not sum to one
    #[error("State vector has to be of length 1.0, got {norm_sqr} (tolerance {tolerance})")]
    NotNormalized { norm_sqr: f64, tolerance: f64 },

    /// NaN or infinite amplitude
    #[error("Amplitude {index} is not finite")]
    NonFinite { index: usize },
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
