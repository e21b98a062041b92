//! Error types for qprep

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while building operation sequences
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    /// Duplicate qubit in a wire list or gate operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Uniformly-controlled rotation given the wrong number of angles
    #[error("Expected {expected} rotation angles for {controls} control qubits, got {actual}")]
    AngleCountMismatch {
        controls: usize,
        expected: usize,
        actual: usize,
    },

    /// Gray code rank outside the addressable range
    #[error("Gray code rank {rank} exceeds the maximum of {max}")]
    InvalidRank { rank: usize, max: usize },
}

impl QuantumError {
    /// Create an angle count mismatch error for `controls` control qubits
    pub fn angle_count_mismatch(controls: usize, actual: usize) -> Self {
        Self::AngleCountMismatch {
            controls,
            expected: 1 << controls,
            actual,
        }
    }
}
