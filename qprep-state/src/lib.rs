//! Dense amplitude buffers for qprep
//!
//! [`StateVector`] is the read-only input of the state preparation
//! decompositions: a dense complex vector of length `2^n` together with the
//! shape and normalization checks the decompositions rely on. The [`ops`]
//! module provides the elementwise and reducing primitives (magnitudes,
//! phases, block sums, masked division) used by the angle solvers.
//!
//! # Example
//!
//! ```
//! use qprep_state::StateVector;
//! use num_complex::Complex64;
//!
//! let h = 1.0 / 2.0_f64.sqrt();
//! let state = StateVector::from_amplitudes(1, &[Complex64::new(h, 0.0), Complex64::new(0.0, h)]).unwrap();
//! assert!(state.validate_normalization(1e-3).is_ok());
//! ```

pub mod error;
pub mod ops;
pub mod state_vector;

pub use error::{Result, StateError};
pub use state_vector::{StateVector, DEFAULT_NORM_TOLERANCE, MAX_QUBITS};
