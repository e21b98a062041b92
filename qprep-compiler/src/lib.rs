//! State preparation synthesis for qprep
//!
//! This crate turns a normalized complex vector of length `2^n` into an
//! ordered sequence of `RY`, `RZ` and `CNOT` operations that prepares the
//! vector (up to a global phase) from |0...0⟩, following the uniformly
//! controlled rotation construction of Möttönen et al. (2004).
//!
//! # Example
//!
//! ```
//! use qprep_compiler::prepare_state;
//! use qprep_core::{Complex64, GateKind, QubitId};
//!
//! let amplitudes = [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)];
//! let circuit = prepare_state(&amplitudes, &[QubitId::new(0)]).unwrap();
//!
//! assert_eq!(circuit.len(), 1);
//! assert_eq!(circuit.operations()[0].kind(), GateKind::RotationY);
//! ```

pub mod decomposition;
pub mod error;

pub use decomposition::{
    prepare_state, prepare_state_with_config, DecompositionConfig, MottonenPreparer,
    PreparationCircuit,
};
pub use error::{PreparationError, Result};
