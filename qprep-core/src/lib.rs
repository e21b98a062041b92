//! Core types for the qprep state preparation toolkit
//!
//! This crate provides the fundamental types shared by the qprep crates:
//! - [`QubitId`]: Type-safe wire addressing
//! - [`Operation`]: Elementary operations emitted by the decompositions
//! - [`QuantumError`]: Errors raised while building operation sequences
//!
//! # Example
//! ```
//! use qprep_core::{Operation, QubitId, RotationAxis};
//!
//! let q0 = QubitId::new(0);
//! let q1 = QubitId::new(1);
//! let ry = Operation::rotation(RotationAxis::Y, 0.5, q1);
//! let cnot = Operation::cnot(q0, q1).unwrap();
//! assert_eq!(ry.target(), cnot.target());
//! ```

pub mod error;
pub mod operation;
pub mod qubit;

// Re-exports for convenience
pub use error::QuantumError;
pub use num_complex::Complex64;
pub use operation::{GateKind, Operation, RotationAxis};
pub use qubit::QubitId;

/// Type alias for results in qprep
pub type Result<T> = std::result::Result<T, QuantumError>;
