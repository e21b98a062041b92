//! State preparation by uniformly-controlled rotations
//!
//! A target state `|ψ⟩ = Σ rⱼ e^{iωⱼ} |j⟩` is prepared from |0...0⟩ in two
//! cascades over the wires, most significant first:
//!
//! 1. **Y cascade**: uniformly-controlled `RY` rotations distribute the
//!    magnitudes `rⱼ`, each level splitting the weight of a block of
//!    amplitudes between its lower and upper halves.
//! 2. **Z cascade**: uniformly-controlled `RZ` rotations imprint the
//!    relative phases `ωⱼ`. Whatever is left is a global phase.
//!
//! # Architecture
//!
//! - [`gray_code`]: reflected binary Gray codes
//! - [`transform`]: the sign matrix mapping per-pattern angles to Gray code angles
//! - [`angles`]: per-level angle solvers for both cascades
//! - [`uniform_rotation`]: expansion of one uniformly-controlled rotation into
//!   rotations and CNOTs
//! - [`state_preparation`]: the driver running both cascades
//!
//! # Cost
//!
//! A generic `n`-qubit state needs at most `2^(n+1) - 2` rotations and a
//! comparable number of CNOTs. Rotations with an angle of exactly zero are
//! dropped, so structured states (real amplitudes, uniform weights, basis
//! states) come out shorter.
//!
//! # References
//!
//! - Möttönen, Vartiainen, Bergholm, Salomaa, "Transformation of quantum
//!   states using uniformly controlled rotations" (2004)
//! - Möttönen, Vartiainen, "Decompositions of general quantum gates" (2005)

pub mod angles;
pub mod gray_code;
pub mod state_preparation;
pub mod transform;
pub mod uniform_rotation;

use qprep_core::{GateKind, Operation, QubitId};
use qprep_state::DEFAULT_NORM_TOLERANCE;
use serde::{Deserialize, Serialize};

// Re-export main entry points
pub use gray_code::{gray_code, GrayCode};
pub use state_preparation::{prepare_state, prepare_state_with_config, MottonenPreparer};
pub use uniform_rotation::uniform_rotation;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for state preparation
#[derive(Debug, Clone, PartialEq)]
pub struct DecompositionConfig {
    /// Maximum allowed `|Σ|aᵢ|² - 1|` of the input
    pub norm_tolerance: f64,

    /// Qubit count from which cascade angles are solved in parallel
    ///
    /// The emitted sequence is identical either way.
    pub parallel_threshold: usize,

    /// Check normalization before decomposing
    ///
    /// The length check always runs.
    pub validate_input: bool,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            parallel_threshold: 12,
            validate_input: true,
        }
    }
}

// ============================================================================
// Preparation Result
// ============================================================================

/// Ordered operation sequence preparing a state from |0...0⟩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationCircuit {
    /// Wires in the caller's declared order
    wires: Vec<QubitId>,

    /// Y cascade followed by Z cascade
    operations: Vec<Operation>,

    /// Rotations dropped because their angle was exactly zero
    elided_rotations: usize,
}

impl PreparationCircuit {
    pub(crate) fn new(
        wires: Vec<QubitId>,
        operations: Vec<Operation>,
        elided_rotations: usize,
    ) -> Self {
        Self {
            wires,
            operations,
            elided_rotations,
        }
    }

    /// Wires the circuit acts on, in declared order
    #[inline]
    pub fn wires(&self) -> &[QubitId] {
        &self.wires
    }

    /// Number of wires
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.wires.len()
    }

    /// The operations, in application order
    #[inline]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Consume the circuit, returning its operations
    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    /// Iterate over the operations in application order
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Total number of operations
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether no operation is needed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of operations of the given kind
    pub fn count(&self, kind: GateKind) -> usize {
        self.operations.iter().filter(|op| op.kind() == kind).count()
    }

    /// Number of single-qubit rotations
    pub fn rotation_count(&self) -> usize {
        self.operations.iter().filter(|op| op.is_rotation()).count()
    }

    /// Number of CNOTs (the two-qubit gate count)
    pub fn cnot_count(&self) -> usize {
        self.count(GateKind::Cnot)
    }

    /// Rotations dropped because their angle was exactly zero
    #[inline]
    pub fn elided_rotations(&self) -> usize {
        self.elided_rotations
    }

    /// The inverse sequence, mapping the prepared state back to |0...0⟩
    ///
    /// Operations are reversed and rotation angles negated.
    pub fn adjoint(&self) -> Self {
        Self {
            wires: self.wires.clone(),
            operations: self.operations.iter().rev().map(Operation::inverse).collect(),
            elided_rotations: self.elided_rotations,
        }
    }
}

impl<'a> IntoIterator for &'a PreparationCircuit {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for PreparationCircuit {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}
