//! Driver running the Y and Z cascades
//!
//! Wires are processed in reverse of the declared order: level `k` targets
//! `reversed[k - 1]` and is controlled by `reversed[k..]`, so the first
//! declared wire is the most significant bit of a state index and is
//! rotated first, with no controls.

use super::angles::{alpha_y, alpha_z};
use super::uniform_rotation::uniform_rotation_into;
use super::{DecompositionConfig, PreparationCircuit};
use crate::error::Result;
use qprep_core::{Complex64, QuantumError, QubitId, RotationAxis};
use qprep_state::{StateError, StateVector, MAX_QUBITS};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Möttönen state preparation
///
/// Stateless apart from its configuration; repeated calls on the same input
/// return identical sequences.
///
/// # Example
///
/// ```
/// use qprep_compiler::MottonenPreparer;
/// use qprep_core::{Complex64, QubitId};
///
/// let h = 1.0 / 2.0_f64.sqrt();
/// let bell = [
///     Complex64::new(h, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(h, 0.0),
/// ];
///
/// let preparer = MottonenPreparer::new();
/// let circuit = preparer.prepare(&bell, &QubitId::range(2)).unwrap();
/// assert!(circuit.cnot_count() > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MottonenPreparer {
    config: DecompositionConfig,
}

impl MottonenPreparer {
    /// Create a preparer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a preparer with an explicit configuration
    pub fn with_config(config: DecompositionConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &DecompositionConfig {
        &self.config
    }

    /// Decompose `amplitudes` into operations on `wires`
    ///
    /// # Errors
    /// - duplicate wires
    /// - `amplitudes.len() != 2^wires.len()`
    /// - non-finite amplitudes
    /// - squared magnitudes not summing to one within
    ///   [`norm_tolerance`](DecompositionConfig::norm_tolerance)
    #[instrument(skip_all, fields(num_qubits = wires.len()))]
    pub fn prepare(&self, amplitudes: &[Complex64], wires: &[QubitId]) -> Result<PreparationCircuit> {
        let state = StateVector::from_amplitudes(wires.len(), amplitudes)?;
        self.prepare_state_vector(&state, wires)
    }

    /// Decompose an already validated [`StateVector`]
    ///
    /// # Errors
    /// Same as [`prepare`](Self::prepare)
    pub fn prepare_state_vector(
        &self,
        state: &StateVector,
        wires: &[QubitId],
    ) -> Result<PreparationCircuit> {
        validate_distinct(wires)?;
        if wires.len() > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits: wires.len(),
                max: MAX_QUBITS,
            }
            .into());
        }
        if state.num_qubits() != wires.len() {
            return Err(StateError::DimensionMismatch {
                expected: 1 << wires.len(),
                actual: state.dimension(),
            }
            .into());
        }
        if self.config.validate_input {
            state.validate_normalization(self.config.norm_tolerance)?;
        }

        let n = wires.len();
        let reversed: Vec<QubitId> = wires.iter().rev().copied().collect();

        let magnitudes = state.magnitudes();
        let phases = state.phases();

        let parallel = n >= self.config.parallel_threshold;
        let y_angles = cascade_angles(n, parallel, |k| alpha_y(&magnitudes, n, k));
        let z_angles = cascade_angles(n, parallel, |k| alpha_z(&phases, n, k));

        let mut operations = Vec::new();
        let mut elided = 0;

        for (axis, angles) in [(RotationAxis::Y, y_angles), (RotationAxis::Z, z_angles)] {
            for (k, alpha) in (1..=n).rev().zip(angles) {
                if alpha.is_empty() {
                    continue;
                }

                let controls = &reversed[k..];
                let target = reversed[k - 1];
                let before = operations.len();
                elided += uniform_rotation_into(&mut operations, axis, &alpha, controls, target)?;

                debug!(
                    ?axis,
                    k,
                    controls = controls.len(),
                    %target,
                    emitted = operations.len() - before,
                    "expanded uniformly-controlled rotation"
                );
            }
        }

        debug!(
            operations = operations.len(),
            elided, "state preparation complete"
        );

        Ok(PreparationCircuit::new(wires.to_vec(), operations, elided))
    }
}

/// Solve one cascade's angle vectors for `k = n, n-1, ..., 1`, in that order
fn cascade_angles<F>(n: usize, parallel: bool, solve: F) -> Vec<Vec<f64>>
where
    F: Fn(usize) -> Vec<f64> + Sync,
{
    if parallel {
        (1..n + 1).into_par_iter().rev().map(&solve).collect()
    } else {
        (1..=n).rev().map(&solve).collect()
    }
}

fn validate_distinct(wires: &[QubitId]) -> qprep_core::Result<()> {
    for (i, wire) in wires.iter().enumerate() {
        if wires[i + 1..].contains(wire) {
            return Err(QuantumError::DuplicateQubit(*wire));
        }
    }
    Ok(())
}

/// Decompose `amplitudes` into operations on `wires` with the default
/// configuration
///
/// # Errors
/// See [`MottonenPreparer::prepare`]
pub fn prepare_state(amplitudes: &[Complex64], wires: &[QubitId]) -> Result<PreparationCircuit> {
    MottonenPreparer::new().prepare(amplitudes, wires)
}

/// Decompose `amplitudes` into operations on `wires` with `config`
///
/// # Errors
/// See [`MottonenPreparer::prepare`]
pub fn prepare_state_with_config(
    amplitudes: &[Complex64],
    wires: &[QubitId],
    config: &DecompositionConfig,
) -> Result<PreparationCircuit> {
    MottonenPreparer::with_config(config.clone()).prepare(amplitudes, wires)
}
