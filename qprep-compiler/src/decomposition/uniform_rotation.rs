//! Gray code expansion of uniformly-controlled rotations
//!
//! A uniformly-controlled rotation with `c` controls applies `R(αⱼ)` to the
//! target when the controls hold pattern `j`. It expands into `2^c`
//! single-qubit rotations by the Gray code angles `θ` (see
//! [`compute_theta`]), each followed by a CNOT from the control whose bit
//! flips at that step of the Gray code. The final CNOT closes the cycle
//! back to the all-zero pattern and is always emitted.
//!
//! ```text
//! ctrl: ───────────■───────────■──
//!       ┌───────┐┌─┴─┐┌───────┐┌─┴─┐
//! tgt:  ┤ R(θ₀) ├┤ X ├┤ R(θ₁) ├┤ X ├
//!       └───────┘└───┘└───────┘└───┘
//! ```
//!
//! See Möttönen and Vartiainen (2005), Fig. 7a.

use super::gray_code::{gray_code, MAX_GRAY_RANK};
use super::transform::compute_theta;
use qprep_core::{Operation, QuantumError, QubitId, Result, RotationAxis};
use tracing::trace;

/// Expand a uniformly-controlled rotation into rotations and CNOTs
///
/// `alpha` holds one angle per control pattern and must have exactly
/// `2^controls.len()` entries.
///
/// # Errors
/// Returns error if the angle count does not match the controls, or a wire
/// appears twice among the controls and target
///
/// # Example
/// ```
/// use qprep_compiler::decomposition::uniform_rotation::uniform_rotation;
/// use qprep_core::{GateKind, QubitId, RotationAxis};
///
/// let ops = uniform_rotation(RotationAxis::Y, &[1.0, 0.5], &[QubitId::new(0)], QubitId::new(1)).unwrap();
/// let kinds: Vec<GateKind> = ops.iter().map(|op| op.kind()).collect();
/// assert_eq!(kinds, vec![GateKind::RotationY, GateKind::Cnot, GateKind::RotationY, GateKind::Cnot]);
/// ```
pub fn uniform_rotation(
    axis: RotationAxis,
    alpha: &[f64],
    controls: &[QubitId],
    target: QubitId,
) -> Result<Vec<Operation>> {
    let mut operations = Vec::with_capacity(2 * alpha.len());
    uniform_rotation_into(&mut operations, axis, alpha, controls, target)?;
    Ok(operations)
}

/// Append the expansion of a uniformly-controlled rotation to `operations`
///
/// Rotations whose angle is exactly zero are not emitted; the number of
/// rotations dropped this way is returned. CNOTs are never dropped.
///
/// On error nothing is appended.
pub fn uniform_rotation_into(
    operations: &mut Vec<Operation>,
    axis: RotationAxis,
    alpha: &[f64],
    controls: &[QubitId],
    target: QubitId,
) -> Result<usize> {
    validate_wires(controls, target)?;
    if controls.len() > MAX_GRAY_RANK {
        return Err(QuantumError::InvalidRank {
            rank: controls.len(),
            max: MAX_GRAY_RANK,
        });
    }
    if alpha.len() != 1 << controls.len() {
        return Err(QuantumError::angle_count_mismatch(controls.len(), alpha.len()));
    }

    let theta = compute_theta(alpha);
    let mut elided = 0;

    if controls.is_empty() {
        if theta[0] != 0.0 {
            operations.push(Operation::rotation(axis, theta[0], target));
        } else {
            elided += 1;
        }
        return Ok(elided);
    }

    let code = gray_code(controls.len())?;
    for (angle, control_index) in theta.iter().zip(code.control_indices()) {
        if *angle != 0.0 {
            operations.push(Operation::rotation(axis, *angle, target));
        } else {
            trace!(?axis, %target, "eliding zero-angle rotation");
            elided += 1;
        }
        operations.push(Operation::Cnot {
            control: controls[control_index],
            target,
        });
    }

    Ok(elided)
}

fn validate_wires(controls: &[QubitId], target: QubitId) -> Result<()> {
    for (i, control) in controls.iter().enumerate() {
        if *control == target || controls[i + 1..].contains(control) {
            return Err(QuantumError::DuplicateQubit(*control));
        }
    }
    Ok(())
}
