//! Elementary operations emitted by the decompositions
//!
//! An [`Operation`] is an immutable record of a single gate application:
//! a Y or Z rotation on one target wire, or a CNOT (bit flip) with one
//! control and one target. Sequences of operations are applied in order to
//! the all-zero reference state by a downstream execution engine.

use crate::{QuantumError, QubitId, Result};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Axis of a single-qubit rotation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationAxis {
    Y,
    Z,
}

impl RotationAxis {
    /// The gate kind emitted for rotations about this axis
    #[inline]
    pub const fn gate_kind(self) -> GateKind {
        match self {
            RotationAxis::Y => GateKind::RotationY,
            RotationAxis::Z => GateKind::RotationZ,
        }
    }
}

/// Kind of an emitted operation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    RotationY,
    RotationZ,
    Cnot,
}

impl GateKind {
    /// The gate name (e.g., "RY", "CNOT")
    pub const fn name(self) -> &'static str {
        match self {
            GateKind::RotationY => "RY",
            GateKind::RotationZ => "RZ",
            GateKind::Cnot => "CNOT",
        }
    }

    /// Number of qubits this gate acts on
    pub const fn num_qubits(self) -> usize {
        match self {
            GateKind::RotationY | GateKind::RotationZ => 1,
            GateKind::Cnot => 2,
        }
    }
}

/// A single gate applied to specific wires
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gate")]
pub enum Operation {
    /// `RY(angle)` on `target`
    #[serde(rename = "RY")]
    RotationY { angle: f64, target: QubitId },
    /// `RZ(angle)` on `target`
    #[serde(rename = "RZ")]
    RotationZ { angle: f64, target: QubitId },
    /// Flip `target` when `control` is set
    #[serde(rename = "CNOT")]
    Cnot { control: QubitId, target: QubitId },
}

impl Operation {
    /// Create a rotation about `axis`
    #[inline]
    pub const fn rotation(axis: RotationAxis, angle: f64, target: QubitId) -> Self {
        match axis {
            RotationAxis::Y => Operation::RotationY { angle, target },
            RotationAxis::Z => Operation::RotationZ { angle, target },
        }
    }

    /// Create a CNOT
    ///
    /// # Errors
    /// Returns [`QuantumError::DuplicateQubit`] if control and target coincide
    pub fn cnot(control: QubitId, target: QubitId) -> Result<Self> {
        if control == target {
            return Err(QuantumError::DuplicateQubit(control));
        }
        Ok(Operation::Cnot { control, target })
    }

    /// Kind of this operation
    #[inline]
    pub const fn kind(&self) -> GateKind {
        match self {
            Operation::RotationY { .. } => GateKind::RotationY,
            Operation::RotationZ { .. } => GateKind::RotationZ,
            Operation::Cnot { .. } => GateKind::Cnot,
        }
    }

    /// Rotation angle, `None` for CNOT
    #[inline]
    pub const fn angle(&self) -> Option<f64> {
        match self {
            Operation::RotationY { angle, .. } | Operation::RotationZ { angle, .. } => Some(*angle),
            Operation::Cnot { .. } => None,
        }
    }

    /// Target wire
    #[inline]
    pub const fn target(&self) -> QubitId {
        match self {
            Operation::RotationY { target, .. }
            | Operation::RotationZ { target, .. }
            | Operation::Cnot { target, .. } => *target,
        }
    }

    /// Control wire, `None` for rotations
    #[inline]
    pub const fn control(&self) -> Option<QubitId> {
        match self {
            Operation::Cnot { control, .. } => Some(*control),
            _ => None,
        }
    }

    /// Wires this operation acts on, control first
    pub fn qubits(&self) -> SmallVec<[QubitId; 2]> {
        match self {
            Operation::Cnot { control, target } => smallvec![*control, *target],
            _ => smallvec![self.target()],
        }
    }

    /// Whether this is a rotation
    #[inline]
    pub const fn is_rotation(&self) -> bool {
        !matches!(self, Operation::Cnot { .. })
    }

    /// The inverse operation
    ///
    /// Rotations negate their angle; CNOT is self-inverse.
    pub fn inverse(&self) -> Self {
        match *self {
            Operation::RotationY { angle, target } => Operation::RotationY {
                angle: -angle,
                target,
            },
            Operation::RotationZ { angle, target } => Operation::RotationZ {
                angle: -angle,
                target,
            },
            cnot @ Operation::Cnot { .. } => cnot,
        }
    }

    /// 2x2 unitary of a rotation, `None` for CNOT
    ///
    /// `RY(θ) = [[cos θ/2, -sin θ/2], [sin θ/2, cos θ/2]]` and
    /// `RZ(θ) = diag(e^{-iθ/2}, e^{iθ/2})`.
    pub fn matrix(&self) -> Option<[[Complex64; 2]; 2]> {
        match *self {
            Operation::RotationY { angle, .. } => {
                let (s, c) = (angle / 2.0).sin_cos();
                Some([
                    [Complex64::new(c, 0.0), Complex64::new(-s, 0.0)],
                    [Complex64::new(s, 0.0), Complex64::new(c, 0.0)],
                ])
            }
            Operation::RotationZ { angle, .. } => {
                let zero = Complex64::new(0.0, 0.0);
                Some([
                    [Complex64::from_polar(1.0, -angle / 2.0), zero],
                    [zero, Complex64::from_polar(1.0, angle / 2.0)],
                ])
            }
            Operation::Cnot { .. } => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::RotationY { angle, target } | Operation::RotationZ { angle, target } => {
                write!(f, "{}({:.6}) {}", self.kind().name(), angle, target)
            }
            Operation::Cnot { control, target } => write!(f, "CNOT {}, {}", control, target),
        }
    }
}
