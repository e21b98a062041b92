//! Dense state vector with shape and normalization checks

use crate::error::{Result, StateError};
use crate::ops;
use num_complex::Complex64;

/// Largest qubit count a dense buffer is allowed to address
pub const MAX_QUBITS: usize = 30;

/// Default tolerance on `|Σ|aᵢ|² - 1|`
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-3;

/// Read-only dense state vector of length `2^num_qubits`
///
/// Index `i` addresses the computational basis state whose binary
/// expansion lists the wires most significant first.
///
/// # Example
///
/// ```
/// use qprep_state::StateVector;
///
/// let state = StateVector::zero_state(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create the reference state |0...0⟩
    ///
    /// # Errors
    /// Returns error if `num_qubits` exceeds [`MAX_QUBITS`]
    pub fn zero_state(num_qubits: usize) -> Result<Self> {
        let dimension = checked_dimension(num_qubits)?;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state vector for `num_qubits` wires from raw amplitudes
    ///
    /// # Errors
    /// Returns error if the length is not `2^num_qubits` or any amplitude
    /// is NaN or infinite
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let dimension = checked_dimension(num_qubits)?;

        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }

        Self::from_vec_unchecked_shape(num_qubits, amplitudes.to_vec())
    }

    /// Create a state vector inferring the qubit count from the length
    ///
    /// # Errors
    /// Returns error if the length is not a power of two
    pub fn from_vec(amplitudes: Vec<Complex64>) -> Result<Self> {
        let dimension = amplitudes.len();
        if !dimension.is_power_of_two() {
            return Err(StateError::InvalidDimension { dimension });
        }

        let num_qubits = dimension.trailing_zeros() as usize;
        checked_dimension(num_qubits)?;

        Self::from_vec_unchecked_shape(num_qubits, amplitudes)
    }

    fn from_vec_unchecked_shape(num_qubits: usize, amplitudes: Vec<Complex64>) -> Result<Self> {
        if let Some(index) = amplitudes
            .iter()
            .position(|a| !a.re.is_finite() || !a.im.is_finite())
        {
            return Err(StateError::NonFinite { index });
        }

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the state amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Sum of squared magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Fail unless the state is normalized within `tolerance`
    ///
    /// # Errors
    /// Returns [`StateError::NotNormalized`] with the measured squared norm
    pub fn validate_normalization(&self, tolerance: f64) -> Result<()> {
        let norm_sqr = self.norm_sqr();
        if (norm_sqr - 1.0).abs() <= tolerance {
            Ok(())
        } else {
            Err(StateError::NotNormalized {
                norm_sqr,
                tolerance,
            })
        }
    }

    /// Elementwise magnitudes `|aᵢ|`
    pub fn magnitudes(&self) -> Vec<f64> {
        ops::magnitudes(&self.amplitudes)
    }

    /// Elementwise phases `arg(aᵢ)`
    pub fn phases(&self) -> Vec<f64> {
        ops::phases(&self.amplitudes)
    }

    /// Inner product `⟨self|other⟩`
    ///
    /// # Errors
    /// Returns error if the dimensions differ
    pub fn inner(&self, other: &StateVector) -> Result<Complex64> {
        if self.dimension() != other.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }

        Ok(self
            .amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// Fidelity `|⟨self|other⟩|²`, insensitive to global phase
    ///
    /// # Errors
    /// Returns error if the dimensions differ
    pub fn fidelity(&self, other: &StateVector) -> Result<f64> {
        Ok(self.inner(other)?.norm_sqr())
    }
}

fn checked_dimension(num_qubits: usize) -> Result<usize> {
    if num_qubits > MAX_QUBITS {
        return Err(StateError::TooManyQubits {
            num_qubits,
            max: MAX_QUBITS,
        });
    }
    Ok(1 << num_qubits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn uniform(num_qubits: usize) -> Vec<Complex64> {
        let dimension = 1 << num_qubits;
        let amp = 1.0 / (dimension as f64).sqrt();
        vec![Complex64::new(amp, 0.0); dimension]
    }

    #[test]
    fn test_zero_state() {
        let state = StateVector::zero_state(3).unwrap();
        let amplitudes = state.amplitudes();

        assert_eq!(amplitudes[0], Complex64::new(1.0, 0.0));
        for amp in &amplitudes[1..] {
            assert_eq!(*amp, Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_zero_qubit_state() {
        let state = StateVector::from_amplitudes(0, &[Complex64::new(1.0, 0.0)]).unwrap();
        assert_eq!(state.dimension(), 1);
        assert!(state.validate_normalization(DEFAULT_NORM_TOLERANCE).is_ok());
    }

    #[test]
    fn test_from_amplitudes() {
        let amplitudes = uniform(2);
        let state = StateVector::from_amplitudes(2, &amplitudes).unwrap();
        assert_eq!(state.amplitudes(), amplitudes.as_slice());
        assert_relative_eq!(state.norm_sqr(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        let amplitudes = vec![Complex64::new(0.5, 0.0); 3];
        let result = StateVector::from_amplitudes(2, &amplitudes);
        assert_eq!(
            result,
            Err(StateError::DimensionMismatch {
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_from_vec_infers_qubits() {
        let state = StateVector::from_vec(uniform(3)).unwrap();
        assert_eq!(state.num_qubits(), 3);

        let result = StateVector::from_vec(vec![Complex64::new(1.0, 0.0); 3]);
        assert_eq!(result, Err(StateError::InvalidDimension { dimension: 3 }));
    }

    #[test]
    fn test_too_many_qubits() {
        let result = StateVector::zero_state(MAX_QUBITS + 1);
        assert!(matches!(result, Err(StateError::TooManyQubits { .. })));
    }

    #[test]
    fn test_non_finite_rejected() {
        let amplitudes = [Complex64::new(1.0, 0.0), Complex64::new(f64::NAN, 0.0)];
        let result = StateVector::from_amplitudes(1, &amplitudes);
        assert_eq!(result, Err(StateError::NonFinite { index: 1 }));
    }

    #[test]
    fn test_normalization_check() {
        let state =
            StateVector::from_amplitudes(1, &[Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)])
                .unwrap();

        match state.validate_normalization(DEFAULT_NORM_TOLERANCE) {
            Err(StateError::NotNormalized { norm_sqr, .. }) => {
                assert_relative_eq!(norm_sqr, 2.0);
            }
            other => panic!("Expected NotNormalized, got {:?}", other),
        }
    }

    #[test]
    fn test_normalization_tolerance_is_inclusive_of_small_drift() {
        let amp = (0.5_f64 + 2e-4).sqrt();
        let state =
            StateVector::from_amplitudes(1, &[Complex64::new(amp, 0.0), Complex64::new(amp, 0.0)])
                .unwrap();

        assert!(state.validate_normalization(DEFAULT_NORM_TOLERANCE).is_ok());
        assert!(state.validate_normalization(1e-6).is_err());
    }

    #[test]
    fn test_fidelity_ignores_global_phase() {
        let a = StateVector::from_vec(uniform(2)).unwrap();
        let phase = Complex64::from_polar(1.0, 0.7);
        let rotated: Vec<Complex64> = a.amplitudes().iter().map(|x| *x * phase).collect();
        let b = StateVector::from_vec(rotated).unwrap();

        assert_relative_eq!(a.fidelity(&b).unwrap(), 1.0, epsilon = 1e-12);
        assert!(a.fidelity(&StateVector::zero_state(3).unwrap()).is_err());
    }
}
