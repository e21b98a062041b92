//! Elementwise and reducing primitives over dense buffers
//!
//! These are the only array operations the angle solvers need. They work
//! on plain slices so callers can hand in contiguous sub-blocks of a
//! state without copying.

use num_complex::Complex64;

/// Elementwise absolute value
pub fn magnitudes(amplitudes: &[Complex64]) -> Vec<f64> {
    amplitudes.iter().map(|a| a.norm()).collect()
}

/// Elementwise complex argument in `(-π, π]`
pub fn phases(amplitudes: &[Complex64]) -> Vec<f64> {
    amplitudes.iter().map(|a| a.arg()).collect()
}

/// Sum of squares of a block
#[inline]
pub fn sum_squares(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum()
}

/// Elementwise `numerator / denominator`, yielding zero wherever the
/// denominator is exactly zero
///
/// Only the shorter of the two inputs' lengths is produced.
pub fn safe_divide(numerator: &[f64], denominator: &[f64]) -> Vec<f64> {
    numerator
        .iter()
        .zip(denominator)
        .map(|(&n, &d)| if d != 0.0 { n / d } else { 0.0 })
        .collect()
}
