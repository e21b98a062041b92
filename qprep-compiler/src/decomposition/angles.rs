//! Rotation angles of the uniformly-controlled Y and Z cascades
//!
//! Both solvers take the full-length vector (`2^n` entries), the total
//! number of qubits `n` and the cascade level `k` (1-based, `k = n` being the
//! most significant wire). Level `k` has `2^(n-k)` control patterns; each
//! pattern owns a contiguous block of `2^k` amplitudes, split into a lower
//! and an upper half of `2^(k-1)` entries.

use qprep_state::ops::{safe_divide, sum_squares};

/// Angles of the uniformly-controlled Y rotation at level `k`
///
/// For pattern `j`:
///
/// ```text
/// α_y[j] = 2·asin( sqrt( Σ upper half of block j |a|² / Σ block j |a|² ) )
/// ```
///
/// A block with zero weight yields a zero angle.
///
/// # Panics
/// Panics if `k` is not in `1..=n` or `magnitudes.len() < 2^n`
pub fn alpha_y(magnitudes: &[f64], n: usize, k: usize) -> Vec<f64> {
    assert!((1..=n).contains(&k), "level {} outside 1..={}", k, n);

    let half = 1usize << (k - 1);
    let block = half << 1;
    let patterns = 1usize << (n - k);

    let (numerator, denominator): (Vec<f64>, Vec<f64>) = magnitudes[..patterns * block]
        .chunks_exact(block)
        .map(|amps| (sum_squares(&amps[half..]), sum_squares(amps)))
        .unzip();

    safe_divide(&numerator, &denominator)
        .into_iter()
        // Rounding can leave the ratio a hair above one.
        .map(|ratio| 2.0 * ratio.min(1.0).sqrt().asin())
        .collect()
}

/// Angles of the uniformly-controlled Z rotation at level `k`
///
/// For pattern `j`, the mean phase difference between the upper and lower
/// halves of block `j`:
///
/// ```text
/// α_z[j] = Σ_l (ω[upper l] - ω[lower l]) / 2^(k-1)
/// ```
///
/// # Panics
/// Panics if `k` is not in `1..=n` or `phases.len() < 2^n`
pub fn alpha_z(phases: &[f64], n: usize, k: usize) -> Vec<f64> {
    assert!((1..=n).contains(&k), "level {} outside 1..={}", k, n);

    let half = 1usize << (k - 1);
    let block = half << 1;
    let patterns = 1usize << (n - k);
    let scale = half as f64;

    phases[..patterns * block]
        .chunks_exact(block)
        .map(|omega| {
            let (lower, upper) = omega.split_at(half);
            upper
                .iter()
                .zip(lower)
                .map(|(hi, lo)| (hi - lo) / scale)
                .sum::<f64>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_alpha_y_single_qubit() {
        assert_eq!(alpha_y(&[1.0, 0.0], 1, 1), vec![0.0]);

        let flipped = alpha_y(&[0.0, 1.0], 1, 1);
        assert_relative_eq!(flipped[0], PI);

        let h = 0.5_f64.sqrt();
        let plus = alpha_y(&[h, h], 1, 1);
        assert_relative_eq!(plus[0], FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_alpha_y_lengths() {
        let a = vec![0.25; 16];
        for k in 1..=4 {
            assert_eq!(alpha_y(&a, 4, k).len(), 1 << (4 - k));
            assert_eq!(alpha_z(&a, 4, k).len(), 1 << (4 - k));
        }
    }

    #[test]
    fn test_alpha_y_uniform_two_qubits() {
        let a = [0.5; 4];

        let outer = alpha_y(&a, 2, 2);
        assert_eq!(outer.len(), 1);
        assert_relative_eq!(outer[0], FRAC_PI_2, epsilon = 1e-12);

        let inner = alpha_y(&a, 2, 1);
        assert_eq!(inner.len(), 2);
        assert_relative_eq!(inner[0], FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(inner[1], FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_alpha_y_masks_empty_blocks() {
        // Only |00⟩ and |01⟩ populated: block j = 1 at k = 1 has no weight.
        let h = 0.5_f64.sqrt();
        let inner = alpha_y(&[h, h, 0.0, 0.0], 2, 1);

        assert_relative_eq!(inner[0], FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(inner[1], 0.0);
        assert!(inner.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_alpha_z_single_qubit() {
        let alpha = alpha_z(&[0.25, 1.0], 1, 1);
        assert_relative_eq!(alpha[0], 0.75);
    }

    #[test]
    fn test_alpha_z_averages_over_half_block() {
        let omega = [0.0, 0.2, 1.0, 1.4];

        let outer = alpha_z(&omega, 2, 2);
        // ((1.0 - 0.0) + (1.4 - 0.2)) / 2
        assert_relative_eq!(outer[0], 1.1, epsilon = 1e-12);

        let inner = alpha_z(&omega, 2, 1);
        assert_relative_eq!(inner[0], 0.2, epsilon = 1e-12);
        assert_relative_eq!(inner[1], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_alpha_z_equal_phases_vanish() {
        let omega = [0.3; 8];
        for k in 1..=3 {
            assert!(alpha_z(&omega, 3, k).iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_level_zero_rejected() {
        alpha_y(&[1.0, 0.0], 1, 0);
    }
}
