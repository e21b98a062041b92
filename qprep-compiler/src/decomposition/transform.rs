//! Sign matrix mapping multi-controlled angles to Gray code angles
//!
//! A uniformly-controlled rotation is specified by one angle `αⱼ` per control
//! pattern. The Gray code circuit instead applies angles `θᵢ` between CNOTs.
//! The two are related by `θ = Mᵀ α / L` where `M[r][c] = (-1)^(r · g(c))`,
//! `g` is the Gray code value and `·` the bitwise dot product
//! (Möttönen et al., 2004, Eq. 3).

/// Gray code value of `value`
#[inline]
pub const fn gray_value(value: usize) -> usize {
    (value >> 1) ^ value
}

/// Entry `(row, col)` of the sign matrix
///
/// `(-1)` raised to the number of bits shared by `row` and the Gray code
/// of `col`.
///
/// # Example
/// ```
/// use qprep_compiler::decomposition::transform::matrix_entry;
///
/// assert_eq!(matrix_entry(0, 3), 1.0);
/// assert_eq!(matrix_entry(1, 1), -1.0);
/// ```
#[inline]
pub fn matrix_entry(row: usize, col: usize) -> f64 {
    if (row & gray_value(col)).count_ones() % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Map multi-controlled angles `alpha` to Gray code rotation angles
///
/// `theta[i] = Σⱼ matrix_entry(j, i) · alpha[j] / L` with `L = alpha.len()`,
/// which must be a power of two.
pub fn compute_theta(alpha: &[f64]) -> Vec<f64> {
    let len = alpha.len();
    debug_assert!(len.is_power_of_two(), "angle count {} is not a power of two", len);
    let scale = len as f64;

    (0..len)
        .map(|i| {
            alpha
                .iter()
                .enumerate()
                .map(|(j, &a)| matrix_entry(j, i) * a)
                .sum::<f64>()
                / scale
        })
        .collect()
}
