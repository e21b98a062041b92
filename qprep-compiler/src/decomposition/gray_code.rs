//! Reflected binary Gray codes
//!
//! The code of rank `r` is built by reflection: given the code `g` of rank
//! `r - 1`, append `g` reversed with a leading `1`, then give the original
//! entries a leading `0`. Consecutive entries (including the wrap from the
//! last entry back to the first) differ in exactly one bit, which is what
//! lets a uniformly-controlled rotation toggle one control at a time.
//!
//! ```text
//! rank 1: 0 1
//! rank 2: 00 01 11 10
//! rank 3: 000 001 011 010 110 111 101 100
//! ```
//!
//! Codes are stored as integers; [`GrayCode::bit_string`] renders an entry
//! at the code's bit width.

use qprep_core::{QuantumError, Result};
use qprep_state::MAX_QUBITS;

/// Largest rank [`gray_code`] will generate
pub const MAX_GRAY_RANK: usize = MAX_QUBITS;

/// Ordered reflected binary Gray code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayCode {
    width: usize,
    codes: Vec<usize>,
}

/// Generate the Gray code of the given rank
///
/// Rank 0 yields the one-bit base code `["0", "1"]`; callers expanding a
/// rotation with no controls must handle that case on their own.
///
/// # Errors
/// Returns [`QuantumError::InvalidRank`] above [`MAX_GRAY_RANK`]
///
/// # Example
/// ```
/// use qprep_compiler::decomposition::gray_code::gray_code;
///
/// let code = gray_code(2).unwrap();
/// assert_eq!(code.bit_strings(), vec!["00", "01", "11", "10"]);
/// ```
pub fn gray_code(rank: usize) -> Result<GrayCode> {
    if rank > MAX_GRAY_RANK {
        return Err(QuantumError::InvalidRank {
            rank,
            max: MAX_GRAY_RANK,
        });
    }

    let mut codes: Vec<usize> = Vec::with_capacity(1 << rank.max(1));
    codes.extend([0, 1]);
    let mut width = 1;

    while width < rank {
        let high_bit = 1 << width;
        for i in (0..codes.len()).rev() {
            let reflected = codes[i] | high_bit;
            codes.push(reflected);
        }
        // The original half keeps its values: a leading zero.
        width += 1;
    }

    Ok(GrayCode { width, codes })
}

// Every code holds at least two entries.
#[allow(clippy::len_without_is_empty)]
impl GrayCode {
    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Entries as integers
    #[inline]
    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    /// Entry `index` as a binary string, most significant bit first
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    pub fn bit_string(&self, index: usize) -> String {
        format!("{:0width$b}", self.codes[index], width = self.width)
    }

    /// All entries as binary strings
    pub fn bit_strings(&self) -> Vec<String> {
        (0..self.len()).map(|i| self.bit_string(i)).collect()
    }

    /// Bit position that flips between entry `i` and entry `i + 1`,
    /// wrapping from the last entry back to the first
    pub fn control_indices(&self) -> Vec<usize> {
        let n = self.codes.len();
        (0..n)
            .map(|i| {
                let flipped = self.codes[i] ^ self.codes[(i + 1) % n];
                debug_assert!(flipped.is_power_of_two());
                flipped.trailing_zeros() as usize
            })
            .collect()
    }
}
