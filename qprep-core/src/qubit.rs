//! Wires and their place in a state vector index
//!
//! A wire list is read most significant first: for wires `[a, b, c]` the
//! basis index `0b110` means `a = 1, b = 1, c = 0`. The identifiers
//! themselves carry no position; only their order in the list does, so
//! `[q7, q2]` and `[q2, q7]` address the same amplitudes differently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire identifier, serialized as its plain index
///
/// # Example
/// ```
/// use qprep_core::QubitId;
///
/// let wires = [QubitId::new(7), QubitId::new(2)];
/// assert_eq!(QubitId::new(7).bit_position(&wires), Some(1));
/// assert_eq!(QubitId::new(2).bit_position(&wires), Some(0));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(usize);

impl QubitId {
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Wires `q0..q{n-1}` in declaration order, so `q0` is the most
    /// significant bit
    pub fn range(num_qubits: usize) -> Vec<QubitId> {
        (0..num_qubits).map(QubitId::new).collect()
    }

    /// Bit this wire occupies in a basis index over `wires`
    /// (0 = least significant), or `None` if it is not listed
    pub fn bit_position(self, wires: &[QubitId]) -> Option<usize> {
        wires
            .iter()
            .position(|w| *w == self)
            .map(|declared| wires.len() - 1 - declared)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_declared_wire_is_most_significant() {
        let wires = QubitId::range(3);
        assert_eq!(wires[0].bit_position(&wires), Some(2));
        assert_eq!(wires[1].bit_position(&wires), Some(1));
        assert_eq!(wires[2].bit_position(&wires), Some(0));
    }

    #[test]
    fn test_position_follows_list_order_not_identifier() {
        let q2 = QubitId::new(2);
        let q7 = QubitId::new(7);

        assert_eq!(q7.bit_position(&[q7, q2]), Some(1));
        assert_eq!(q7.bit_position(&[q2, q7]), Some(0));
    }

    #[test]
    fn test_undeclared_wire_has_no_position() {
        assert_eq!(QubitId::new(4).bit_position(&QubitId::range(3)), None);
        assert_eq!(QubitId::new(0).bit_position(&[]), None);
    }

    #[test]
    fn test_range_is_declaration_order() {
        assert_eq!(
            QubitId::range(3),
            vec![QubitId::new(0), QubitId::new(1), QubitId::new(2)]
        );
        assert!(QubitId::range(0).is_empty());
    }

    #[test]
    fn test_display_and_json() {
        let q: QubitId = 7.into();
        assert_eq!(q.to_string(), "q7");
        assert_eq!(serde_json::to_string(&q).unwrap(), "7");
        assert_eq!(usize::from(q), 7);
    }
}
