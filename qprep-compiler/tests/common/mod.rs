//! Reference state-vector applier used to check prepared circuits

#![allow(dead_code)]

use num_complex::Complex64;
use qprep_compiler::PreparationCircuit;
use qprep_core::{Operation, QubitId};
use qprep_state::StateVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Apply a 2x2 matrix to `qubit` (bit position, 0 = least significant)
pub fn apply_gate_scalar(state: &mut [Complex64], matrix: &[[Complex64; 2]; 2], qubit: usize) {
    let qubit_mask = 1 << qubit;

    for i in 0..state.len() {
        if i & qubit_mask != 0 {
            continue;
        }
        let j = i | qubit_mask;

        let amp0 = state[i];
        let amp1 = state[j];
        state[i] = matrix[0][0] * amp0 + matrix[0][1] * amp1;
        state[j] = matrix[1][0] * amp0 + matrix[1][1] * amp1;
    }
}

/// Apply a CNOT between bit positions
pub fn apply_cnot(state: &mut [Complex64], control: usize, target: usize) {
    let control_mask = 1 << control;
    let target_mask = 1 << target;

    for i in 0..state.len() {
        if i & control_mask != 0 && i & target_mask == 0 {
            state.swap(i, i | target_mask);
        }
    }
}

/// Run `circuit` on |0...0⟩; the first declared wire is the most
/// significant bit
pub fn simulate(circuit: &PreparationCircuit) -> Vec<Complex64> {
    simulate_from(circuit, &basis_state(circuit.num_qubits(), 0))
}

/// Run `circuit` starting from `initial`
pub fn simulate_from(circuit: &PreparationCircuit, initial: &[Complex64]) -> Vec<Complex64> {
    let wires = circuit.wires();
    let bit = |wire: QubitId| -> usize {
        wire.bit_position(wires).expect("operation on undeclared wire")
    };

    let mut state = initial.to_vec();
    for op in circuit {
        match *op {
            Operation::Cnot { control, target } => apply_cnot(&mut state, bit(control), bit(target)),
            _ => {
                let matrix = op.matrix().expect("rotation has a matrix");
                apply_gate_scalar(&mut state, &matrix, bit(op.target()));
            }
        }
    }
    state
}

/// Computational basis state |index⟩
pub fn basis_state(num_qubits: usize, index: usize) -> Vec<Complex64> {
    let mut state = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
    state[index] = Complex64::new(1.0, 0.0);
    state
}

/// `|⟨a|b⟩|²`, one when the states agree up to a global phase
pub fn fidelity(a: &[Complex64], b: &[Complex64]) -> f64 {
    let a = StateVector::from_vec(a.to_vec()).expect("valid state");
    let b = StateVector::from_vec(b.to_vec()).expect("valid state");
    a.fidelity(&b).expect("matching dimensions")
}

/// Normalize in place
pub fn normalize(state: &mut [Complex64]) {
    let norm = state.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
    for amp in state.iter_mut() {
        *amp /= norm;
    }
}

/// Seeded random normalized complex state
pub fn random_state(rng: &mut StdRng, num_qubits: usize) -> Vec<Complex64> {
    let mut state: Vec<Complex64> = (0..1 << num_qubits)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    normalize(&mut state);
    state
}

/// Seeded random normalized state with non-negative real amplitudes
pub fn random_real_state(rng: &mut StdRng, num_qubits: usize) -> Vec<Complex64> {
    let mut state: Vec<Complex64> = (0..1 << num_qubits)
        .map(|_| Complex64::new(rng.gen_range(0.0..1.0), 0.0))
        .collect();
    normalize(&mut state);
    state
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
