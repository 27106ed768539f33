//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::PI;

use vandra_ir::{Gate, Instruction, InstructionKind, QubitId};

/// A statevector representing a quantum state.
///
/// Basis indexing follows the usual mask convention: qubit `q` owns bit `q`
/// of the basis index. Measurement-order concerns (most-significant-first
/// registers) are handled by the runner when it folds a sampled basis state
/// through the circuit's measurement map.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Borrow the amplitude vector.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Consume the statevector, returning the amplitude vector.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Apply an instruction to the statevector.
    ///
    /// Measurements and barriers do not modify the state; sampling happens
    /// separately against the final amplitudes.
    pub fn apply(&mut self, instruction: &Instruction) {
        match &instruction.kind {
            InstructionKind::Gate(gate) => self.apply_gate(*gate, &instruction.qubits),
            InstructionKind::Measure | InstructionKind::Barrier => {}
        }
    }

    fn apply_gate(&mut self, gate: Gate, qubits: &[QubitId]) {
        match gate {
            Gate::I => {}
            Gate::X => self.apply_x(qubits[0].0 as usize),
            Gate::Y => self.apply_y(qubits[0].0 as usize),
            Gate::Z => self.apply_z(qubits[0].0 as usize),
            Gate::H => self.apply_h(qubits[0].0 as usize),
            Gate::S => self.apply_phase(qubits[0].0 as usize, PI / 2.0),
            Gate::Sdg => self.apply_phase(qubits[0].0 as usize, -PI / 2.0),
            Gate::Mcx { controls } => {
                let k = controls as usize;
                let ctrl_mask = qubits[..k]
                    .iter()
                    .fold(0usize, |mask, q| mask | (1 << q.0 as usize));
                self.apply_mcx(ctrl_mask, qubits[k].0 as usize);
            }
        }
    }

    // =========================================================================
    // Gate kernels
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    /// Multi-controlled X: amplitudes of the two target branches swap on
    /// every basis state whose control bits are all set.
    fn apply_mcx(&mut self, ctrl_mask: usize, target: usize) {
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask) == ctrl_mask && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Readout
    // =========================================================================

    /// Squared-magnitude sum — 1.0 up to rounding for any gate sequence.
    pub fn norm_sqr_sum(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Per-basis-state probabilities |amplitude|².
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Draw one basis state from the |amplitude|² distribution (CDF method).
    pub fn sample_with<R: Rng>(&self, rng: &mut R) -> usize {
        let u: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if u < cumulative {
                return i;
            }
        }
        // Floating-point rounding: return last index.
        self.amplitudes.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
        assert!((sv.norm_sqr_sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hadamard_superposition() {
        let mut sv = Statevector::new(1);
        sv.apply_h(0);
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_mcx_flips_only_when_controls_set() {
        // |01⟩: control q0 set, target q1 clear → flips to |11⟩.
        let mut sv = Statevector::new(2);
        sv.apply_x(0);
        sv.apply_mcx(0b01, 1);
        assert!(approx_eq(sv.amplitudes()[0b11], Complex64::new(1.0, 0.0)));

        // |00⟩: control clear → untouched.
        let mut sv = Statevector::new(2);
        sv.apply_mcx(0b01, 1);
        assert!(approx_eq(sv.amplitudes()[0b00], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_mcx_zero_controls_is_x() {
        let mut sv = Statevector::new(1);
        sv.apply_mcx(0, 0);
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_phase_gate_is_unitary() {
        let mut sv = Statevector::new(1);
        sv.apply_h(0);
        sv.apply_phase(0, PI / 2.0);
        assert!((sv.norm_sqr_sum() - 1.0).abs() < 1e-12);
        assert!(approx_eq(
            sv.amplitudes()[1],
            Complex64::new(0.0, 1.0 / 2.0_f64.sqrt())
        ));
    }

    #[test]
    fn test_sample_deterministic_state() {
        // |1⟩ must always sample to 1.
        let mut sv = Statevector::new(1);
        sv.apply_x(0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sv.sample_with(&mut rng), 1);
        }
    }
}
