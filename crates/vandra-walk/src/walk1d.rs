//! Coined quantum walk on a line segment of 2ⁿ positions.

use rand::Rng;
use tracing::debug;

use vandra_ir::Circuit;
use vandra_sim::{RunOutcome, StatevectorRunner};
use vandra_types::{CancelToken, Distribution};

use crate::error::{WalkError, WalkResult};
use crate::shift;

/// Initial coin phase preparation.
///
/// The coin starts in a balanced superposition (H followed by S). The
/// default `Positive` variant biases interference toward one side of the
/// line; `Negative` appends a Z, flipping the bias to the mirror image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chirality {
    /// H·S coin preparation.
    #[default]
    Positive,
    /// H·S·Z coin preparation (mirrored interference pattern).
    Negative,
}

/// Builder for the 1-D coined-walk circuit.
///
/// The position register has `position_bits` cells, most significant first,
/// covering positions [0, 2ⁿ). The walker starts at the midpoint 2ⁿ⁻¹. Each
/// step tosses the coin with a Hadamard, then shifts the position +1 when the
/// coin reads |1⟩ and −1 when it reads |0⟩ — both moves taken in
/// superposition, which is where the quantum walk's interference (and its
/// quadratic spread) comes from.
#[derive(Debug, Clone)]
pub struct Walk1D {
    position_bits: u32,
    steps: u32,
    chirality: Chirality,
}

impl Walk1D {
    /// A walk over 2^`position_bits` positions evolved for `steps` steps.
    pub fn new(position_bits: u32, steps: u32) -> Self {
        Self {
            position_bits,
            steps,
            chirality: Chirality::default(),
        }
    }

    /// Select the coin chirality.
    #[must_use]
    pub fn with_chirality(mut self, chirality: Chirality) -> Self {
        self.chirality = chirality;
        self
    }

    /// The position index the walker starts from (the register midpoint).
    pub fn start_position(&self) -> u64 {
        1 << (self.position_bits - 1)
    }

    /// Synthesize the walk circuit.
    ///
    /// Layout: `pos[0..n]` most-significant-first, one `coin` qubit.
    /// The position register is measured; the coin is not.
    pub fn circuit(&self) -> WalkResult<Circuit> {
        if self.position_bits == 0 {
            return Err(WalkError::InvalidPositionBits(0));
        }
        let n = self.position_bits;
        debug!(
            position_bits = n,
            steps = self.steps,
            chirality = ?self.chirality,
            "synthesising 1-D walk circuit"
        );

        let mut circuit = Circuit::new("walk1d");
        let pos = circuit.add_qreg("pos", n);
        let coin = circuit.add_qreg("coin", 1)[0];

        // Start at the midpoint: set the most significant position cell.
        circuit.x(pos[0])?;
        circuit.h(coin)?;
        circuit.s(coin)?;
        if self.chirality == Chirality::Negative {
            circuit.z(coin)?;
        }

        for _ in 0..self.steps {
            circuit.h(coin)?;
            // +1 when the coin is |1⟩.
            circuit.extend(shift::increment(&pos, &[coin]))?;
            // −1 when the coin is |0⟩: flank the coin with X to reuse the
            // controlled-on-1 primitive.
            circuit.x(coin)?;
            circuit.extend(shift::decrement(&pos, &[coin]))?;
            circuit.x(coin)?;
            circuit.barrier_all()?;
        }

        circuit.measure_register(&pos)?;
        Ok(circuit)
    }

    /// Synthesize and execute the walk.
    pub fn run<R: Rng>(
        &self,
        runner: &StatevectorRunner,
        shots: u32,
        rng: &mut R,
        cancel: &CancelToken,
    ) -> WalkResult<RunOutcome> {
        let circuit = self.circuit()?;
        Ok(runner.run(&circuit, shots, rng, cancel)?)
    }

    /// Aggregate an execution outcome into the shared table shape.
    ///
    /// Line positions carry no lattice coordinate, so rows are unlabelled.
    pub fn distribution(&self, outcome: &RunOutcome) -> WalkResult<Distribution> {
        Ok(Distribution::from_counts(
            &outcome.counts,
            outcome.shots as u64,
            |_| None,
        )?)
    }

    /// Exact per-position probabilities from the amplitude vector.
    ///
    /// Marginalizes the coin qubit out of |amplitude|², giving the
    /// distribution a shot count of infinity would converge to. Element k is
    /// the probability of measuring position k.
    pub fn position_probabilities(&self, outcome: &RunOutcome) -> Vec<f64> {
        let n = self.position_bits as usize;
        let mut probabilities = vec![0.0; 1 << n];
        for (basis, amplitude) in outcome.amplitudes.iter().enumerate() {
            // pos[i] is qubit i, the (n-1-i)-th bit of the position value.
            let mut position = 0usize;
            for i in 0..n {
                position |= ((basis >> i) & 1) << (n - 1 - i);
            }
            probabilities[position] += amplitude.norm_sqr();
        }
        probabilities
    }
}
