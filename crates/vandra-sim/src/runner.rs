//! Shot-sampling execution driver.

use rand::Rng;
use tracing::debug;

use num_complex::Complex64;
use vandra_ir::Circuit;
use vandra_types::{CancelToken, Counts};

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Execution limits.
///
/// The amplitude vector grows as 2^(qubit count), so the practical width
/// bound is configuration, not arithmetic buried in the runner. The default
/// of 20 qubits keeps a single statevector around 16 MiB.
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    /// Maximum circuit width accepted by [`StatevectorRunner::run`].
    pub max_qubits: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { max_qubits: 20 }
    }
}

/// Result of executing a circuit.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Histogram over measured outcomes; counts sum to `shots`.
    pub counts: Counts,
    /// Exact pre-measurement amplitude vector (length 2^width).
    pub amplitudes: Vec<Complex64>,
    /// Number of shots drawn.
    pub shots: u32,
}

/// Exact statevector executor.
///
/// Computes the final amplitude vector once by applying the instruction
/// sequence, then draws the requested number of independent categorical
/// samples from the |amplitude|² distribution. Both the histogram and the
/// amplitude vector are returned: exact probabilities serve analytic
/// consumers, sampled counts serve the statistical ones.
#[derive(Debug, Clone, Default)]
pub struct StatevectorRunner {
    config: RunnerConfig,
}

impl StatevectorRunner {
    /// Create a runner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with a custom width limit.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: RunnerConfig { max_qubits },
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Execute `circuit` and sample `shots` measurement outcomes.
    ///
    /// The caller supplies the random source; seeding it makes the histogram
    /// reproducible. `cancel` is honored between individual shots — a single
    /// statevector pass is atomic.
    pub fn run<R: Rng>(
        &self,
        circuit: &Circuit,
        shots: u32,
        rng: &mut R,
        cancel: &CancelToken,
    ) -> SimResult<RunOutcome> {
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.config.max_qubits as usize {
            return Err(SimError::CircuitTooLarge {
                qubits: num_qubits,
                max_qubits: self.config.max_qubits,
            });
        }
        if shots == 0 {
            return Err(SimError::InvalidShots(shots));
        }
        let measurement_map = circuit.measurement_map();
        if measurement_map.is_empty() {
            return Err(SimError::NoMeasurements);
        }

        debug!(
            circuit = circuit.name(),
            num_qubits,
            instructions = circuit.instructions().len(),
            shots,
            "running statevector execution"
        );

        let mut sv = Statevector::new(num_qubits);
        for instruction in circuit.instructions() {
            sv.apply(instruction);
        }

        let mut counts = Counts::new();
        for _ in 0..shots {
            if cancel.is_cancelled() {
                return Err(SimError::Cancelled);
            }
            let basis = sv.sample_with(rng);
            counts.record(readout(basis, &measurement_map));
        }

        debug!(outcomes = counts.len(), "execution complete");

        Ok(RunOutcome {
            counts,
            amplitudes: sv.into_amplitudes(),
            shots,
        })
    }
}

/// Fold a sampled basis state through the measurement map.
///
/// Classical bit 0 becomes the MOST significant bit of the outcome, matching
/// the most-significant-first register layout of the walk builders.
fn readout(basis: usize, measurement_map: &[(vandra_ir::QubitId, vandra_ir::ClbitId)]) -> u64 {
    let width = measurement_map.len();
    let mut outcome = 0u64;
    for (qubit, clbit) in measurement_map {
        let bit = (basis >> qubit.0 as usize) & 1;
        outcome |= (bit as u64) << (width - 1 - clbit.0 as usize);
    }
    outcome
}
