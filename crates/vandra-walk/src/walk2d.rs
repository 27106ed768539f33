//! Coined quantum walk on a 2ⁿ×2ⁿ toroidal grid.

use rand::Rng;
use tracing::debug;

use vandra_ir::{Circuit, QubitId};
use vandra_sim::{RunOutcome, StatevectorRunner};
use vandra_types::{CancelToken, Coordinate, Distribution};

use crate::error::{WalkError, WalkResult};
use crate::shift;

/// Builder for the 2-D coined-walk circuit.
///
/// Two position registers of `bits_per_axis` cells each (x and y, both most
/// significant first) and a 2-qubit coin. Each step puts the coin in
/// superposition and applies a ±1 shift to the y register under one coin
/// pattern, then to the x register under the toggled pattern, so the axis
/// that moves is itself in superposition — an isotropic 2-D walk.
///
/// Measurement covers both position registers, x as the high half of the
/// outcome. The coin is not measured.
#[derive(Debug, Clone)]
pub struct Walk2D {
    bits_per_axis: u32,
    steps: u32,
    start: Option<Coordinate>,
}

impl Walk2D {
    /// A walk on a 2ⁿ×2ⁿ grid evolved for `steps` steps, starting at the
    /// grid center (2ⁿ⁻¹, 2ⁿ⁻¹).
    pub fn new(bits_per_axis: u32, steps: u32) -> Self {
        Self {
            bits_per_axis,
            steps,
            start: None,
        }
    }

    /// Override the start coordinate.
    #[must_use]
    pub fn with_start(mut self, start: Coordinate) -> Self {
        self.start = Some(start);
        self
    }

    /// Side length of the grid (2ⁿ).
    pub fn side(&self) -> u64 {
        1 << self.bits_per_axis
    }

    /// The coordinate the walker starts from.
    pub fn start_coordinate(&self) -> Coordinate {
        self.start.unwrap_or_else(|| {
            let center = 1u32 << (self.bits_per_axis - 1);
            Coordinate::new(center, center)
        })
    }

    /// The measured outcome the zero-step walk concentrates on.
    pub fn start_outcome(&self) -> u64 {
        let start = self.start_coordinate();
        ((start.x as u64) << self.bits_per_axis) | start.y as u64
    }

    /// Split a measured outcome into its (x, y) coordinate.
    pub fn coordinate_of(&self, outcome: u64) -> Coordinate {
        let mask = self.side() - 1;
        Coordinate::new(
            ((outcome >> self.bits_per_axis) & mask) as u32,
            (outcome & mask) as u32,
        )
    }

    /// Synthesize the walk circuit.
    pub fn circuit(&self) -> WalkResult<Circuit> {
        self.circuit_with_steps(self.steps)
    }

    fn circuit_with_steps(&self, steps: u32) -> WalkResult<Circuit> {
        if self.bits_per_axis == 0 {
            return Err(WalkError::InvalidPositionBits(0));
        }
        let n = self.bits_per_axis;
        let start = self.start_coordinate();
        if start.x as u64 >= self.side() || start.y as u64 >= self.side() {
            return Err(WalkError::StartOutOfRange {
                start,
                side: self.side(),
            });
        }
        debug!(
            bits_per_axis = n,
            steps,
            start = %start,
            "synthesising 2-D walk circuit"
        );

        let mut circuit = Circuit::new("walk2d");
        let x_reg = circuit.add_qreg("x", n);
        let y_reg = circuit.add_qreg("y", n);
        let coin = circuit.add_qreg("coin", 2);

        self.encode_start(&mut circuit, &x_reg, start.x)?;
        self.encode_start(&mut circuit, &y_reg, start.y)?;

        for _ in 0..steps {
            self.step(&mut circuit, &x_reg, &y_reg, &coin)?;
        }

        // x register first: its cells become the high bits of the outcome.
        let measured: Vec<QubitId> = x_reg.iter().chain(y_reg.iter()).copied().collect();
        circuit.measure_register(&measured)?;
        Ok(circuit)
    }

    /// Flip the register cells matching the big-endian binary of `value`.
    fn encode_start(
        &self,
        circuit: &mut Circuit,
        register: &[QubitId],
        value: u32,
    ) -> WalkResult<()> {
        let n = register.len();
        for (i, &cell) in register.iter().enumerate() {
            if (value >> (n - 1 - i)) & 1 == 1 {
                circuit.x(cell)?;
            }
        }
        Ok(())
    }

    /// One walk step.
    ///
    /// The coin flips between the y and x halves are part of the coin
    /// operation: they select which coin pattern drives each of the four
    /// shifts and are intentionally not restored at the end of the step.
    fn step(
        &self,
        circuit: &mut Circuit,
        x_reg: &[QubitId],
        y_reg: &[QubitId],
        coin: &[QubitId],
    ) -> WalkResult<()> {
        circuit.h(coin[0])?;
        circuit.h(coin[1])?;

        circuit.extend(shift::increment(y_reg, coin))?;
        circuit.x(coin[0])?;
        circuit.extend(shift::decrement(y_reg, coin))?;

        circuit.x(coin[0])?;
        circuit.x(coin[1])?;

        circuit.extend(shift::increment(x_reg, coin))?;
        circuit.x(coin[0])?;
        circuit.extend(shift::decrement(x_reg, coin))?;

        circuit.barrier_all()?;
        Ok(())
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

    /// Aggregate an execution outcome, labelling each state with its (x, y).
    pub fn distribution(&self, outcome: &RunOutcome) -> WalkResult<Distribution> {
        Ok(Distribution::from_counts(
            &outcome.counts,
            outcome.shots as u64,
            |state| Some(self.coordinate_of(state)),
        )?)
    }

    /// One distribution per intermediate step count 1..=`steps`.
    ///
    /// This is the ordered frame sequence handed to the external GIF
    /// compositor: frame k shows the walk after k steps, each executed
    /// independently with `shots` samples.
    pub fn frames<R: Rng>(
        &self,
        runner: &StatevectorRunner,
        shots: u32,
        rng: &mut R,
        cancel: &CancelToken,
    ) -> WalkResult<Vec<Distribution>> {
        let mut frames = Vec::with_capacity(self.steps as usize);
        for step_count in 1..=self.steps {
            let circuit = self.circuit_with_steps(step_count)?;
            let outcome = runner.run(&circuit, shots, rng, cancel)?;
            frames.push(self.distribution(&outcome)?);
        }
        Ok(frames)
    }
}
