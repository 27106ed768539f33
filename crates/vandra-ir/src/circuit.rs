//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, Qubit, QubitId};

/// A quantum circuit as an ordered instruction sequence.
///
/// Provides a fluent builder for the walk gate set. Synthesized gate
/// sequences (see the shift combinators in `vandra-walk`) are spliced in with
/// [`extend`](Self::extend); every appended instruction is validated against
/// the circuit's declared qubits and classical bits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Number of classical readout bits.
    num_clbits: u32,
    /// The ordered instruction list.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            num_clbits: 0,
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of free qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    /// Add a single free qubit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.qubits.len() as u32);
        self.qubits.push(Qubit::new(id));
        id
    }

    /// Add a named quantum register of `size` qubits.
    ///
    /// Returns the member ids in register order.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        let mut ids = Vec::with_capacity(size as usize);
        for i in 0..size {
            let id = QubitId(self.qubits.len() as u32);
            self.qubits.push(Qubit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    /// Add a single classical readout bit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.num_clbits);
        self.num_clbits += 1;
        id
    }

    // =========================================================================
    // Gate builders
    // =========================================================================

    /// Apply Pauli-X.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single(Gate::X, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Y.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single(Gate::Y, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Z.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single(Gate::Z, qubit))?;
        Ok(self)
    }

    /// Apply Hadamard.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single(Gate::H, qubit))?;
        Ok(self)
    }

    /// Apply S.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single(Gate::S, qubit))?;
        Ok(self)
    }

    /// Apply S-dagger.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single(Gate::Sdg, qubit))?;
        Ok(self)
    }

    /// Apply a multi-controlled X (target flips iff every control is set).
    pub fn mcx(
        &mut self,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.append(Instruction::mcx(controls, target))?;
        Ok(self)
    }

    /// Measure `qubit` into `clbit`.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.append(Instruction::measure(qubit, clbit))?;
        Ok(self)
    }

    /// Measure a register, wiring qubit `i` of the slice to classical bit `i`.
    ///
    /// Classical bits are allocated as needed. Bit `c0` holds the FIRST
    /// qubit of the slice, which for the most-significant-first register
    /// layout used by the walk builders makes `c0` the most significant bit
    /// of the reported outcome.
    pub fn measure_register(&mut self, qubits: &[QubitId]) -> IrResult<&mut Self> {
        for &qubit in qubits {
            let clbit = self.add_clbit();
            self.append(Instruction::measure(qubit, clbit))?;
        }
        Ok(self)
    }

    /// Apply a barrier across all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<QubitId> = self.qubits.iter().map(|q| q.id).collect();
        self.append(Instruction::barrier(qubits))?;
        Ok(self)
    }

    /// Append one validated instruction.
    pub fn append(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.validate(&instruction)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    /// Append a synthesized instruction sequence in order.
    pub fn extend(
        &mut self,
        instructions: impl IntoIterator<Item = Instruction>,
    ) -> IrResult<&mut Self> {
        for instruction in instructions {
            self.append(instruction)?;
        }
        Ok(self)
    }

    fn validate(&self, instruction: &Instruction) -> IrResult<()> {
        for &qubit in &instruction.qubits {
            if qubit.0 as usize >= self.qubits.len() {
                return Err(IrError::QubitNotFound { qubit });
            }
        }
        for &clbit in &instruction.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound { clbit });
            }
        }
        // Barriers may list a qubit once only as well; duplicates are always a bug.
        for (i, &qubit) in instruction.qubits.iter().enumerate() {
            if instruction.qubits[i + 1..].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: instruction.name().to_string(),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// The ordered instruction list.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Measurement wiring in classical-bit order: element `c` is the qubit
    /// read out into classical bit `c`.
    pub fn measurement_map(&self) -> Vec<(QubitId, ClbitId)> {
        let mut map: Vec<(QubitId, ClbitId)> = self
            .instructions
            .iter()
            .filter(|inst| inst.is_measure())
            .flat_map(|inst| inst.qubits.iter().copied().zip(inst.clbits.iter().copied()))
            .collect();
        map.sort_by_key(|&(_, clbit)| clbit.0);
        map
    }

    /// Circuit depth under greedy qubit layering (barriers excluded).
    pub fn depth(&self) -> usize {
        let mut layer = vec![0usize; self.qubits.len()];
        let mut depth = 0;
        for inst in &self.instructions {
            if inst.is_barrier() {
                continue;
            }
            let next = 1 + inst
                .qubits
                .iter()
                .map(|q| layer[q.0 as usize])
                .max()
                .unwrap_or(0);
            for q in &inst.qubits {
                layer[q.0 as usize] = next;
            }
            depth = depth.max(next);
        }
        depth
    }
}
