//! The walk gate set.

use serde::{Deserialize, Serialize};

/// Gates needed by coined-walk circuits.
///
/// The set is deliberately small: single-qubit preparation gates plus one
/// entangling primitive, [`Gate::Mcx`] — a bit-flip on the target controlled
/// on an arbitrary number of qubits all being |1⟩. The ripple-carry shift
/// operators are built from `Mcx` alone, so any backend that can apply a
/// multi-controlled flip can execute every circuit this workspace produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gate {
    /// Identity gate.
    I,
    /// Pauli-X (bit flip).
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Hadamard — the balanced-superposition coin flip.
    H,
    /// S gate (sqrt(Z)) — coin chirality phase.
    S,
    /// S-dagger gate.
    Sdg,
    /// Multi-controlled X: the target (last operand) flips iff all
    /// `controls` operands are set. `controls == 0` degenerates to `X`.
    Mcx {
        /// Number of control qubits preceding the target operand.
        controls: u32,
    },
}

impl Gate {
    /// Lower-case gate mnemonic.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::I => "id",
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::S => "s",
            Gate::Sdg => "sdg",
            Gate::Mcx { .. } => "mcx",
        }
    }

    /// Number of operand qubits (controls + target for `Mcx`).
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::I | Gate::X | Gate::Y | Gate::Z | Gate::H | Gate::S | Gate::Sdg => 1,
            Gate::Mcx { controls } => controls + 1,
        }
    }

    /// True for gates that couple more than one qubit.
    pub fn is_entangling(&self) -> bool {
        matches!(self, Gate::Mcx { controls } if *controls > 0)
    }
}
