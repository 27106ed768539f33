//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur while building a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("qubit {qubit} not found in circuit")]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
    },

    /// Classical bit not found in circuit.
    #[error("classical bit {clbit} not found in circuit")]
    ClbitNotFound {
        /// The classical bit that was not found.
        clbit: ClbitId,
    },

    /// The same qubit appears twice in one instruction's operands.
    #[error("duplicate qubit {qubit} in '{gate_name}' operands")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the offending instruction.
        gate_name: String,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
