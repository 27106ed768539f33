//! Error types for the execution crate.

use thiserror::Error;

/// Errors produced by statevector execution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit width exceeds the configured simulation bound.
    ///
    /// Raised before any amplitude-vector allocation is attempted.
    #[error("circuit has {qubits} qubits but the runner is limited to {max_qubits}")]
    CircuitTooLarge {
        /// Width of the offending circuit.
        qubits: usize,
        /// Configured limit.
        max_qubits: u32,
    },

    /// Shot count must be ≥ 1.
    #[error("shot count must be at least 1, got {0}")]
    InvalidShots(u32),

    /// The circuit measures nothing, so no histogram can be produced.
    #[error("circuit contains no measurement instructions")]
    NoMeasurements,

    /// Sampling was cancelled between shots.
    #[error("execution cancelled")]
    Cancelled,

    /// Circuit builder returned an error.
    #[error("circuit IR error: {0}")]
    Ir(#[from] vandra_ir::IrError),
}

/// Result type for execution operations.
pub type SimResult<T> = Result<T, SimError>;
