//! Error types for walk synthesis.

use thiserror::Error;
use vandra_types::Coordinate;

/// Errors produced by coined-walk circuit synthesis and execution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WalkError {
    /// Position registers need at least one cell.
    #[error("position register must have at least 1 bit, got {0}")]
    InvalidPositionBits(u32),

    /// The requested start coordinate does not fit the position register.
    #[error("start coordinate ({start}) outside the {side}×{side} position range")]
    StartOutOfRange {
        /// The offending coordinate.
        start: Coordinate,
        /// Lattice side length 2^bits.
        side: u64,
    },

    /// Circuit builder returned an error.
    #[error("circuit IR error: {0}")]
    Ir(#[from] vandra_ir::IrError),

    /// Execution backend returned an error.
    #[error("execution error: {0}")]
    Sim(#[from] vandra_sim::SimError),

    /// Histogram aggregation failed.
    #[error("aggregation error: {0}")]
    Distribution(#[from] vandra_types::DistributionError),
}

/// Result type for walk operations.
pub type WalkResult<T> = Result<T, WalkError>;
