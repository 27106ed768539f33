//! Error types for the chain crate.

use thiserror::Error;

/// Errors produced by lattice construction and classical walk simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChainError {
    /// Grid dimensions must both be ≥ 1.
    #[error("grid dimensions must be positive, got {width}×{height}")]
    InvalidGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A state or coordinate lies outside the lattice.
    #[error("state {state} outside the {n_states}-state lattice")]
    StateOutOfRange {
        /// The offending state index.
        state: u64,
        /// Number of lattice states.
        n_states: u64,
    },

    /// Trial count must be ≥ 1.
    #[error("trial count must be at least 1, got {0}")]
    InvalidTrials(u32),

    /// Teleport probability must lie in [0, 1).
    #[error("teleport probability must lie in [0, 1), got {0}")]
    InvalidTeleportProbability(f64),

    /// A supplied matrix is not row-stochastic.
    #[error("matrix is not row-stochastic: {0}")]
    NotStochastic(String),

    /// Simulation was cancelled between trials.
    #[error("simulation cancelled")]
    Cancelled,

    /// Aggregation failed.
    #[error("aggregation error: {0}")]
    Distribution(#[from] vandra_types::DistributionError),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
