//! Error types for result aggregation.

use thiserror::Error;

/// Errors produced while aggregating walk or measurement data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DistributionError {
    /// No states were observed — there is nothing to aggregate.
    #[error("cannot aggregate an empty observation set")]
    EmptyObservations,

    /// The stated sample count does not cover the recorded occurrences.
    #[error("sample count {sample_count} is smaller than the {recorded} recorded occurrences")]
    SampleCountTooSmall {
        /// Caller-stated number of samples.
        sample_count: u64,
        /// Occurrences actually present in the histogram.
        recorded: u64,
    },
}

/// Result type for aggregation operations.
pub type DistributionResult<T> = Result<T, DistributionError>;
