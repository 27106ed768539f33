//! The state/occurrence/probability table shared by all walk engines.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;
use crate::counts::Counts;
use crate::error::{DistributionError, DistributionResult};

/// One row of a [`Distribution`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    /// The state index (lattice node or measured bitstring as an integer).
    pub state: u64,
    /// How often the state was observed.
    pub occurrences: u64,
    /// `occurrences / total`.
    pub probability: f64,
    /// Lattice coordinate label, when the caller supplies a mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

/// A sparse occurrence table over observed states.
///
/// Rows are ordered by ascending state index, and only states that were
/// actually observed appear — absent states are *not* zero-filled. Consumers
/// that need a dense grid (heatmap rendering) decide themselves how to fill
/// the gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    rows: Vec<DistributionRow>,
}

impl Distribution {
    /// Aggregate a stream of visited states into an occurrence table.
    ///
    /// `label` maps a state index to its coordinate; classical callers pass
    /// the lattice mapping, quantum 2-D callers split the measured bitstring,
    /// and 1-D callers pass `|_| None`.
    ///
    /// Probabilities are occurrence counts divided by the total number of
    /// observations, so they sum to 1 over the returned rows.
    pub fn from_observations<I, F>(states: I, label: F) -> DistributionResult<Self>
    where
        I: IntoIterator<Item = u64>,
        F: Fn(u64) -> Option<Coordinate>,
    {
        let mut occurrences: FxHashMap<u64, u64> = FxHashMap::default();
        let mut total: u64 = 0;
        for state in states {
            *occurrences.entry(state).or_insert(0) += 1;
            total += 1;
        }
        if total == 0 {
            return Err(DistributionError::EmptyObservations);
        }

        let mut states: Vec<u64> = occurrences.keys().copied().collect();
        states.sort_unstable();

        let rows = states
            .into_iter()
            .map(|state| {
                let count = occurrences[&state];
                DistributionRow {
                    state,
                    occurrences: count,
                    probability: count as f64 / total as f64,
                    coordinate: label(state),
                }
            })
            .collect();
        Ok(Self { rows })
    }

    /// Aggregate a measurement histogram.
    ///
    /// Outcomes are tabulated in ascending numeric order and probabilities are
    /// computed against `sample_count` (the requested shot count), not the
    /// histogram total, matching the execution contract where every shot
    /// produced exactly one outcome.
    pub fn from_counts<F>(counts: &Counts, sample_count: u64, label: F) -> DistributionResult<Self>
    where
        F: Fn(u64) -> Option<Coordinate>,
    {
        if counts.is_empty() {
            return Err(DistributionError::EmptyObservations);
        }
        let recorded = counts.total();
        if sample_count < recorded {
            return Err(DistributionError::SampleCountTooSmall {
                sample_count,
                recorded,
            });
        }

        let rows = counts
            .iter()
            .map(|(state, occurrences)| DistributionRow {
                state,
                occurrences,
                probability: occurrences as f64 / sample_count as f64,
                coordinate: label(state),
            })
            .collect();
        Ok(Self { rows })
    }

    /// The rows, ordered by ascending state index.
    pub fn rows(&self) -> &[DistributionRow] {
        &self.rows
    }

    /// Number of distinct states in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of row probabilities.
    pub fn probability_sum(&self) -> f64 {
        self.rows.iter().map(|r| r.probability).sum()
    }

    /// Probability of `state`, or 0 if it was never observed.
    pub fn probability_of(&self, state: u64) -> f64 {
        self.rows
            .binary_search_by_key(&state, |r| r.state)
            .map(|i| self.rows[i].probability)
            .unwrap_or(0.0)
    }
}
