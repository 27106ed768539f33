//! Classical walk simulation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vandra_types::{CancelToken, Distribution};

use crate::chain::MarkovChain;
use crate::error::{ChainError, ChainResult};
use crate::lattice::TorusLattice;

/// One realized walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walk {
    /// Visited states in order, starting with the initial state.
    pub states: Vec<u64>,
    /// Step index at which the search target was first seen, if it was.
    ///
    /// `None` is a valid outcome: the target was never reached within the
    /// step budget (or search was disabled).
    pub hitting_time: Option<u64>,
}

impl Walk {
    /// The last visited state.
    pub fn final_state(&self) -> u64 {
        *self.states.last().expect("a walk visits at least its start")
    }
}

/// Simulate one walk of at most `step_budget` transitions.
///
/// The initial state is drawn uniformly over the state space from `rng`.
/// When `target` is `Some`, the CURRENT state is compared against it at each
/// iteration before stepping; on a match the step index is recorded as the
/// hitting time and the walk stops without taking a further step. With
/// `target == None` the walk always advances exactly `step_budget` times.
pub fn single_walk<R: Rng>(
    chain: &MarkovChain,
    step_budget: u32,
    target: Option<u64>,
    rng: &mut R,
) -> ChainResult<Walk> {
    let n_states = chain.n_states() as u64;
    if let Some(t) = target {
        if t >= n_states {
            return Err(ChainError::StateOutOfRange {
                state: t,
                n_states,
            });
        }
    }

    let start = rng.gen_range(0..n_states);
    let mut states = vec![start];
    let mut hitting_time = None;

    for step in 0..step_budget {
        let current = *states.last().expect("walk is non-empty");
        if target == Some(current) {
            hitting_time = Some(step as u64);
            break;
        }
        let next = sample_row(chain.row(current as usize), rng);
        states.push(next as u64);
    }

    Ok(Walk {
        states,
        hitting_time,
    })
}

/// Run `trials` independent walks.
///
/// Trials are statistically independent and order-insensitive; the token is
/// checked between trials so a long batch can be abandoned cleanly.
pub fn multi_walk<R: Rng>(
    chain: &MarkovChain,
    step_budget: u32,
    trials: u32,
    target: Option<u64>,
    rng: &mut R,
    cancel: &CancelToken,
) -> ChainResult<Vec<Walk>> {
    if trials == 0 {
        return Err(ChainError::InvalidTrials(0));
    }
    debug!(
        n_states = chain.n_states(),
        step_budget,
        trials,
        search = target.is_some(),
        "simulating classical walks"
    );

    let mut walks = Vec::with_capacity(trials as usize);
    for _ in 0..trials {
        if cancel.is_cancelled() {
            return Err(ChainError::Cancelled);
        }
        walks.push(single_walk(chain, step_budget, target, rng)?);
    }
    Ok(walks)
}

/// Hitting times of a walk batch, in trial order.
pub fn hitting_times(walks: &[Walk]) -> Vec<Option<u64>> {
    walks.iter().map(|w| w.hitting_time).collect()
}

/// Aggregate a walk batch into the shared occurrence table.
///
/// With `only_final` set, each walk contributes just its last state;
/// otherwise every visited state across every walk is counted. Rows are
/// labelled with lattice coordinates through the active mapping branch.
pub fn walk_distribution(
    walks: &[Walk],
    only_final: bool,
    lattice: &TorusLattice,
) -> ChainResult<Distribution> {
    let distribution = if only_final {
        Distribution::from_observations(walks.iter().map(Walk::final_state), |state| {
            Some(lattice.index_to_coordinate(state))
        })?
    } else {
        Distribution::from_observations(
            walks.iter().flat_map(|w| w.states.iter().copied()),
            |state| Some(lattice.index_to_coordinate(state)),
        )?
    };
    Ok(distribution)
}

/// Draw an index from a normalised probability row (CDF method).
fn sample_row<R: Rng>(weights: ndarray::ArrayView1<'_, f64>, rng: &mut R) -> usize {
    let u: f64 = rng.r#gen();
    let mut cumsum = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumsum += w;
        if u < cumsum {
            return i;
        }
    }
    // Floating-point rounding: return last index.
    weights.len() - 1
}
