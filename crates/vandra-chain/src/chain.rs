//! Markov chain analysis over lattice transition matrices.

use ndarray::{Array1, Array2};
use petgraph::algo::kosaraju_scc;
use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ChainError, ChainResult};
use crate::lattice::TorusLattice;

/// Strategy selecting which transition matrix a chain is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransitionModel {
    /// Simple wraparound walk (the default pipeline).
    Torus,
    /// Teleportation-weighted "random surfer" variant.
    Teleporting {
        /// Probability mass redistributed uniformly across all states.
        probability: f64,
    },
}

impl TransitionModel {
    /// Build the transition matrix for `lattice` under this strategy.
    pub fn build(&self, lattice: &TorusLattice) -> ChainResult<Array2<f64>> {
        match *self {
            TransitionModel::Torus => Ok(lattice.transition_matrix()),
            TransitionModel::Teleporting { probability } => lattice.surfer_matrix(probability),
        }
    }
}

/// Configuration for the mixing-time search.
///
/// The total-variation cutoff and the search horizon were implicit
/// conventions of the upstream analysis library; here they are explicit so
/// callers can tighten or extend the search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixingConfig {
    /// Total-variation distance below which the chain counts as mixed.
    pub tv_threshold: f64,
    /// Largest step count searched before giving up.
    pub horizon: u32,
}

impl Default for MixingConfig {
    fn default() -> Self {
        Self {
            tv_threshold: 0.25,
            horizon: 100,
        }
    }
}

/// Result of a mixing-time query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixingTime {
    /// Smallest step count within the threshold of stationarity.
    Steps(u32),
    /// Not within threshold anywhere inside the search horizon.
    NotReached,
    /// The chain is not ergodic; mixing time is undefined.
    NotErgodic,
}

impl fmt::Display for MixingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixingTime::Steps(n) => write!(f, "{n}"),
            // Legacy presentation labels kept for the reporting boundary.
            MixingTime::NotReached => write!(f, "100+"),
            MixingTime::NotErgodic => write!(f, "The Markov chain is not ergodic"),
        }
    }
}

/// An immutable Markov chain: a row-stochastic matrix plus state labels.
#[derive(Debug, Clone)]
pub struct MarkovChain {
    matrix: Array2<f64>,
    states: Vec<String>,
}

impl MarkovChain {
    /// Build a chain from a lattice under the chosen transition strategy.
    ///
    /// State labels are the stringified linear indices.
    pub fn from_lattice(lattice: &TorusLattice, model: TransitionModel) -> ChainResult<Self> {
        let matrix = model.build(lattice)?;
        let states = (0..lattice.n_states()).map(|i| i.to_string()).collect();
        Self::from_matrix(matrix, states)
    }

    /// Build a chain from an arbitrary row-stochastic matrix.
    pub fn from_matrix(matrix: Array2<f64>, states: Vec<String>) -> ChainResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(ChainError::NotStochastic(format!(
                "matrix is {rows}×{cols}, expected square"
            )));
        }
        if states.len() != rows {
            return Err(ChainError::NotStochastic(format!(
                "{} state labels for a {rows}-state matrix",
                states.len()
            )));
        }
        for (i, row) in matrix.rows().into_iter().enumerate() {
            if row.iter().any(|&p| p < 0.0) {
                return Err(ChainError::NotStochastic(format!(
                    "row {i} contains a negative entry"
                )));
            }
            let sum: f64 = row.sum();
            if (sum - 1.0).abs() > 1e-9 {
                return Err(ChainError::NotStochastic(format!(
                    "row {i} sums to {sum}"
                )));
            }
        }
        Ok(Self { matrix, states })
    }

    /// Number of states.
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// The ordered state labels.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// The transition matrix.
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// Transition probabilities out of `state`.
    pub fn row(&self, state: usize) -> ndarray::ArrayView1<'_, f64> {
        self.matrix.row(state)
    }

    // =========================================================================
    // Ergodicity
    // =========================================================================

    /// True if every state can reach every other state.
    pub fn is_irreducible(&self) -> bool {
        let mut graph = DiGraph::<(), ()>::new();
        let nodes: Vec<_> = (0..self.n_states()).map(|_| graph.add_node(())).collect();
        for i in 0..self.n_states() {
            for j in 0..self.n_states() {
                if self.matrix[[i, j]] > 0.0 {
                    graph.add_edge(nodes[i], nodes[j], ());
                }
            }
        }
        kosaraju_scc(&graph).len() == 1
    }

    /// The chain's period: gcd of all cycle lengths through state 0.
    ///
    /// Meaningful for irreducible chains, where every state shares the same
    /// period. Computed by a BFS layering of the transition digraph.
    pub fn period(&self) -> u64 {
        use std::collections::VecDeque;

        let n = self.n_states();
        let mut level: Vec<Option<u64>> = vec![None; n];
        level[0] = Some(0);
        let mut queue = VecDeque::from([0usize]);
        while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if self.matrix[[u, v]] > 0.0 && level[v].is_none() {
                    let lu = level[u].expect("dequeued nodes are levelled");
                    level[v] = Some(lu + 1);
                    queue.push_back(v);
                }
            }
        }

        let mut g: u64 = 0;
        for u in 0..n {
            for v in 0..n {
                if self.matrix[[u, v]] > 0.0 {
                    if let (Some(lu), Some(lv)) = (level[u], level[v]) {
                        g = gcd(g, (lu as i64 + 1 - lv as i64).unsigned_abs());
                    }
                }
            }
        }
        g
    }

    /// True if the period is 1.
    pub fn is_aperiodic(&self) -> bool {
        self.period() == 1
    }

    /// Irreducible and aperiodic — converges to a unique stationary
    /// distribution from any start.
    pub fn is_ergodic(&self) -> bool {
        self.is_irreducible() && self.is_aperiodic()
    }

    // =========================================================================
    // Distribution evolution
    // =========================================================================

    /// Uniform distribution over the state space.
    pub fn uniform_distribution(&self) -> Array1<f64> {
        Array1::from_elem(self.n_states(), 1.0 / self.n_states() as f64)
    }

    /// Point distribution concentrated on `state`.
    pub fn point_distribution(&self, state: usize) -> ChainResult<Array1<f64>> {
        if state >= self.n_states() {
            return Err(ChainError::StateOutOfRange {
                state: state as u64,
                n_states: self.n_states() as u64,
            });
        }
        let mut dist = Array1::zeros(self.n_states());
        dist[state] = 1.0;
        Ok(dist)
    }

    /// Evolve `initial` forward by `steps` transitions.
    pub fn distribution_after(&self, initial: &Array1<f64>, steps: u32) -> Array1<f64> {
        let mut dist = initial.clone();
        for _ in 0..steps {
            dist = dist.dot(&self.matrix);
        }
        dist
    }

    /// Stationary distribution by power iteration.
    ///
    /// Converges for ergodic chains; iteration is capped, with the last
    /// iterate returned, so non-convergent (periodic) inputs still terminate.
    pub fn stationary_distribution(&self) -> Array1<f64> {
        let mut dist = self.uniform_distribution();
        for _ in 0..10_000 {
            let next = dist.dot(&self.matrix);
            let delta: f64 = next
                .iter()
                .zip(dist.iter())
                .map(|(a, b)| (a - b).abs())
                .sum();
            dist = next;
            if delta < 1e-13 {
                break;
            }
        }
        dist
    }

    /// Smallest step count at which `initial`, evolved forward, is within
    /// the configured total-variation threshold of stationarity.
    pub fn mixing_time(&self, initial: &Array1<f64>, config: &MixingConfig) -> MixingTime {
        if !self.is_ergodic() {
            return MixingTime::NotErgodic;
        }
        let stationary = self.stationary_distribution();
        let mut dist = initial.clone();
        for step in 0..=config.horizon {
            if total_variation(&dist, &stationary) < config.tv_threshold {
                return MixingTime::Steps(step);
            }
            dist = dist.dot(&self.matrix);
        }
        MixingTime::NotReached
    }
}

/// Total-variation distance ½·Σ|aᵢ − bᵢ|.
pub fn total_variation(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    0.5 * a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .sum::<f64>()
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rejects_non_stochastic_rows() {
        let matrix = array![[0.5, 0.4], [0.5, 0.5]];
        assert!(matches!(
            MarkovChain::from_matrix(matrix, vec!["0".into(), "1".into()]),
            Err(ChainError::NotStochastic(_))
        ));
    }

    #[test]
    fn test_rejects_label_mismatch() {
        let matrix = array![[1.0]];
        assert!(matches!(
            MarkovChain::from_matrix(matrix, vec![]),
            Err(ChainError::NotStochastic(_))
        ));
    }

    #[test]
    fn test_two_cycle_is_periodic() {
        let matrix = array![[0.0, 1.0], [1.0, 0.0]];
        let chain = MarkovChain::from_matrix(matrix, vec!["0".into(), "1".into()]).unwrap();
        assert!(chain.is_irreducible());
        assert_eq!(chain.period(), 2);
        assert!(!chain.is_ergodic());
    }

    #[test]
    fn test_lazy_chain_is_ergodic() {
        let matrix = array![[0.5, 0.5], [0.5, 0.5]];
        let chain = MarkovChain::from_matrix(matrix, vec!["0".into(), "1".into()]).unwrap();
        assert!(chain.is_ergodic());
    }

    #[test]
    fn test_reducible_chain_detected() {
        let matrix = array![[1.0, 0.0], [0.0, 1.0]];
        let chain = MarkovChain::from_matrix(matrix, vec!["0".into(), "1".into()]).unwrap();
        assert!(!chain.is_irreducible());
        assert!(!chain.is_ergodic());
    }

    #[test]
    fn test_total_variation() {
        let a = array![0.5, 0.5];
        let b = array![1.0, 0.0];
        assert!((total_variation(&a, &b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mixing_time_display_labels() {
        assert_eq!(MixingTime::Steps(7).to_string(), "7");
        assert_eq!(MixingTime::NotReached.to_string(), "100+");
        assert_eq!(
            MixingTime::NotErgodic.to_string(),
            "The Markov chain is not ergodic"
        );
    }
}
