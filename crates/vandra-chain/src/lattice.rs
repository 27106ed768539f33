//! Toroidal lattice geometry and transition-matrix construction.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use vandra_types::Coordinate;

use crate::error::{ChainError, ChainResult};

/// An m×n grid with wraparound edges.
///
/// Linear state indices in [0, m·n) are mapped to (x, y) coordinates through
/// one of two historical conventions selected by `width == height`:
///
/// - **square**: a genuine 2-D view (`x = i % m`, `y = i / m`) with
///   independent row/column wraparound;
/// - **non-square**: neighbor and coordinate arithmetic applied directly to
///   the linear index modulo m·n.
///
/// The two branches are NOT algebraically equivalent — the non-square branch
/// does not embed a true 2-D torus, and its index/coordinate mapping only
/// round-trips when gcd(m, n) = 1. Both are preserved as-is because existing
/// consumers depend on the exact connectivity each one produces; see
/// DESIGN.md for the open question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorusLattice {
    width: u32,
    height: u32,
}

impl TorusLattice {
    /// Create a lattice, rejecting degenerate dimensions.
    pub fn new(width: u32, height: u32) -> ChainResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChainError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }

    /// Grid width (m).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (n).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of lattice states m·n.
    pub fn n_states(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// True when the square-branch formulas apply.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// True if `coordinate` lies within the grid.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }

    // =========================================================================
    // Transition matrices
    // =========================================================================

    /// Row-stochastic transition matrix of the simple walk with wraparound.
    ///
    /// Every state has degree 4 (wraparound removes boundary effects), each
    /// neighbor receiving probability 1/4. Coinciding neighbors accumulate,
    /// so rows always sum to 1 even on 1- and 2-wide grids. The result is
    /// doubly stochastic and symmetric.
    pub fn transition_matrix(&self) -> Array2<f64> {
        let n_states = self.n_states() as usize;
        let mut matrix = Array2::<f64>::zeros((n_states, n_states));
        for i in 0..n_states {
            for neighbor in self.neighbors(i as u64) {
                matrix[[i, neighbor as usize]] += 0.25;
            }
        }
        matrix
    }

    fn neighbors(&self, i: u64) -> [u64; 4] {
        if self.is_square() {
            self.square_neighbors(i)
        } else {
            self.linear_neighbors(i)
        }
    }

    /// Square branch: 2-D view with independent row/column wraparound.
    fn square_neighbors(&self, i: u64) -> [u64; 4] {
        let m = self.width as u64;
        let n_states = self.n_states();
        let x = i % m;
        let y = i / m;
        [
            (i + m) % n_states,
            (i + n_states - m) % n_states,
            y * m + (x + m - 1) % m,
            y * m + (x + 1) % m,
        ]
    }

    /// Non-square branch: offsets applied to the linear index modulo m·n.
    fn linear_neighbors(&self, i: u64) -> [u64; 4] {
        let m = self.width as u64;
        let n = self.height as u64;
        let n_states = self.n_states();
        [
            (i + n_states - m) % n_states,
            (i + m) % n_states,
            (i + n_states - n) % n_states,
            (i + n) % n_states,
        ]
    }

    /// Teleportation-weighted "random surfer" matrix.
    ///
    /// Each cell spreads (1 − p) uniformly over its boundary-checked (non
    /// wrapping) grid neighbors, then every entry gains the uniform teleport
    /// term p/N. Selectable through [`TransitionModel::Teleporting`]; not
    /// part of the default walk pipeline.
    ///
    /// [`TransitionModel::Teleporting`]: crate::chain::TransitionModel::Teleporting
    pub fn surfer_matrix(&self, teleport_prob: f64) -> ChainResult<Array2<f64>> {
        if !(0.0..1.0).contains(&teleport_prob) {
            return Err(ChainError::InvalidTeleportProbability(teleport_prob));
        }
        let m = self.width as i64;
        let n = self.height as i64;
        let n_states = self.n_states() as usize;
        let offsets = [(0i64, 1i64), (0, -1), (1, 0), (-1, 0)];

        let mut matrix = Array2::<f64>::zeros((n_states, n_states));
        for i in 0..m {
            for j in 0..n {
                let possible = offsets
                    .iter()
                    .filter(|(di, dj)| {
                        (0..m).contains(&(i + di)) && (0..n).contains(&(j + dj))
                    })
                    .count();
                for (di, dj) in offsets {
                    if (0..m).contains(&(i + di)) && (0..n).contains(&(j + dj)) {
                        let from = (i * n + j) as usize;
                        let to = ((i + di) * n + (j + dj)) as usize;
                        matrix[[from, to]] = (1.0 - teleport_prob) / possible as f64;
                    }
                }
            }
        }
        matrix += teleport_prob / n_states as f64;
        Ok(matrix)
    }

    // =========================================================================
    // Index ↔ coordinate mapping
    // =========================================================================

    /// Coordinate of linear state `i`.
    ///
    /// Square branch divides and reduces by the side length; the non-square
    /// branch reduces `i` by each dimension independently (its historical
    /// convention — consistent with [`coordinate_to_index`] only when
    /// gcd(m, n) = 1).
    ///
    /// [`coordinate_to_index`]: Self::coordinate_to_index
    pub fn index_to_coordinate(&self, i: u64) -> Coordinate {
        let m = self.width as u64;
        let n = self.height as u64;
        if self.is_square() {
            Coordinate::new((i % m) as u32, (i / n) as u32)
        } else {
            Coordinate::new((i % m) as u32, (i % n) as u32)
        }
    }

    /// Linear state of `coordinate` — inverse of [`index_to_coordinate`]
    /// within the same branch.
    ///
    /// [`index_to_coordinate`]: Self::index_to_coordinate
    pub fn coordinate_to_index(&self, coordinate: Coordinate) -> ChainResult<u64> {
        if !self.contains(coordinate) {
            return Err(ChainError::StateOutOfRange {
                state: coordinate.y as u64 * self.width as u64 + coordinate.x as u64,
                n_states: self.n_states(),
            });
        }
        let m = self.width as i64;
        let n = self.height as i64;
        let n_states = self.n_states() as i64;
        let x = coordinate.x as i64;
        let y = coordinate.y as i64;

        let index = if self.is_square() {
            y * n + x
        } else if m < n {
            (x * n - y * m).rem_euclid(n_states)
        } else {
            (y * m - x * n).rem_euclid(n_states)
        };
        Ok(index as u64)
    }
}
