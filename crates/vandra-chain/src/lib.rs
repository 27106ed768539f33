//! `vandra-chain` — toroidal lattices, Markov chains, classical walks.
//!
//! The classical half of the Vandra workspace:
//!
//! - [`TorusLattice`]: transition-matrix construction (wraparound walk and
//!   the teleportation-weighted surfer variant) plus the index ↔ coordinate
//!   mapping in its two historical branches
//! - [`MarkovChain`]: ergodicity queries, distribution evolution and the
//!   configurable mixing-time search
//! - [`walker`]: single- and multi-trial walk simulation with optional
//!   target search, plus aggregation into the shared [`Distribution`] table
//!
//! All randomness is injected: sampling operations take `&mut impl Rng`, so
//! a seeded `StdRng` reproduces a simulation exactly.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use vandra_chain::{MarkovChain, TorusLattice, TransitionModel, walker};
//! use vandra_types::CancelToken;
//!
//! let lattice = TorusLattice::new(3, 3).unwrap();
//! let chain = MarkovChain::from_lattice(&lattice, TransitionModel::Torus).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let walks = walker::multi_walk(&chain, 10, 100, None, &mut rng, &CancelToken::new()).unwrap();
//! let table = walker::walk_distribution(&walks, true, &lattice).unwrap();
//! assert!((table.probability_sum() - 1.0).abs() < 1e-9);
//! ```
//!
//! [`Distribution`]: vandra_types::Distribution

pub mod chain;
pub mod error;
pub mod lattice;
pub mod walker;

pub use chain::{MarkovChain, MixingConfig, MixingTime, TransitionModel, total_variation};
pub use error::{ChainError, ChainResult};
pub use lattice::TorusLattice;
pub use walker::{Walk, hitting_times, multi_walk, single_walk, walk_distribution};
