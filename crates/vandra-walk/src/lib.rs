//! `vandra-walk` — coined quantum walk circuit synthesis.
//!
//! Builds the two walk topologies as `vandra_ir::Circuit` values:
//!
//! - [`Walk1D`]: single position register + 1-qubit coin on a line of 2ⁿ
//!   positions
//! - [`Walk2D`]: x/y position registers + 2-qubit coin on a 2ⁿ×2ⁿ torus
//!
//! Both are assembled from one reusable primitive — the ripple-carry
//! [`shift::increment`] / [`shift::decrement`] pair, a modular ±1 over a
//! binary register expressed purely as multi-controlled bit-flips. The
//! combinators return gate sequences as values, so the synthesizer is
//! unit-testable without any execution backend; execution goes through
//! `vandra_sim::StatevectorRunner`.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use vandra_sim::StatevectorRunner;
//! use vandra_types::CancelToken;
//! use vandra_walk::Walk1D;
//!
//! let walk = Walk1D::new(4 /* position bits */, 6 /* steps */);
//! let runner = StatevectorRunner::new();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let outcome = walk.run(&runner, 500, &mut rng, &CancelToken::new()).unwrap();
//! let table = walk.distribution(&outcome).unwrap();
//! assert!((table.probability_sum() - 1.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod shift;
pub mod walk1d;
pub mod walk2d;

pub use error::{WalkError, WalkResult};
pub use walk1d::{Chirality, Walk1D};
pub use walk2d::Walk2D;
