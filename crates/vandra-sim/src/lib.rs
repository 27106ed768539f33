//! `vandra-sim` — exact statevector execution for walk circuits.
//!
//! Executes a `vandra_ir::Circuit` by computing its final amplitude vector
//! exactly, then sampling measurement outcomes from the |amplitude|²
//! distribution with a caller-supplied random source.
//!
//! The executor is deliberately split from circuit synthesis: the walk
//! builders in `vandra-walk` are pure gate-sequence combinators that can be
//! unit-tested without any backend, while this crate provides the one
//! capability they rely on — applying an arbitrary-arity controlled bit-flip
//! (plus the single-qubit preparation gates) to a statevector.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use vandra_ir::Circuit;
//! use vandra_sim::StatevectorRunner;
//! use vandra_types::CancelToken;
//!
//! let mut circuit = Circuit::new("fair-coin");
//! let q = circuit.add_qreg("q", 1);
//! circuit.h(q[0]).unwrap();
//! circuit.measure_register(&q).unwrap();
//!
//! let runner = StatevectorRunner::new();
//! let mut rng = StdRng::seed_from_u64(42);
//! let outcome = runner
//!     .run(&circuit, 100, &mut rng, &CancelToken::new())
//!     .unwrap();
//! assert_eq!(outcome.counts.total(), 100);
//! ```

pub mod error;
pub mod runner;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use runner::{RunOutcome, RunnerConfig, StatevectorRunner};
pub use statevector::Statevector;
