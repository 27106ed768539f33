//! Shared domain types for the Vandra walk-simulation workspace.
//!
//! Both the classical engine (`vandra-chain`) and the quantum engine
//! (`vandra-walk` / `vandra-sim`) produce their results in the types defined
//! here, so downstream consumers (tabular rendering, bar charts, heatmap and
//! GIF compositors) only ever see one result shape.
//!
//! # Core Components
//!
//! - [`Coordinate`]: an (x, y) lattice position with the `"x, y"` label format
//! - [`Counts`]: an ordered measurement histogram (outcome → occurrences)
//! - [`Distribution`]: the sparse state/occurrence/probability table shared by
//!   the classical and quantum aggregation paths
//! - [`CancelToken`]: cooperative cancellation between independent trials/shots
//!
//! # Example
//!
//! ```rust
//! use vandra_types::{Counts, Distribution};
//!
//! let mut counts = Counts::new();
//! counts.record(3);
//! counts.record(3);
//! counts.record(1);
//!
//! let dist = Distribution::from_counts(&counts, 3, |_| None).unwrap();
//! assert_eq!(dist.rows()[0].state, 1);   // ascending state order
//! assert!((dist.probability_sum() - 1.0).abs() < 1e-9);
//! ```

pub mod cancel;
pub mod coord;
pub mod counts;
pub mod distribution;
pub mod error;

pub use cancel::CancelToken;
pub use coord::Coordinate;
pub use counts::Counts;
pub use distribution::{Distribution, DistributionRow};
pub use error::{DistributionError, DistributionResult};
