//! Lattice coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An (x, y) position on a 2-D lattice.
///
/// The `Display` form is `"x, y"` — the label attached to distribution rows
/// and consumed verbatim by the plotting collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}
