//! Cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A clonable cancellation token.
///
/// Long-running drivers (repeated classical trials, shot sampling) check the
/// token between independent units of work and abort with a typed error once
/// it is tripped. A single circuit synthesis or statevector pass is an atomic
/// unit and is never interrupted mid-flight.
///
/// Cloning shares the underlying flag, so a caller can keep one handle and
/// hand the other to the running operation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, un-tripped token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the token. All clones observe the cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// True once [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
