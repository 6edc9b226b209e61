//! Cooperative cancellation for long guess searches
//!
//! A minimax search over a large candidate set can run for a long time. A
//! `CancellationToken` is shared between the caller and the search; the search
//! polls it between candidate evaluations and gives up once it is set.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared, clonable cancellation flag
///
/// All clones observe the same flag.
///
/// # Examples
/// ```
/// use mastermind_solver::solver::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
///
/// handle.cancel();
/// assert!(token.is_cancelled());
///
/// token.clear();
/// assert!(!handle.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that any search observing this token stops
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Re-arm the token so the next search can run
    pub fn clear(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }
}

/// Error returned by a search that observed a cancelled token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guess search was cancelled")
    }
}

impl std::error::Error for Cancelled {}
