//! Cooperative cancellation of table generation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag checked by the generator between rows
///
/// Clones share the same flag, so a clone handed to another thread (a UI
/// "stop" button, a watchdog) can stop a running generation. Cancellation is
/// sticky.
///
/// ```
/// use latex_truth_table::{CancelToken, TruthTableError, TruthTableGenerator};
///
/// let generator = TruthTableGenerator::default();
/// let token = generator.cancel_token();
/// token.cancel();
///
/// assert!(matches!(
///     generator.generate(r"p \to q"),
///     Err(TruthTableError::Cancelled)
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
