use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation request, polled between heap extractions.
///
/// Cloning shares the flag, so a host can keep one handle and hand the other
/// to a running query.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clear a previous request so the flag can guard another query.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
