//! Timer-reset-on-new-input debounce primitive.
//!
//! Coalesces rapid successive triggers into one action: each trigger starts
//! a quiet-interval timer and invalidates every earlier pending trigger, so
//! only the last trigger in a burst fires.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default quiet interval between the last input and the coalesced action.
pub const DEFAULT_QUIET: Duration = Duration::from_millis(300);

/// Generation-counter debouncer.
///
/// Cloning shares the generation counter, so clones debounce against each
/// other, which is the intended usage when triggers come from spawned tasks.
#[derive(Clone)]
pub struct Debouncer {
    quiet: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Registers a new input, waits out the quiet interval, and reports
    /// whether this input is still the latest one.
    ///
    /// Returns `true` exactly when no newer input arrived during the wait;
    /// the caller performs the debounced action only then.
    pub async fn acquire(&self) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.quiet).await;
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Immediately invalidates any pending trigger without starting a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, sleep};

    #[tokio::test(start_paused = true)]
    async fn test_single_trigger_fires() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        assert!(debouncer.acquire().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_triggers_coalesce_to_last() {
        let debouncer = Debouncer::new(Duration::from_millis(300));

        let first = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.acquire().await }
        });

        // A second input 100ms later supersedes the first.
        sleep(Duration::from_millis(100)).await;
        let second = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.acquire().await }
        });

        advance(Duration::from_millis(400)).await;

        assert!(!first.await.unwrap());
        assert!(second.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_triggers_both_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(300));

        assert!(debouncer.acquire().await);
        sleep(Duration::from_millis(500)).await;
        assert!(debouncer.acquire().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_invalidates_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(300));

        let pending = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.acquire().await }
        });

        sleep(Duration::from_millis(50)).await;
        debouncer.cancel();
        advance(Duration::from_millis(400)).await;

        assert!(!pending.await.unwrap());
    }
}
