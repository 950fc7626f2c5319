//! Trailing-edge debouncing for bursty callers such as autocomplete

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Lets only the last of a burst of calls through.
///
/// Every call to [`Debouncer::settle`] waits for the configured delay and
/// then reports whether it is still the most recent call.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    latest: AtomicU64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: AtomicU64::new(0),
        }
    }

    /// Returns `false` when a newer call arrived while this one waited
    pub async fn settle(&self) -> bool {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.latest.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_single_call_proceeds() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        assert!(debouncer.settle().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_call_supersedes_earlier() {
        let debouncer = Arc::new(Debouncer::new(Duration::from_millis(300)));

        let first = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.settle().await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.settle().await }
        });

        assert!(!first.await.unwrap());
        assert!(second.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_outside_window_both_proceed() {
        let debouncer = Debouncer::new(Duration::from_millis(300));

        assert!(debouncer.settle().await);
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(debouncer.settle().await);
    }

    #[tokio::test]
    async fn test_zero_delay_does_not_wait() {
        let debouncer = Debouncer::new(Duration::ZERO);
        assert!(debouncer.settle().await);
    }
}
