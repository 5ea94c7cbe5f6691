//! Fixed-delay request pacing for the portal
//!
//! The portal publishes no rate limit and fails noisily when pushed, so the
//! crawler waits a fixed interval after every fetch, successful or not.
//! There is exactly one caller at a time (the traversal is sequential), so
//! a plain sleep after each request is enough to bound the request rate.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Waits a fixed interval after every request
#[derive(Debug, Default)]
pub struct RequestPacer {
    delay: Duration,
    /// Number of pauses taken so far
    pauses: AtomicUsize,
}

impl RequestPacer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pauses: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep for the configured delay. Call once after every fetch.
    pub async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::Relaxed);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// How many times `pause` has been called
    #[must_use]
    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::Relaxed)
    }
}
