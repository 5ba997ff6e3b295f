// SPDX-License-Identifier: MIT

//! Clock abstraction for testable time handling.
//!
//! The probe loop (§4.C) and the watcher's cooperative delay (§4.D) both
//! sleep on wall-clock intervals. Routing those sleeps through a `Clock`
//! lets tests drive hysteresis transitions without waiting on a real timer.

use std::time::{Duration, Instant};

/// A clock that can sleep and report elapsed time.
#[async_trait::async_trait]
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Instant;
    async fn sleep(&self, duration: Duration);
}

/// Real clock backed by `tokio::time`.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait::async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Fake clock for tests: `sleep` resolves immediately but still advances
/// the reported `now()`, so elapsed-time assertions still make sense.
#[derive(Clone)]
pub struct FakeClock {
    start: Instant,
    elapsed: std::sync::Arc<parking_lot::Mutex<Duration>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self { start: Instant::now(), elapsed: std::sync::Arc::new(parking_lot::Mutex::new(Duration::ZERO)) }
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.start + *self.elapsed.lock()
    }

    async fn sleep(&self, duration: Duration) {
        *self.elapsed.lock() += duration;
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
