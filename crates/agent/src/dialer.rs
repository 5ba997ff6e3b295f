// SPDX-License-Identifier: MIT

//! TCP dial abstraction so the probe loop's hysteresis behavior (P4) can
//! be exercised without opening real sockets.

use std::time::Duration;
use tokio::net::TcpStream;

const DIAL_TIMEOUT: Duration = Duration::from_secs(1);

/// Attempts a single TCP connect-and-close against `(host, port)`.
#[async_trait::async_trait]
pub trait Dialer: Send + Sync + 'static {
    async fn probe(&self, host: &str, port: &str) -> bool;
}

/// Real dialer: `TcpStream::connect` bounded by a 1-second timeout (§4.C).
#[derive(Clone, Copy, Default)]
pub struct TcpDialer;

#[async_trait::async_trait]
impl Dialer for TcpDialer {
    async fn probe(&self, host: &str, port: &str) -> bool {
        let addr = format!("{host}:{port}");
        match tokio::time::timeout(DIAL_TIMEOUT, TcpStream::connect(&addr)).await {
            Ok(Ok(stream)) => {
                tracing::debug!(%addr, "probe succeeded");
                drop(stream);
                true
            }
            Ok(Err(e)) => {
                tracing::debug!(%addr, error = %e, "probe failed");
                false
            }
            Err(_) => {
                tracing::debug!(%addr, "probe timed out");
                false
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDialer;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::Dialer;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Scripted dialer: pops the next outcome from a queue, repeating the
    /// last outcome once the queue is exhausted.
    #[derive(Clone)]
    pub struct FakeDialer {
        outcomes: Arc<Mutex<VecDeque<bool>>>,
        default_outcome: bool,
    }

    impl FakeDialer {
        pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
            let outcomes: VecDeque<bool> = outcomes.into_iter().collect();
            let default_outcome = outcomes.back().copied().unwrap_or(false);
            Self { outcomes: Arc::new(Mutex::new(outcomes)), default_outcome }
        }
    }

    #[async_trait::async_trait]
    impl Dialer for FakeDialer {
        async fn probe(&self, _host: &str, _port: &str) -> bool {
            let mut outcomes = self.outcomes.lock().await;
            outcomes.pop_front().unwrap_or(self.default_outcome)
        }
    }
}

#[cfg(test)]
#[path = "dialer_tests.rs"]
mod tests;
