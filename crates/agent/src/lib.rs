// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! quorum-agent: the probe-hysteresis state machine driver (§4.C) that
//! runs on every process selected to act as an agent.

mod dialer;
mod error;
mod probe;
mod startup;

pub use dialer::{Dialer, TcpDialer};
pub use error::AgentError;
pub use probe::{run_probe_loop, ProbeDeps};
pub use startup::start_agent;

#[cfg(any(test, feature = "test-support"))]
pub use dialer::FakeDialer;
