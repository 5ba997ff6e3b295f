// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! quorum-daemon: configuration, bootstrap loading, logging, and the
//! role-selector wiring that ties the core, store, agent, and master
//! crates into a single runnable process.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;
pub mod role;

pub use config::{Config, LogFormat};
pub use error::DaemonError;
