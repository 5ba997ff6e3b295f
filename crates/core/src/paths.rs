// SPDX-License-Identifier: MIT

//! Znode path construction for the tree described in §3.
//!
//! Centralized here so the agent, master, and bootstrap loader can never
//! disagree on how a path is assembled.

use crate::ident::{AgentName, EndpointId, ServiceName};

/// `/root/services`
pub fn services_root(root: &str) -> String {
    format!("{root}/services")
}

/// `/root/agents`
pub fn agents_root(root: &str) -> String {
    format!("{root}/agents")
}

/// `/root/state`
pub fn state(root: &str) -> String {
    format!("{root}/state")
}

/// `/root/services/<svc>`
pub fn service(root: &str, svc: &ServiceName) -> String {
    format!("{root}/services/{svc}")
}

/// `/root/services/<svc>/<ep>`
pub fn endpoint(root: &str, svc: &ServiceName, ep: &EndpointId) -> String {
    format!("{root}/services/{svc}/{ep}")
}

/// `/root/services/<svc>/<ep>/<agent>`
pub fn vote(root: &str, svc: &ServiceName, ep: &EndpointId, agent: &AgentName) -> String {
    format!("{root}/services/{svc}/{ep}/{agent}")
}

/// `/root/agents/<agent>`
pub fn agent(root: &str, agent: &AgentName) -> String {
    format!("{root}/agents/{agent}")
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
