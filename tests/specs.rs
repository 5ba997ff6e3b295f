// SPDX-License-Identifier: MIT

//! End-to-end scenario specs (§8): master and agent(s) wired against a
//! shared [`quorum_store::InMemoryCluster`], no real ZooKeeper server or
//! TCP socket involved.


#[path = "specs/single_healthy_endpoint.rs"]
mod single_healthy_endpoint;
#[path = "specs/hysteresis_up.rs"]
mod hysteresis_up;
#[path = "specs/hysteresis_down.rs"]
mod hysteresis_down;
#[path = "specs/quorum_flip.rs"]
mod quorum_flip;
#[path = "specs/agent_join.rs"]
mod agent_join;
#[path = "specs/agent_crash.rs"]
mod agent_crash;
