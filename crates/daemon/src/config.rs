// SPDX-License-Identifier: MIT

//! Command-line configuration (§6): CLI flags parsed with `clap`'s derive
//! API, resolved into one [`Config`] value threaded through the binary.

use clap::{Parser, ValueEnum};

/// A distributed health-probing and service-membership coordinator.
#[derive(Parser, Debug, Clone)]
#[command(name = "quorumd", version, about)]
pub struct Config {
    /// Identity used for this process's ephemeral nodes. Defaults to the
    /// system hostname.
    #[arg(long)]
    pub agent_name: Option<String>,

    /// Comma-separated coordination-store hosts.
    #[arg(long, default_value = "localhost:2181")]
    pub zk: String,

    /// Run the bootstrap loader (§4.B) and exit instead of starting the
    /// agent/master role selector.
    #[arg(long)]
    pub bootstrap: bool,

    /// Bootstrap topology file, also re-read by the role selector when
    /// this process becomes master (§9).
    #[arg(long, default_value = "./config.yml")]
    pub config: String,

    /// Root znode path prefix.
    #[arg(long, default_value = "/root")]
    pub root: String,

    /// Log rendering format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Raise the default tracing filter by one level per occurrence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    /// Resolve `--agent-name`, falling back to the system hostname.
    pub fn agent_name(&self) -> String {
        self.agent_name.clone().unwrap_or_else(hostname)
    }
}

fn hostname() -> String {
    gethostname::gethostname().into_string().unwrap_or_else(|_| "localhost".to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
