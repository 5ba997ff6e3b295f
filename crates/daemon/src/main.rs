// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::Parser;
use quorum_core::{AgentName, SystemClock};
use quorum_daemon::{bootstrap, config::Config, logging, role};
use quorum_store::{StoreAdapter, ZkStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::parse();
    logging::init(cfg.log_format, cfg.verbose);

    let self_name =
        AgentName::new(cfg.agent_name()).context("--agent-name resolved to an invalid identifier")?;

    let store = ZkStore::connect(&cfg.zk).await.context("failed to connect to the coordination store")?;
    let store: Arc<dyn StoreAdapter> = Arc::new(store);

    if cfg.bootstrap {
        let raw = std::fs::read_to_string(&cfg.config)
            .with_context(|| format!("could not read bootstrap config at {}", cfg.config))?;
        let topology = bootstrap::parse_topology(&raw).context("bootstrap config failed to parse")?;
        bootstrap::run_bootstrap(store, &cfg.root, &topology).await.context("bootstrap loader failed")?;
        tracing::info!("bootstrap complete");
        return Ok(());
    }

    let clock = Arc::new(SystemClock);
    role::run(store, clock, &cfg.root, self_name, &cfg.config).await.context("role selector exited")?;

    Ok(())
}
