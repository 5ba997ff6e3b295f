// SPDX-License-Identifier: MIT

//! `tracing-subscriber` initialization (§10): `RUST_LOG` (default `info`)
//! plus `-v`/`--verbose` raising the filter by one level per occurrence.

use crate::config::LogFormat;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the `EnvFilter`, honored `RUST_LOG` first and `-v` as a floor.
fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity).to_string()))
}

/// Install the global tracing subscriber. Call once, at process start.
pub fn init(format: LogFormat, verbosity: u8) {
    let filter = build_filter(verbosity);
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }
}
