//! CLI argument definitions
//!
//! Defines the clap parsers for `tv-smoke` and `tv-remote`.

use clap::Parser;
use std::path::PathBuf;

use crate::common::config::{ClientConfig, DEFAULT_HOST, DEFAULT_PORT};

/// Smoke-test a SmartTV server: run a fixed command sequence and check STATUS replies
#[derive(Parser, Debug)]
#[command(name = "tv-smoke", version, long_about = None)]
pub struct SmokeArgs {
    /// Server host
    #[arg(default_value = DEFAULT_HOST)]
    pub host: String,

    /// Server port
    #[arg(default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Interactive remote control for a SmartTV server
#[derive(Parser, Debug)]
#[command(name = "tv-remote", version, long_about = None)]
pub struct RemoteArgs {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Run a YAML scenario instead of reading commands from stdin
    #[arg(long, short)]
    pub script: Option<PathBuf>,
}

impl SmokeArgs {
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.host, self.port)
    }
}

impl RemoteArgs {
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.host, self.port)
    }
}
