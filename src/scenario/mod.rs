//! Scripted request/reply sequences
//!
//! The smoke run is the built-in scenario; `tv-remote --script` runs one
//! loaded from YAML.

mod config;
mod runner;

pub use config::*;
pub use runner::{run_scenario, Exchange, ScenarioReport};
