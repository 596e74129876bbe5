//! SmartTV smoke client
//!
//! Client side of the SmartTV line protocol: a strict smoke test, an
//! interactive remote and a scenario runner, all over one TCP connection.

pub mod client;
pub mod commands;
pub mod common;
pub mod protocol;
pub mod remote;
pub mod scenario;

// Re-export commonly used types for tests
pub use client::TvClient;
pub use common::{ClientConfig, Error, Result};
pub use protocol::Command;
