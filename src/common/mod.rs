//! Common utilities shared by both binaries

pub mod config;
pub mod error;
pub mod logging;

pub use config::ClientConfig;
pub use error::{Error, Result};
