//! Error types for the SmartTV client
//!
//! Every failure except a malformed reply payload is fatal for a smoke run,
//! so messages carry enough context to be read straight off stderr.

use std::io;
use std::time::Duration;
use thiserror::Error;

use crate::protocol::CommandError;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SmartTV client
#[derive(Error, Debug)]
pub enum Error {
    // === Connection Errors ===
    #[error("Failed to connect to {addr}: {source}")]
    ConnectFailed {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Timed out connecting to {addr} after {timeout:?}")]
    ConnectTimeout { addr: String, timeout: Duration },

    #[error("Connection closed by server")]
    ConnectionClosed,

    // === Exchange Errors ===
    #[error("Timed out sending '{command}' after {timeout:?}")]
    WriteTimeout { command: String, timeout: Duration },

    #[error("Timed out waiting for reply to '{command}' after {timeout:?}")]
    ReadTimeout { command: String, timeout: Duration },

    #[error("Unexpected reply to '{command}': '{reply}' (expected {expected})")]
    UnexpectedReply {
        command: String,
        reply: String,
        expected: String,
    },

    #[error("Invalid command '{line}': {source}")]
    InvalidCommand {
        line: String,
        #[source]
        source: CommandError,
    },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an unexpected reply error
    pub fn unexpected_reply(command: &str, reply: &str, expected: impl Into<String>) -> Self {
        Self::UnexpectedReply {
            command: command.to_string(),
            reply: reply.to_string(),
            expected: expected.into(),
        }
    }

    /// Create an invalid command error
    pub fn invalid_command(line: &str, source: CommandError) -> Self {
        Self::InvalidCommand {
            line: line.to_string(),
            source,
        }
    }

    /// Whether this error ends the conversation because the peer went away
    pub fn is_disconnect(&self) -> bool {
        match self {
            Error::ConnectionClosed => true,
            Error::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
            ),
            _ => false,
        }
    }
}
