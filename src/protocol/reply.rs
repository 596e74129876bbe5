//! Reply grammar of the TV server
//!
//! The client mostly treats replies as opaque text. Classification exists for
//! scenario expectations and for the strict STATUS check, and it never fails:
//! anything unrecognised becomes [`Reply::Other`].

use std::fmt;

use crate::common::{Error, Result};

/// Replies accepted by the strict STATUS check
pub const STATUS_REPLIES: [&str; 2] = ["OK OFF", "OK ON"];

/// Power state reported by `STATUS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    On,
    Off,
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Power::On => f.write_str("ON"),
            Power::Off => f.write_str("OFF"),
        }
    }
}

/// A classified server reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `OK`
    Ok,
    /// `OK ON` / `OK OFF`
    Status(Power),
    /// `OK C=<n>`
    Channels(i64),
    /// `OK CH=<n>`
    Channel(i64),
    /// `OK PONG`
    Pong,
    /// `ERR <code> <reason>`
    Error { code: u16, reason: String },
    /// `EVT ...`, pushed to subscribers
    Event(String),
    /// Anything else, kept verbatim
    Other(String),
}

impl Reply {
    /// Classify a stripped reply line
    pub fn parse(text: &str) -> Self {
        let other = || Reply::Other(text.to_string());

        if text == "OK" {
            return Reply::Ok;
        }

        if let Some(rest) = text.strip_prefix("OK ") {
            return match rest {
                "ON" => Reply::Status(Power::On),
                "OFF" => Reply::Status(Power::Off),
                "PONG" => Reply::Pong,
                _ => {
                    if let Some(n) = rest.strip_prefix("CH=").and_then(|n| n.parse().ok()) {
                        Reply::Channel(n)
                    } else if let Some(n) = rest.strip_prefix("C=").and_then(|n| n.parse().ok()) {
                        Reply::Channels(n)
                    } else {
                        other()
                    }
                }
            };
        }

        if let Some(rest) = text.strip_prefix("ERR ") {
            let (code, reason) = rest.split_once(' ').unwrap_or((rest, ""));
            return match code.parse() {
                Ok(code) => Reply::Error {
                    code,
                    reason: reason.to_string(),
                },
                Err(_) => other(),
            };
        }

        if let Some(rest) = text.strip_prefix("EVT ") {
            return Reply::Event(rest.to_string());
        }

        other()
    }

    /// Whether the server accepted the request
    pub fn is_ok(&self) -> bool {
        matches!(
            self,
            Reply::Ok | Reply::Status(_) | Reply::Channels(_) | Reply::Channel(_) | Reply::Pong
        )
    }
}

/// Strict check for a `STATUS` reply
///
/// Only the exact literals in [`STATUS_REPLIES`] pass.
pub fn validate_status(reply: &str) -> Result<Power> {
    match reply {
        "OK OFF" => Ok(Power::Off),
        "OK ON" => Ok(Power::On),
        _ => Err(Error::unexpected_reply(
            "STATUS",
            reply,
            format!("one of: {}", STATUS_REPLIES.join(", ")),
        )),
    }
}
