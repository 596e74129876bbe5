//! SmartTV line protocol
//!
//! CRLF-terminated plaintext commands over TCP, one reply per command.

pub mod codec;
pub mod command;
pub mod reply;

pub use command::{Command, CommandError};
pub use reply::{validate_status, Power, Reply};
