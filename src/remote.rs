//! Interactive remote control
//!
//! Reads protocol commands from a line source, forwards them verbatim and
//! prints each reply. `help` and `exit` are handled locally.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::client::TvClient;
use crate::common::Result;

/// Prompt shown before each input line
pub const PROMPT: &str = "smarttv> ";

const WELCOME: &str = "\
Type protocol commands (e.g., ON, OFF, STATUS, CHANNELS, GET, SET 5)
Local commands: help, exit";

const HELP: &str = "\
Commands (sent to server):
  STATUS                 -> OK ON|OFF
  ON / OFF               -> OK
  CHANNELS               -> OK C=<int>
  GET                    -> OK CH=<int>
  SET <n>                -> OK CH=<n>
  UP / DOWN              -> OK CH=<n> (ERR 409 at edges)
  PING                   -> OK PONG
Local commands:
  help, exit";

/// Run the prompt loop until end of input, `exit`, or a connection failure
///
/// Connection failures end the loop but are reported on `out`, not returned;
/// only failures writing to `out` or reading `input` are errors.
pub async fn run_remote<R, W>(client: &mut TvClient, mut input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", WELCOME)?;

    let mut raw = Vec::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        raw.clear();
        if input.read_until(b'\n', &mut raw).await? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD, as for replies
        let line = String::from_utf8_lossy(&raw);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.to_ascii_lowercase().as_str() {
            "exit" | "quit" => break,
            "help" | "?" => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        match client.send(line).await {
            Ok(reply) => writeln!(out, "{}", reply)?,
            Err(e) if e.is_disconnect() => {
                writeln!(out, "(connection closed by server)")?;
                break;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Exchange failed");
                writeln!(out, "[Client] I/O error: {}", e)?;
                break;
            }
        }
    }

    Ok(())
}
