//! SmartTV wire codec
//!
//! Requests are single text lines terminated by CRLF:
//! ```text
//! SET 5\r\n
//! ```
//! A reply is whatever one read returns, decoded leniently with the
//! trailing line terminator removed. There is no further framing.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::common::{Error, Result};

/// Line terminator used in both directions
pub const CRLF: &str = "\r\n";

/// Frame a command line for the wire
pub fn encode_line(line: &str) -> Vec<u8> {
    let mut frame = Vec::with_capacity(line.len() + CRLF.len());
    frame.extend_from_slice(line.as_bytes());
    frame.extend_from_slice(CRLF.as_bytes());
    frame
}

/// Decode reply bytes, replacing invalid UTF-8 and dropping trailing whitespace
pub fn decode_reply(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end().to_string()
}

/// Write one CRLF-terminated line and flush it
pub async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(&encode_line(line)).await?;
    writer.flush().await?;
    Ok(())
}

/// Perform a single read into `buf` and decode it as one reply
///
/// A zero-length read means the peer closed the connection.
pub async fn read_reply<R: AsyncRead + Unpin>(reader: &mut R, buf: &mut [u8]) -> Result<String> {
    let n = reader.read(buf).await?;
    if n == 0 {
        return Err(Error::ConnectionClosed);
    }
    Ok(decode_reply(&buf[..n]))
}
