//! TCP client for the TV server
//!
//! One connection, one outstanding request. `send` takes `&mut self`, so
//! requests on a client are strictly sequential. Dropping the client closes
//! the socket.

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::{timeout, Duration};

use crate::common::{ClientConfig, Error, Result};
use crate::protocol::codec;

/// Connected client for the SmartTV line protocol
#[derive(Debug)]
pub struct TvClient {
    stream: TcpStream,
    buf: Vec<u8>,
    io_timeout: Duration,
    addr: String,
}

impl TvClient {
    /// Connect to the server described by `config`
    ///
    /// There is no retry: refusal and timeout are returned immediately.
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let addr = config.addr();
        tracing::debug!(%addr, "Connecting to TV server");

        let connect = TcpStream::connect((config.host.as_str(), config.port));
        let stream = match timeout(config.connect_timeout, connect).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => return Err(Error::ConnectFailed { addr, source }),
            Err(_) => {
                return Err(Error::ConnectTimeout {
                    addr,
                    timeout: config.connect_timeout,
                })
            }
        };
        stream.set_nodelay(true)?;

        tracing::debug!(%addr, "Connected");

        Ok(Self {
            stream,
            buf: vec![0u8; config.read_buffer_size.max(1)],
            io_timeout: config.io_timeout,
            addr,
        })
    }

    /// Send one line and return the server's reply
    ///
    /// The reply is the result of a single bounded read, decoded lossily and
    /// stripped of trailing whitespace.
    pub async fn send(&mut self, line: &str) -> Result<String> {
        let io_timeout = self.io_timeout;

        timeout(self.io_timeout, codec::write_line(&mut self.stream, line))
            .await
            .map_err(|_| Error::WriteTimeout {
                command: line.to_string(),
                timeout: io_timeout,
            })??;
        tracing::trace!(addr = %self.addr, request = line, "Sent");

        let reply = timeout(
            self.io_timeout,
            codec::read_reply(&mut self.stream, &mut self.buf),
        )
        .await
        .map_err(|_| Error::ReadTimeout {
            command: line.to_string(),
            timeout: io_timeout,
        })??;
        tracing::trace!(addr = %self.addr, reply = %reply, "Received");

        Ok(reply)
    }

    /// Shut the connection down
    ///
    /// A failed shutdown is logged at debug level and otherwise ignored.
    pub async fn close(mut self) {
        tracing::debug!(addr = %self.addr, "Closing connection");
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(addr = %self.addr, error = %e, "Shutdown failed");
        }
    }
}
