//! Client configuration

use std::time::Duration;

/// Loopback address used when no host is given
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the TV server listens on by default
pub const DEFAULT_PORT: u16 = 1238;

/// Connect and per-operation I/O timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Size of the single read performed per reply
pub const DEFAULT_READ_BUFFER: usize = 1024;

/// Connection settings for [`crate::client::TvClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server host name or address
    pub host: String,
    /// Server TCP port
    pub port: u16,
    /// Upper bound on establishing the connection
    pub connect_timeout: Duration,
    /// Upper bound on each write and each read
    pub io_timeout: Duration,
    /// Bytes accepted by the one read that makes up a reply
    pub read_buffer_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            io_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            read_buffer_size: DEFAULT_READ_BUFFER,
        }
    }
}

impl ClientConfig {
    /// Default settings aimed at `host:port`
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Override both timeouts
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self.io_timeout = timeout;
        self
    }

    /// `host:port` as used for connecting and in messages
    pub fn addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            // bare IPv6 literal
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 1238);
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.read_buffer_size, 1024);
    }

    #[test]
    fn test_addr_formatting() {
        assert_eq!(ClientConfig::new("localhost", 9000).addr(), "localhost:9000");
        assert_eq!(ClientConfig::new("::1", 1238).addr(), "[::1]:1238");
    }
}
