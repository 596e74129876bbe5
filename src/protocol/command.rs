//! Command vocabulary understood by the TV server

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Longest request line the server accepts, excluding CRLF
pub const MAX_LINE_LENGTH: usize = 256;

/// A request the client can send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Power on
    On,
    /// Power off
    Off,
    /// Query power state
    Status,
    /// Query number of channels
    Channels,
    /// Query current channel
    Get,
    /// Tune to a channel
    Set(i32),
    /// Next channel
    Up,
    /// Previous channel
    Down,
    /// Liveness check
    Ping,
    /// Subscribe to state events
    Sub,
    /// Unsubscribe from state events
    Unsub,
}

/// Why a line is not a valid command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("line longer than {max} characters", max = MAX_LINE_LENGTH)]
    LineTooLong,

    #[error("empty line")]
    EmptyLine,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{command} takes exactly one argument")]
    ArgCount { command: &'static str },

    #[error("argument '{0}' is not an integer")]
    ArgNotInt(String),

    #[error("{command} takes no arguments")]
    ExtraArgs { command: &'static str },
}

impl Command {
    /// Upper-case keyword as sent on the wire
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::On => "ON",
            Command::Off => "OFF",
            Command::Status => "STATUS",
            Command::Channels => "CHANNELS",
            Command::Get => "GET",
            Command::Set(_) => "SET",
            Command::Up => "UP",
            Command::Down => "DOWN",
            Command::Ping => "PING",
            Command::Sub => "SUB",
            Command::Unsub => "UNSUB",
        }
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        let command = match keyword.to_ascii_uppercase().as_str() {
            "ON" => Command::On,
            "OFF" => Command::Off,
            "STATUS" => Command::Status,
            "CHANNELS" => Command::Channels,
            "GET" => Command::Get,
            "SET" => Command::Set(0),
            "UP" => Command::Up,
            "DOWN" => Command::Down,
            "PING" => Command::Ping,
            "SUB" => Command::Sub,
            "UNSUB" => Command::Unsub,
            _ => return None,
        };
        Some(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Set(channel) => write!(f, "SET {}", channel),
            other => f.write_str(other.keyword()),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a request line: keywords are case-insensitive, surrounding and
    /// repeated whitespace is ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if line.chars().count() > MAX_LINE_LENGTH {
            return Err(CommandError::LineTooLong);
        }

        let mut parts = line.split_whitespace();
        let keyword = parts.next().ok_or(CommandError::EmptyLine)?;
        let args: Vec<&str> = parts.collect();

        let command = Command::from_keyword(keyword)
            .ok_or_else(|| CommandError::UnknownCommand(keyword.to_string()))?;

        match command {
            Command::Set(_) => match args.as_slice() {
                [arg] => arg
                    .parse()
                    .map(Command::Set)
                    .map_err(|_| CommandError::ArgNotInt((*arg).to_string())),
                _ => Err(CommandError::ArgCount { command: "SET" }),
            },
            _ if !args.is_empty() => Err(CommandError::ExtraArgs {
                command: command.keyword(),
            }),
            _ => Ok(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("STATUS".parse::<Command>(), Ok(Command::Status));
        assert_eq!("status".parse::<Command>(), Ok(Command::Status));
        assert_eq!("StAtUs".parse::<Command>(), Ok(Command::Status));
    }

    #[test]
    fn test_parse_set_with_argument() {
        assert_eq!("SET 5".parse::<Command>(), Ok(Command::Set(5)));
        assert_eq!("   SeT    9   ".parse::<Command>(), Ok(Command::Set(9)));
    }

    #[test]
    fn test_parse_other_no_arg_commands() {
        assert_eq!("GET".parse::<Command>(), Ok(Command::Get));
        assert_eq!("CHANNELS".parse::<Command>(), Ok(Command::Channels));
        assert_eq!("UP".parse::<Command>(), Ok(Command::Up));
        assert_eq!("DOWN".parse::<Command>(), Ok(Command::Down));
        assert_eq!("PING".parse::<Command>(), Ok(Command::Ping));
        assert_eq!("SUB".parse::<Command>(), Ok(Command::Sub));
        assert_eq!("UNSUB".parse::<Command>(), Ok(Command::Unsub));
    }

    #[test]
    fn test_parse_errors_have_reasons() {
        assert_eq!("".parse::<Command>(), Err(CommandError::EmptyLine));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::EmptyLine));
        assert_eq!(
            "Test".parse::<Command>(),
            Err(CommandError::UnknownCommand("Test".into()))
        );
        assert_eq!(
            "SET".parse::<Command>(),
            Err(CommandError::ArgCount { command: "SET" })
        );
        assert_eq!(
            "SET invalid".parse::<Command>(),
            Err(CommandError::ArgNotInt("invalid".into()))
        );
        assert_eq!(
            "STATUS now".parse::<Command>(),
            Err(CommandError::ExtraArgs { command: "STATUS" })
        );
        assert_eq!(
            "GET 1 2".parse::<Command>(),
            Err(CommandError::ExtraArgs { command: "GET" })
        );
    }

    #[test]
    fn test_parse_rejects_long_line() {
        let line = format!("SET {}", "9".repeat(MAX_LINE_LENGTH + 1));
        assert_eq!(line.parse::<Command>(), Err(CommandError::LineTooLong));
    }

    #[test]
    fn test_channel_is_not_range_checked() {
        assert_eq!("SET 0".parse::<Command>(), Ok(Command::Set(0)));
        assert_eq!("SET -3".parse::<Command>(), Ok(Command::Set(-3)));
    }

    #[test]
    fn test_display_is_wire_form() {
        assert_eq!(Command::Set(5).to_string(), "SET 5");
        assert_eq!(Command::Channels.to_string(), "CHANNELS");
        assert_eq!("set 7".parse::<Command>().unwrap().to_string(), "SET 7");
    }
}
