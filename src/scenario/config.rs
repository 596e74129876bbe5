//! Scenario definitions
//!
//! A scenario is an ordered list of commands with optional checks on each
//! reply. They are loaded from YAML, and the smoke sequence is built in.

use serde::Deserialize;
use std::path::Path;

use crate::common::{Error, Result};
use crate::protocol::{validate_status, Reply};

/// A named sequence of request/reply steps
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Name of the scenario
    pub name: String,
    /// Optional description of what the scenario verifies
    #[serde(default)]
    pub description: Option<String>,
    /// Steps executed in order over one connection
    pub steps: Vec<Step>,
}

/// One command and what its reply must look like
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Step {
    /// Command line, e.g. "SET 5"
    pub send: String,
    /// Send the line verbatim instead of validating it as a command first
    #[serde(default)]
    pub raw: bool,
    /// Optional checks on the reply
    #[serde(default)]
    pub expect: Option<Expectation>,
}

/// Checks on a reply; every field that is set must hold
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Expectation {
    /// Exact reply
    pub equals: Option<String>,
    /// Reply must be one of these
    pub one_of: Option<Vec<String>>,
    /// Substring of the reply
    pub contains: Option<String>,
    /// Whether the reply is an `OK ...` acknowledgement
    pub ok: Option<bool>,
    /// Reply must be exactly `OK OFF` or `OK ON`
    #[serde(default)]
    pub status: bool,
}

impl Expectation {
    /// The strict STATUS check
    pub fn status() -> Self {
        Self {
            status: true,
            ..Self::default()
        }
    }

    /// Verify `reply`, returning an error naming the first failed check
    pub fn check(&self, command: &str, reply: &str) -> Result<()> {
        if self.status {
            validate_status(reply)?;
        }

        if let Some(expected) = &self.equals {
            if reply != expected {
                return Err(Error::unexpected_reply(command, reply, format!("'{}'", expected)));
            }
        }

        if let Some(allowed) = &self.one_of {
            if !allowed.iter().any(|a| a == reply) {
                return Err(Error::unexpected_reply(
                    command,
                    reply,
                    format!("one of: {}", allowed.join(", ")),
                ));
            }
        }

        if let Some(needle) = &self.contains {
            if !reply.contains(needle.as_str()) {
                return Err(Error::unexpected_reply(
                    command,
                    reply,
                    format!("a reply containing '{}'", needle),
                ));
            }
        }

        if let Some(ok) = self.ok {
            if Reply::parse(reply).is_ok() != ok {
                let expected = if ok { "an OK reply" } else { "a non-OK reply" };
                return Err(Error::unexpected_reply(command, reply, expected));
            }
        }

        Ok(())
    }
}

impl Step {
    /// A step without reply checks
    pub fn send(line: &str) -> Self {
        Self {
            send: line.to_string(),
            raw: false,
            expect: None,
        }
    }

    /// A step with reply checks
    pub fn expect(line: &str, expect: Expectation) -> Self {
        Self {
            send: line.to_string(),
            raw: false,
            expect: Some(expect),
        }
    }

    /// A step whose line goes out unvalidated, for provoking error replies
    pub fn raw(line: &str, expect: Expectation) -> Self {
        Self {
            raw: true,
            ..Self::expect(line, expect)
        }
    }
}

impl Scenario {
    /// Parse a scenario from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let scenario: Scenario = serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse scenario: {}", e)))?;

        if scenario.steps.is_empty() {
            return Err(Error::Config(format!(
                "Scenario '{}' has no steps",
                scenario.name
            )));
        }

        Ok(scenario)
    }

    /// Load a scenario from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read scenario '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// The built-in smoke sequence; every STATUS reply is checked strictly
    pub fn smoke() -> Self {
        Self {
            name: "smoke".to_string(),
            description: Some("Power, channel listing and tuning round trip".to_string()),
            steps: vec![
                Step::expect("STATUS", Expectation::status()),
                Step::send("ON"),
                Step::expect("STATUS", Expectation::status()),
                Step::send("CHANNELS"),
                Step::send("GET"),
                Step::send("SET 5"),
                Step::send("GET"),
                Step::send("UP"),
                Step::send("DOWN"),
            ],
        }
    }
}
