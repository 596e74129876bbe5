//! Scenario runner
//!
//! Sends each step over an established connection and writes a
//! `> request` / `< reply` transcript. The first failed expectation aborts
//! the run.

use std::io::Write;

use crate::client::TvClient;
use crate::common::{Error, Result};
use crate::protocol::Command;

use super::config::Scenario;

/// One request and the reply it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub command: String,
    pub reply: String,
}

/// Outcome of a completed scenario
#[derive(Debug)]
pub struct ScenarioReport {
    pub steps_run: usize,
    pub transcript: Vec<Exchange>,
}

/// Run `scenario` over `client`, writing the transcript to `out`
pub async fn run_scenario<W: Write>(
    client: &mut TvClient,
    scenario: &Scenario,
    out: &mut W,
) -> Result<ScenarioReport> {
    tracing::debug!(name = %scenario.name, steps = scenario.steps.len(), "Running scenario");

    let mut transcript = Vec::with_capacity(scenario.steps.len());

    for (i, step) in scenario.steps.iter().enumerate() {
        let line = if step.raw {
            step.send.clone()
        } else {
            step.send
                .parse::<Command>()
                .map_err(|e| Error::invalid_command(&step.send, e))?
                .to_string()
        };

        writeln!(out, "> {}", line)?;
        let reply = client.send(&line).await?;
        writeln!(out, "< {}", reply)?;
        out.flush()?;

        if let Some(expect) = &step.expect {
            expect.check(&line, &reply).inspect_err(|e| {
                tracing::debug!(step = i + 1, error = %e, "Step failed");
            })?;
        }

        transcript.push(Exchange {
            command: line,
            reply,
        });
    }

    Ok(ScenarioReport {
        steps_run: transcript.len(),
        transcript,
    })
}
