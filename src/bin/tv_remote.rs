//! tv-remote - interactive remote control for a SmartTV server
//!
//! Without `--script`, commands are read from stdin and sent verbatim.
//! With `--script`, a YAML scenario is run and checked instead.

use std::io::Write;

use clap::Parser;
use colored::Colorize;
use smarttv::commands::RemoteArgs;
use smarttv::common::logging;
use smarttv::scenario::{run_scenario, Scenario};
use smarttv::{remote, Result, TvClient};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init_cli();

    let args = RemoteArgs::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: RemoteArgs) -> Result<()> {
    let config = args.config();

    // Load before connecting so a bad file never touches the server
    let scenario = args.script.as_deref().map(Scenario::load).transpose()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match scenario {
        Some(scenario) => {
            let mut client = TvClient::connect(&config).await?;

            writeln!(out, "{} {}", "Running scenario:".blue().bold(), scenario.name.bold())?;
            if let Some(desc) = &scenario.description {
                writeln!(out, "  {}", desc.dimmed())?;
            }

            let report = run_scenario(&mut client, &scenario, &mut out).await?;
            client.close().await;

            writeln!(
                out,
                "{} {} ({} steps)",
                "✓".green().bold(),
                "Scenario passed".green().bold(),
                report.steps_run
            )?;
        }
        None => {
            writeln!(out, "[Client] Connecting to {} ...", config.addr())?;
            let mut client = TvClient::connect(&config).await?;

            let stdin = BufReader::new(tokio::io::stdin());
            remote::run_remote(&mut client, stdin, &mut out).await?;

            client.close().await;
            writeln!(out, "[Client] Exiting ...")?;
        }
    }

    Ok(())
}
