//! tv-smoke - end-to-end smoke test for a SmartTV server
//!
//! Connects once, runs the built-in command sequence, and exits non-zero on
//! the first connection failure, timeout or unexpected STATUS reply.

use std::io::Write;

use clap::Parser;
use smarttv::commands::SmokeArgs;
use smarttv::common::logging;
use smarttv::scenario::{run_scenario, Scenario};
use smarttv::{Result, TvClient};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init_cli();

    let args = SmokeArgs::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: SmokeArgs) -> Result<()> {
    let mut client = TvClient::connect(&args.config()).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run_scenario(&mut client, &Scenario::smoke(), &mut out).await?;
    client.close().await;

    writeln!(out, "smoke OK")?;
    Ok(())
}
