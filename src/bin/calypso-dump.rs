//! Calypso Dump CLI Binary
//!
//! Command-line interface for capturing and converting card dumps.

use anyhow::Context;
use calypso_dump::logging::init_logging;
use calypso_dump::tooling::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn run(cli: &Cli) -> anyhow::Result<String> {
    let mut context =
        CliContext::new(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_log_overrides(context.config_mut());
    init_logging(Some(&context.config().logging), cli.log_file.clone())
        .context("Failed to initialize logging")?;

    Ok(context.execute(&cli.command)?)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
