//! `contact`: terminal front end for the contact form.

mod cli;
mod commands;
mod config;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::commands::fill::Outcome;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(&cli)?;
    let _log = contact_log::init_with(config.log.clone()).context("cannot initialize logging")?;
    debug!(?config, "configuration loaded");

    let mut stdout = io::stdout().lock();
    let ok = match &cli.command {
        Command::Check { field, value } => commands::check::run(&mut stdout, *field, value)?,
        Command::Submit(args) => {
            let sender = commands::sender(&config)?;
            commands::submit::run(&mut stdout, args, sender.as_ref()).await?
        }
        Command::Fill { .. } => {
            let sender = commands::sender(&config)?;
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let outcome = commands::fill::run(input, &mut stdout, sender.as_ref()).await?;
            outcome != Outcome::Failed
        }
    };
    stdout.flush()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
