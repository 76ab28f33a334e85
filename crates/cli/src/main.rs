mod cli;
mod forms;
mod prompt;
mod report;
mod request;
mod table;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use database::config::ConnectionConfig;
use env_logger::Env;
use forms::Form;
use log::warn;
use prompt::{InquirePrompter, LinePrompter, Prompter};
use std::io::{self, IsTerminal, Write};

async fn run(cli: Cli, prompter: &mut dyn Prompter) -> Result<()> {
    let config = ConnectionConfig::from_env().context("Invalid database configuration")?;

    let mut out = io::stdout();

    let request = match forms::gather(&cli.command, prompter)? {
        Form::Submit(request) => request,
        Form::Cancel(message) => {
            writeln!(out, "{message}")?;
            return Ok(());
        }
    };

    let Some(db) = report::connect(&mut out, &config).await? else {
        return Ok(());
    };

    if let Some(banner) = request.banner() {
        report::banner(&mut out, banner)?;
    }
    let empty = request.empty_table();
    report::outcome(&mut out, request::execute(&db, request).await, empty)?;

    if let Err(err) = db.close().await {
        warn!("Closing the connection failed: {err}");
    }
    Ok(())
}

/// Runs one registry command
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if io::stdin().is_terminal() {
        run(cli, &mut InquirePrompter).await
    } else {
        run(cli, &mut LinePrompter::new(io::stdin().lock())).await
    }
}
