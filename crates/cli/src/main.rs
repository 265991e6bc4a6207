// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `mrwcctl` - operator CLI for a MapReduce word-count coordinator.

mod client;
mod color;
mod output;
mod table;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mrwc_core::BalancingStrategy;

use client::CoordinatorClient;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "mrwcctl", version, about = "Operator CLI for the mrwc coordinator")]
struct Cli {
    /// Coordinator HTTP API base URL
    #[arg(long, global = true, default_value = "http://127.0.0.1:8080")]
    coordinator: String,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a job from inline text or a file
    Submit {
        /// Text to submit. Mutually exclusive with --file.
        text: Option<String>,

        /// Read job text from a file instead of the `text` argument
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Shard-assignment strategy
        #[arg(long, value_enum, default_value_t = BalancingStrategyArg::RoundRobin)]
        strategy: BalancingStrategyArg,
    },
    /// List all jobs
    Jobs,
    /// Show a single job
    Job {
        /// Job ID
        id: String,
    },
    /// List registered engines
    Engines,
    /// Show recent activity log entries
    Logs,
    /// Show coordinator-wide statistics
    Stats,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum BalancingStrategyArg {
    RoundRobin,
    LeastLoaded,
}

impl From<BalancingStrategyArg> for BalancingStrategy {
    fn from(arg: BalancingStrategyArg) -> Self {
        match arg {
            BalancingStrategyArg::RoundRobin => BalancingStrategy::RoundRobin,
            BalancingStrategyArg::LeastLoaded => BalancingStrategy::LeastLoaded,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = CoordinatorClient::new(cli.coordinator);

    let result = match cli.command {
        Commands::Submit { text, file, strategy } => submit(&client, text, file, strategy.into(), cli.output).await,
        Commands::Jobs => jobs(&client, cli.output).await,
        Commands::Job { id } => job(&client, &id, cli.output).await,
        Commands::Engines => engines(&client, cli.output).await,
        Commands::Logs => logs(&client, cli.output).await,
        Commands::Stats => stats(&client, cli.output).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn submit(
    client: &CoordinatorClient,
    text: Option<String>,
    file: Option<PathBuf>,
    strategy: BalancingStrategy,
    format: OutputFormat,
) -> Result<(), client::ClientError> {
    let body = match (text, file) {
        (Some(text), None) => text,
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|source| client::ClientError::ReadFile { path, source })?,
        _ => String::new(),
    };
    let job = client.submit_job(body, strategy).await?;
    output::print_job(&job, format);
    Ok(())
}

async fn jobs(client: &CoordinatorClient, format: OutputFormat) -> Result<(), client::ClientError> {
    let jobs = client.list_jobs().await?;
    output::print_jobs(&jobs, format);
    Ok(())
}

async fn job(client: &CoordinatorClient, id: &str, format: OutputFormat) -> Result<(), client::ClientError> {
    let job = client.get_job(id).await?;
    output::print_job(&job, format);
    Ok(())
}

async fn engines(client: &CoordinatorClient, format: OutputFormat) -> Result<(), client::ClientError> {
    let engines = client.list_engines().await?;
    output::print_engines(&engines, format);
    Ok(())
}

async fn logs(client: &CoordinatorClient, format: OutputFormat) -> Result<(), client::ClientError> {
    let entries = client.list_logs().await?;
    output::print_logs(&entries, format);
    Ok(())
}

async fn stats(client: &CoordinatorClient, format: OutputFormat) -> Result<(), client::ClientError> {
    let stats = client.stats().await?;
    output::print_stats(&stats, format);
    Ok(())
}
