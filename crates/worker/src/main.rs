// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mrwc-engine`: a reference mapper or reducer worker process.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use mrwc_core::EngineRole;
use mrwc_worker::{run, EngineConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    Mapper,
    Reducer,
}

impl From<RoleArg> for EngineRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Mapper => EngineRole::Mapper,
            RoleArg::Reducer => EngineRole::Reducer,
        }
    }
}

/// MapReduce engine worker
#[derive(Debug, Parser)]
#[command(name = "mrwc-engine", version)]
struct Cli {
    /// Unique engine ID
    #[arg(long)]
    engine_id: String,

    /// Engine role
    #[arg(long, value_enum)]
    role: RoleArg,

    /// Task capacity
    #[arg(long, default_value_t = 5)]
    capacity: u32,

    /// Coordinator dispatch-protocol address
    #[arg(long, default_value = "127.0.0.1:50051")]
    coordinator: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = EngineConfig {
        engine_id: cli.engine_id,
        role: cli.role.into(),
        capacity: cli.capacity,
        coordinator_addr: cli.coordinator,
        idle_backoff: Duration::from_secs(2),
        busy_delay: Duration::from_millis(500),
    };

    tracing::info!(engine_id = %config.engine_id, role = ?config.role, "mrwc-engine starting");
    match run(&config, None).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("engine loop failed: {err}");
            ExitCode::FAILURE
        }
    }
}
