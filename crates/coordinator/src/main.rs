// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mrwc-coordinatord`: binds the dispatch protocol listener and the
//! operator HTTP surface, and runs the liveness sweeper.

use std::future::IntoFuture;
use std::process::ExitCode;
use std::sync::Arc;

use mrwc_coordinator::config::Config;
use mrwc_coordinator::dispatch::listener;
use mrwc_coordinator::http::build_router;
use mrwc_coordinator::state::Coordinator;
use mrwc_coordinator::sweeper;
use mrwc_core::{SystemClock, UuidIdGen};
use mrwc_storage::{JobSummarySink, JsonFileSink, NullSink};

fn main() -> ExitCode {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--version" => {
                println!("mrwc-coordinatord {}", env!("CARGO_PKG_VERSION"));
                return ExitCode::SUCCESS;
            }
            "--help" => {
                println!("mrwc-coordinatord: MapReduce word-count coordinator daemon");
                println!("Configuration is via MRWC_* environment variables (see config.rs).");
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("failed to start tokio runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run())
}

async fn run() -> ExitCode {
    let config = Config::from_env();

    let sink: Arc<dyn JobSummarySink> = match &config.persistence_path {
        Some(path) => Arc::new(JsonFileSink::new(path.clone())),
        None => Arc::new(NullSink),
    };

    let coordinator = Arc::new(Coordinator::new(
        SystemClock,
        Arc::new(UuidIdGen),
        sink,
        config.dead_threshold_secs,
    ));

    let rpc_listener = match tokio::net::TcpListener::bind(&config.rpc_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("failed to bind dispatch protocol listener on {}: {err}", config.rpc_addr);
            return ExitCode::FAILURE;
        }
    };
    let http_listener = match tokio::net::TcpListener::bind(&config.http_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("failed to bind operator HTTP listener on {}: {err}", config.http_addr);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(rpc_addr = %config.rpc_addr, http_addr = %config.http_addr, app_name = %config.app_name, "mrwc-coordinatord starting");

    let router = build_router(Arc::clone(&coordinator), &config.cors_origins);

    let rpc_coordinator = Arc::clone(&coordinator);
    let sweep_coordinator = Arc::clone(&coordinator);
    let sweep_interval = config.sweep_interval_secs;

    tokio::select! {
        result = listener::serve(rpc_listener, rpc_coordinator) => {
            if let Err(err) = result {
                eprintln!("dispatch protocol listener failed: {err}");
            }
        }
        result = axum::serve(http_listener, router).into_future() => {
            if let Err(err) = result {
                eprintln!("operator HTTP server failed: {err}");
            }
        }
        _ = sweeper::run(sweep_coordinator, sweep_interval) => {}
    }

    ExitCode::SUCCESS
}
