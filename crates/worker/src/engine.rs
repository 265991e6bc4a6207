// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Main engine loop: register once, then poll `FetchJob` with backoff on
//! idle, matching `original_source/backend/engine.py::Engine.run`.

use std::time::Duration;

use mrwc_core::EngineRole;
use mrwc_coordinator::dispatch::{DispatchTaskPayload, Request, Response};

use crate::client::{call, ClientError};
use crate::{mapper, reducer};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub engine_id: String,
    pub role: EngineRole,
    pub capacity: u32,
    pub coordinator_addr: String,
    /// Poll delay while idle; kept low in tests to keep capacity-gating
    /// scenarios observable.
    pub idle_backoff: Duration,
    pub busy_delay: Duration,
}

/// Runs the poll loop until `iterations` fetch attempts have completed, or
/// forever if `None`. Returns the count of tasks actually processed.
pub async fn run(config: &EngineConfig, iterations: Option<usize>) -> Result<usize, ClientError> {
    register(config).await?;

    let mut processed = 0;
    let mut remaining = iterations;
    loop {
        if let Some(0) = remaining {
            break;
        }
        let had_work = fetch_and_process(config).await?;
        if had_work {
            processed += 1;
            tokio::time::sleep(config.busy_delay).await;
        } else {
            tokio::time::sleep(config.idle_backoff).await;
        }
        remaining = remaining.map(|n| n - 1);
    }
    Ok(processed)
}

async fn register(config: &EngineConfig) -> Result<(), ClientError> {
    let resp = call(
        &config.coordinator_addr,
        &Request::RegisterEngine {
            engine_id: config.engine_id.clone(),
            role: config.role,
            capacity: config.capacity,
        },
    )
    .await?;
    if let Response::Error { message } = resp {
        tracing::warn!(engine_id = %config.engine_id, %message, "registration rejected");
    }
    Ok(())
}

async fn fetch_and_process(config: &EngineConfig) -> Result<bool, ClientError> {
    let resp = call(&config.coordinator_addr, &Request::FetchJob { engine_id: config.engine_id.clone() }).await?;
    let Response::Task(payload) = resp else {
        return Ok(false);
    };
    match payload {
        DispatchTaskPayload::None => Ok(false),
        DispatchTaskPayload::Map(task) => {
            let outputs = mapper::process(&task);
            tracing::info!(job_id = %task.job_id, shard_id = task.shard_id, words = outputs.len(), "map task complete");
            call(
                &config.coordinator_addr,
                &Request::ReportMapResult {
                    engine_id: config.engine_id.clone(),
                    job_id: task.job_id,
                    shard_id: task.shard_id,
                    outputs,
                },
            )
            .await?;
            Ok(true)
        }
        DispatchTaskPayload::Reduce(task) => {
            let total = reducer::process(&task);
            tracing::info!(job_id = %task.job_id, word = %task.word, total, "reduce task complete");
            call(
                &config.coordinator_addr,
                &Request::ReportReduceResult {
                    engine_id: config.engine_id.clone(),
                    job_id: task.job_id,
                    word: task.word,
                    total,
                },
            )
            .await?;
            Ok(true)
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
