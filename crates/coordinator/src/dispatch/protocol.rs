// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request/response message shapes for the dispatch protocol — corresponds
//! 1:1 to `RegisterEngine`/`FetchJob`/`ReportResult`.

use mrwc_core::{EngineRole, MapOutput, MapTask, ReduceTask};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("message too large: {size} bytes (max {max})")]
    MessageTooLarge { size: usize, max: usize },
    #[error("connection closed")]
    ConnectionClosed,
    #[error("request timed out")]
    Timeout,
}

pub const MAX_MESSAGE_SIZE: usize = 64 * 1024 * 1024;
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    RegisterEngine {
        engine_id: String,
        role: EngineRole,
        capacity: u32,
    },
    FetchJob {
        engine_id: String,
    },
    ReportMapResult {
        engine_id: String,
        job_id: String,
        shard_id: u32,
        outputs: Vec<MapOutput>,
    },
    ReportReduceResult {
        engine_id: String,
        job_id: String,
        word: String,
        total: u64,
    },
}

/// `FetchJob`'s reply payload; `task_type: "none"` when nothing is queued,
/// matching the worker poll-backoff loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "task_type", rename_all = "snake_case")]
pub enum DispatchTaskPayload {
    Map(MapTask),
    Reduce(ReduceTask),
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    Registered,
    Task(DispatchTaskPayload),
    ResultAck,
    Error { message: String },
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
