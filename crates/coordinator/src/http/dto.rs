// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response DTOs for the operator HTTP surface.

use mrwc_core::{BalancingStrategy, EngineRecord, EngineStatus, JobId, JobRecord, WordCount};
use serde::{Deserialize, Serialize};

use crate::state::CreatedJob;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub text: String,
    #[serde(default)]
    pub balancing_strategy: BalancingStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResponse {
    pub job_id: String,
    pub status: String,
    pub text_length: usize,
    pub num_shards: u32,
    pub top_words: Option<Vec<WordCount>>,
    pub created_at: String,
    pub completed_at: Option<String>,
    pub duration_seconds: Option<f64>,
}

impl JobResponse {
    /// Builds the response for a just-created job without re-locking
    /// coordinator state.
    pub fn from_created(created: &CreatedJob) -> Self {
        let status = if created.num_shards == 0 { "done" } else { "map" };
        let top_words = (created.num_shards == 0).then(Vec::new);
        Self {
            job_id: created.job_id.clone(),
            status: status.to_string(),
            text_length: created.text_length,
            num_shards: created.num_shards,
            top_words,
            created_at: created.created_at.clone(),
            completed_at: None,
            duration_seconds: None,
        }
    }

    pub fn from_record(job_id: &JobId, record: &JobRecord) -> Self {
        let duration_seconds = match (&record.completed_at, chrono_duration(&record.created_at, record.completed_at.as_deref())) {
            (Some(_), Some(d)) => Some(d),
            _ => None,
        };
        Self {
            job_id: job_id.as_str().to_string(),
            status: record.status.to_string(),
            text_length: record.text.len(),
            num_shards: record.num_shards,
            top_words: record.top_words.clone(),
            created_at: record.created_at.clone(),
            completed_at: record.completed_at.clone(),
            duration_seconds,
        }
    }
}

fn chrono_duration(created_at: &str, completed_at: Option<&str>) -> Option<f64> {
    let completed_at = completed_at?;
    let created = chrono::DateTime::parse_from_rfc3339(created_at).ok()?;
    let completed = chrono::DateTime::parse_from_rfc3339(completed_at).ok()?;
    Some((completed - created).num_milliseconds() as f64 / 1000.0)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineInfo {
    pub engine_id: String,
    pub role: String,
    pub capacity: u32,
    pub current_load: u32,
    pub last_seen: i64,
    pub status: EngineStatus,
}

impl EngineInfo {
    pub fn from_record(engine_id: &str, record: &EngineRecord, status: EngineStatus) -> Self {
        Self {
            engine_id: engine_id.to_string(),
            role: record.role.to_string(),
            capacity: record.capacity,
            current_load: record.current_load,
            last_seen: record.last_seen,
            status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntryResponse {
    pub timestamp: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_engines: usize,
    pub mappers: usize,
    pub reducers: usize,
    pub map_queue_size: usize,
    pub reduce_queue_size: usize,
    pub total_jobs: usize,
    pub active_jobs: usize,
}

#[cfg(test)]
#[path = "dto_tests.rs"]
mod tests;
