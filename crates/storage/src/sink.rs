// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence sink for job-creation summaries.
//!
//! The original system inserts one document per job into MongoDB
//! (`motor.motor_asyncio.AsyncIOMotorClient`, see
//! `original_source/backend/map_reduce/api.py`). A database driver is out of
//! proportion for this scope, so this crate stands in with a trait boundary
//! plus a file-backed implementation, grounded on `oj-storage`'s
//! trait-based persistence shape (minus its WAL/snapshot machinery, which
//! covers cross-restart recovery of in-flight state — explicitly out of
//! scope here). Write failures are logged here via `tracing::warn!` before
//! being returned, since callers treat them as swallow-and-continue.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use mrwc_core::JobStatus;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row written per job creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub job_id: String,
    pub text_length: usize,
    pub num_shards: u32,
    pub status: JobStatus,
    pub created_at: String,
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error writing job summary: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error writing job summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// External collaborator interface: called once per job
/// creation. Failure is logged and swallowed by callers — it must never
/// fail job creation itself.
pub trait JobSummarySink: Send + Sync {
    fn insert_job_summary(&self, summary: &JobSummary) -> Result<(), SinkError>;
}

/// Default sink: discards summaries. A valid, documented no-op
/// implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl JobSummarySink for NullSink {
    fn insert_job_summary(&self, _summary: &JobSummary) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Appends one JSON line per job summary to a file, serialized with a mutex
/// since multiple coordinator handlers may create jobs concurrently.
pub struct JsonFileSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JobSummarySink for JsonFileSink {
    fn insert_job_summary(&self, summary: &JobSummary) -> Result<(), SinkError> {
        let _guard = self.lock.lock();
        let result: Result<(), SinkError> = (|| {
            let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            let line = serde_json::to_string(summary)?;
            writeln!(file, "{line}")?;
            Ok(())
        })();
        if let Err(ref err) = result {
            tracing::warn!(job_id = %summary.job_id, path = %self.path.display(), error = %err, "failed to append job summary");
        }
        result
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
