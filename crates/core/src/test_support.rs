// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test fixture builders for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::job::{JobRecord, MapOutput, MapTask, ReduceTask};
use crate::status::BalancingStrategy;

pub fn map_output(word: &str, count: u64) -> MapOutput {
    MapOutput {
        word: word.to_string(),
        count,
    }
}

pub fn map_task(job_id: &str, shard_id: u32, text_content: &str) -> MapTask {
    MapTask {
        job_id: job_id.to_string(),
        shard_id,
        text_content: text_content.to_string(),
    }
}

pub fn reduce_task(job_id: &str, word: &str, counts: Vec<u64>) -> ReduceTask {
    ReduceTask {
        job_id: job_id.to_string(),
        word: word.to_string(),
        counts,
    }
}

/// A `JobRecord` in MAP phase, created at a fixed timestamp, with
/// `BalancingStrategy::RoundRobin`.
pub fn job_record(text: &str, num_shards: u32) -> JobRecord {
    JobRecord::new(
        text.to_string(),
        BalancingStrategy::RoundRobin,
        num_shards,
        "2026-01-01T00:00:00+00:00".to_string(),
    )
}
