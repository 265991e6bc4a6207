// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job record and the transient task shapes that flow through the queues.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::status::{BalancingStrategy, JobStatus};

/// A single `(word, count)` entry in a completed job's top-K summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// How many of the highest-count words are retained in `top_words`.
pub const TOP_K: usize = 10;

/// `job_id → JobRecord`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub text: String,
    pub status: JobStatus,
    pub balancing_strategy: BalancingStrategy,

    pub num_shards: u32,
    pub completed_shards: u32,

    /// `word → list of partial counts` reported by mappers.
    pub map_results: IndexMap<String, Vec<u64>>,

    pub num_reduce_tasks: u32,
    pub completed_reduce_tasks: u32,

    /// `word → total count`, frozen once `status == Done`.
    pub reduce_results: IndexMap<String, u64>,

    /// `None` until DONE.
    pub top_words: Option<Vec<WordCount>>,

    pub created_at: String,
    pub completed_at: Option<String>,
}

impl JobRecord {
    pub fn new(text: String, balancing_strategy: BalancingStrategy, num_shards: u32, created_at: String) -> Self {
        let status = if num_shards == 0 {
            JobStatus::Done
        } else {
            JobStatus::Map
        };
        Self {
            text,
            status,
            balancing_strategy,
            num_shards,
            completed_shards: 0,
            map_results: IndexMap::new(),
            num_reduce_tasks: 0,
            completed_reduce_tasks: 0,
            reduce_results: IndexMap::new(),
            top_words: if num_shards == 0 { Some(Vec::new()) } else { None },
            created_at,
            completed_at: None,
        }
    }

    /// Sorts `reduce_results` by count descending with a stable insertion-order
    /// tie-break, keeping the first [`TOP_K`].
    pub fn compute_top_words(&self) -> Vec<WordCount> {
        let mut entries: Vec<(usize, &String, &u64)> = self
            .reduce_results
            .iter()
            .enumerate()
            .map(|(i, (w, c))| (i, w, c))
            .collect();
        entries.sort_by(|a, b| b.2.cmp(a.2).then(a.0.cmp(&b.0)));
        entries
            .into_iter()
            .take(TOP_K)
            .map(|(_, word, count)| WordCount {
                word: word.clone(),
                count: *count,
            })
            .collect()
    }
}

/// Transient `(job_id, shard_id, shard_text)` tuple living in `map_queue` or
/// in flight at a worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapTask {
    pub job_id: String,
    pub shard_id: u32,
    pub text_content: String,
}

/// Transient `(job_id, word, counts[])` tuple living in `reduce_queue` or in
/// flight at a worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReduceTask {
    pub job_id: String,
    pub word: String,
    pub counts: Vec<u64>,
}

/// One `(word, count)` pair reported by a mapper for a completed shard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapOutput {
    pub word: String,
    pub count: u64,
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
