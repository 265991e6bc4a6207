// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job store and lifecycle engine.
//!
//! The MAP→REDUCE and REDUCE→DONE transitions happen inside a single method
//! call each (`record_map_result`/`record_reduce_result`), which keeps each
//! transition atomic under the coordinator's coarse lock: the whole call runs
//! while the lock is held.

use indexmap::IndexMap;
use mrwc_core::{BalancingStrategy, JobId, JobRecord, JobStatus, MapOutput, ReduceTask};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobStoreError {
    #[error("job not found")]
    NotFound,
}

/// `job_id → JobRecord`. Insertion order preserved so `/jobs`
/// lists jobs in creation order.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: IndexMap<JobId, JobRecord>,
}

/// Queue seeding produced by a MAP→REDUCE transition, returned so the caller
/// (holding the single coordinator lock) can push onto `reduce_queue`
/// without `JobStore` needing to know about queues.
#[derive(Debug)]
pub struct ReduceSeed {
    pub tasks: Vec<ReduceTask>,
}

/// Outcome of [`JobStore::record_map_result`].
#[derive(Debug)]
pub enum MapResultOutcome {
    /// The job still has outstanding shards.
    StillMapping,
    /// This report completed the MAP→REDUCE transition; seed `reduce_queue`
    /// with `seed.tasks`.
    MovedToReduce(ReduceSeed),
    /// This report completed the last shard, but the shards produced no
    /// distinct words, so there is nothing to reduce: the job goes straight
    /// to DONE with an empty top-K.
    CompletedWithNoWords,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, job_id: JobId, record: JobRecord) {
        self.jobs.insert(job_id, record);
    }

    pub fn get(&self, job_id: &JobId) -> Option<&JobRecord> {
        self.jobs.get(job_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&JobId, &JobRecord)> {
        self.jobs.iter()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// `record_map_result`. `completed_at` is only used if this report
    /// completes the job outright (see [`MapResultOutcome::CompletedWithNoWords`]).
    pub fn record_map_result(
        &mut self,
        job_id: &JobId,
        outputs: Vec<MapOutput>,
        completed_at: String,
    ) -> Result<MapResultOutcome, JobStoreError> {
        let job = self.jobs.get_mut(job_id).ok_or(JobStoreError::NotFound)?;

        job.completed_shards += 1;
        for output in outputs {
            job.map_results.entry(output.word).or_default().push(output.count);
        }

        if job.completed_shards == job.num_shards {
            job.num_reduce_tasks = job.map_results.len() as u32;
            job.status = JobStatus::Reduce;

            if job.num_reduce_tasks == 0 {
                job.status = JobStatus::Done;
                job.completed_at = Some(completed_at);
                job.top_words = Some(job.compute_top_words());
                return Ok(MapResultOutcome::CompletedWithNoWords);
            }

            let tasks = job
                .map_results
                .iter()
                .map(|(word, counts)| ReduceTask {
                    job_id: job_id.as_str().to_string(),
                    word: word.clone(),
                    counts: counts.clone(),
                })
                .collect();
            return Ok(MapResultOutcome::MovedToReduce(ReduceSeed { tasks }));
        }
        Ok(MapResultOutcome::StillMapping)
    }

    /// `record_reduce_result`. Returns `true` if this call
    /// completed the REDUCE→DONE transition.
    pub fn record_reduce_result(
        &mut self,
        job_id: &JobId,
        word: String,
        total: u64,
        completed_at: String,
    ) -> Result<bool, JobStoreError> {
        let job = self.jobs.get_mut(job_id).ok_or(JobStoreError::NotFound)?;

        job.reduce_results.insert(word, total);
        job.completed_reduce_tasks += 1;

        if job.completed_reduce_tasks == job.num_reduce_tasks {
            job.status = JobStatus::Done;
            job.completed_at = Some(completed_at);
            job.top_words = Some(job.compute_top_words());
            return Ok(true);
        }
        Ok(false)
    }

    #[allow(dead_code)]
    pub fn balancing_strategy(&self, job_id: &JobId) -> Option<BalancingStrategy> {
        self.jobs.get(job_id).map(|j| j.balancing_strategy)
    }
}

#[cfg(test)]
#[path = "jobstore_tests.rs"]
mod tests;
