// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The coordinator's process-wide mutable state: registry, both queues, job
//! store, and activity log behind a single coarse lock.

use std::sync::Arc;

use mrwc_core::{
    BalancingStrategy, Clock, EngineId, EngineRecord, EngineRole, EngineStatus, IdGen, JobId,
    JobRecord, MapOutput, MapTask,
};
use mrwc_storage::{JobSummary, JobSummarySink};
use parking_lot::Mutex;

use crate::activity_log::ActivityLog;
use crate::jobstore::{JobStore, JobStoreError, MapResultOutcome};
use crate::queues::{MapQueue, ReduceQueue};
use crate::registry::Registry;

/// Everything mutated by worker RPCs, operator HTTP calls, and the liveness
/// sweeper. A single `parking_lot::Mutex` around this struct is the coarse
/// locking strategy calls "the simplest correct strategy".
pub struct CoordinatorState {
    pub registry: Registry,
    pub map_queue: MapQueue,
    pub reduce_queue: ReduceQueue,
    pub jobs: JobStore,
    pub log: ActivityLog,
}

impl CoordinatorState {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            map_queue: MapQueue::new(),
            reduce_queue: ReduceQueue::new(),
            jobs: JobStore::new(),
            log: ActivityLog::new(),
        }
    }
}

impl Default for CoordinatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of [`Coordinator::create_job`].
#[derive(Debug, Clone)]
pub struct CreatedJob {
    pub job_id: String,
    pub text_length: usize,
    pub num_shards: u32,
    pub created_at: String,
}

/// One of the two outcomes FetchJob can hand a worker,
/// sitting above the raw queue/registry types so both the RPC and any other
/// caller share one dispatch decision.
pub enum DispatchedTask {
    Map(MapTask),
    Reduce(mrwc_core::ReduceTask),
    None,
}

/// Shared entry point used by the dispatch protocol listener and the HTTP
/// operator surface. Owns the clock, id generator, persistence sink, and the
/// locked [`CoordinatorState`].
pub struct Coordinator<C: Clock> {
    pub state: Arc<Mutex<CoordinatorState>>,
    pub clock: C,
    pub id_gen: Arc<dyn IdGen>,
    pub sink: Arc<dyn JobSummarySink>,
    pub dead_threshold_secs: i64,
}

impl<C: Clock> Coordinator<C> {
    pub fn new(clock: C, id_gen: Arc<dyn IdGen>, sink: Arc<dyn JobSummarySink>, dead_threshold_secs: i64) -> Self {
        Self {
            state: Arc::new(Mutex::new(CoordinatorState::new())),
            clock,
            id_gen,
            sink,
            dead_threshold_secs,
        }
    }

    // ---- create_job ----------------------------------------

    pub fn create_job(&self, text: String, balancing_strategy: BalancingStrategy) -> CreatedJob {
        let job_id = self.id_gen.next();
        let words = mrwc_core::tokenize(&text);
        let shards = mrwc_core::shard_tokens(&words);
        let num_shards = shards.len() as u32;
        let created_at = self.clock.now().to_rfc3339();
        let text_length = text.len();

        let record = JobRecord::new(text, balancing_strategy, num_shards, created_at.clone());

        {
            let mut state = self.state.lock();
            state.jobs.insert(JobId::new(job_id.clone()), record);
            for (shard_id, shard_text) in shards.into_iter().enumerate() {
                state.map_queue.push(MapTask {
                    job_id: job_id.clone(),
                    shard_id: shard_id as u32,
                    text_content: shard_text,
                });
            }
            state
                .log
                .push(created_at.clone(), format!("job {job_id} created with {num_shards} shards"));
        }

        // Persistence write happens outside the state lock;
        // failure is logged and swallowed.
        let summary = JobSummary {
            job_id: job_id.clone(),
            text_length,
            num_shards,
            status: mrwc_core::JobStatus::Map,
            created_at: created_at.clone(),
        };
        if let Err(err) = self.sink.insert_job_summary(&summary) {
            tracing::warn!(job_id = %job_id, error = %err, "persistence sink failed for job creation");
        }

        CreatedJob {
            job_id,
            text_length,
            num_shards,
            created_at,
        }
    }

    // ---- registry -------------------------------------------

    pub fn register_engine(&self, engine_id: EngineId, role: EngineRole, capacity: u32) {
        let now = self.clock.now_secs();
        let mut state = self.state.lock();
        state.registry.register(engine_id.clone(), role, capacity, now);
        let iso = self.clock.now().to_rfc3339();
        state.log.push(
            iso,
            format!("engine {engine_id} registered as {role} with capacity {capacity}"),
        );
    }

    // ---- FetchJob --------------------------------------------

    pub fn fetch_job(&self, engine_id: &EngineId) -> DispatchedTask {
        let now = self.clock.now_secs();
        let iso = self.clock.now().to_rfc3339();
        let mut state = self.state.lock();
        state.registry.touch(engine_id, now);

        let role = match state.registry.get(engine_id) {
            Some(record) if record.has_capacity() => record.role,
            _ => return DispatchedTask::None,
        };

        match role {
            EngineRole::Mapper => {
                let Some(task) = state.map_queue.pop() else {
                    return DispatchedTask::None;
                };
                if state.registry.try_charge(engine_id) {
                    state.log.push(
                        iso,
                        format!(
                            "map task assigned (job={}, shard={}) to {engine_id}",
                            task.job_id, task.shard_id
                        ),
                    );
                    DispatchedTask::Map(task)
                } else {
                    state.map_queue.push_front(task);
                    DispatchedTask::None
                }
            }
            EngineRole::Reducer => {
                let Some(task) = state.reduce_queue.pop() else {
                    return DispatchedTask::None;
                };
                if state.registry.try_charge(engine_id) {
                    state.log.push(
                        iso,
                        format!(
                            "reduce task assigned (job={}, word={}) to {engine_id}",
                            task.job_id, task.word
                        ),
                    );
                    DispatchedTask::Reduce(task)
                } else {
                    state.reduce_queue.push_front(task);
                    DispatchedTask::None
                }
            }
        }
    }

    // ---- ReportResult ----------------------------------------

    pub fn report_map_result(
        &self,
        engine_id: &EngineId,
        job_id: &str,
        shard_id: u32,
        outputs: Vec<MapOutput>,
    ) -> Result<(), JobStoreError> {
        let iso = self.clock.now().to_rfc3339();
        let mut state = self.state.lock();
        state.registry.discharge(engine_id);

        let outcome = state.jobs.record_map_result(&JobId::new(job_id), outputs, iso.clone())?;
        state.log.push(
            iso.clone(),
            format!("map result received from {engine_id} (job={job_id}, shard={shard_id})"),
        );
        match outcome {
            MapResultOutcome::StillMapping => {}
            MapResultOutcome::MovedToReduce(seed) => {
                let count = seed.tasks.len();
                for task in seed.tasks {
                    state.reduce_queue.push(task);
                }
                state
                    .log
                    .push(iso, format!("job {job_id} moved to REDUCE with {count} tasks"));
            }
            MapResultOutcome::CompletedWithNoWords => {
                state
                    .log
                    .push(iso, format!("job {job_id} COMPLETED with 0 unique words"));
            }
        }
        Ok(())
    }

    pub fn report_reduce_result(
        &self,
        engine_id: &EngineId,
        job_id: &str,
        word: String,
        total: u64,
    ) -> Result<(), JobStoreError> {
        let iso = self.clock.now().to_rfc3339();
        let mut state = self.state.lock();
        state.registry.discharge(engine_id);

        let word_for_log = word.clone();
        let done = state
            .jobs
            .record_reduce_result(&JobId::new(job_id), word, total, iso.clone())?;
        state.log.push(
            iso.clone(),
            format!("reduce result received from {engine_id} (job={job_id}, word={word_for_log}, count={total})"),
        );
        if done {
            let unique = state.jobs.get(&JobId::new(job_id)).map(|j| j.reduce_results.len()).unwrap_or(0);
            state
                .log
                .push(iso, format!("job {job_id} COMPLETED with {unique} unique words"));
        }
        Ok(())
    }

    // ---- liveness sweep --------------------------------------

    pub fn sweep(&self) {
        let now = self.clock.now_secs();
        let iso = self.clock.now().to_rfc3339();
        let mut state = self.state.lock();
        let evicted = state.registry.sweep(now, self.dead_threshold_secs);
        for id in evicted {
            state.log.push(iso.clone(), format!("engine {id} evicted (unseen > {}s)", self.dead_threshold_secs));
        }
    }

    pub fn engine_status(&self, record: &EngineRecord) -> EngineStatus {
        if self.clock.now_secs() - record.last_seen < 10 {
            EngineStatus::Active
        } else {
            EngineStatus::Idle
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
