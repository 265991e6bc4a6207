// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use mrwc_core::{EngineId, FakeClock, UuidIdGen};
use mrwc_storage::NullSink;

fn coordinator() -> Coordinator<FakeClock> {
    Coordinator::new(FakeClock::new(1_000), Arc::new(UuidIdGen), Arc::new(NullSink), 15)
}

#[test]
fn create_job_shards_and_enqueues_map_tasks() {
    let co = coordinator();
    let created = co.create_job("a b c d".repeat(50), BalancingStrategy::RoundRobin);
    assert!(created.num_shards >= 1);
    let state = co.state.lock();
    assert_eq!(state.jobs.len(), 1);
    assert_eq!(state.map_queue.len() as u32, created.num_shards);
}

#[test]
fn create_job_with_empty_text_produces_zero_shards_and_no_queue_entries() {
    let co = coordinator();
    let created = co.create_job(String::new(), BalancingStrategy::RoundRobin);
    assert_eq!(created.num_shards, 0);
    let state = co.state.lock();
    assert!(state.map_queue.is_empty());
    let job = state.jobs.get(&JobId::new(created.job_id)).unwrap();
    assert_eq!(job.status, mrwc_core::JobStatus::Done);
}

#[test]
fn fetch_job_respects_role_and_capacity() {
    let co = coordinator();
    // 250 words shards into two 100-word shards + a 50-word tail.
    let created = co.create_job("word ".repeat(250), BalancingStrategy::RoundRobin);
    assert_eq!(created.num_shards, 3);
    let mapper = EngineId::new("mapper-1");
    co.register_engine(mapper.clone(), EngineRole::Mapper, 1);

    match co.fetch_job(&mapper) {
        DispatchedTask::Map(task) => assert_eq!(task.job_id, created.job_id),
        _ => panic!("expected a map task"),
    }

    // capacity exhausted: a second fetch before discharge must return None,
    // and the popped task must have been pushed back to the head of the
    // queue.
    assert!(matches!(co.fetch_job(&mapper), DispatchedTask::None));
    assert_eq!(co.state.lock().map_queue.len(), 2);
}

#[test]
fn reducer_cannot_fetch_map_tasks() {
    let co = coordinator();
    co.create_job("word word".into(), BalancingStrategy::RoundRobin);
    let reducer = EngineId::new("reducer-1");
    co.register_engine(reducer.clone(), EngineRole::Reducer, 4);
    assert!(matches!(co.fetch_job(&reducer), DispatchedTask::None));
}

#[test]
fn full_pipeline_reaches_done_via_report_calls() {
    let co = coordinator();
    let created = co.create_job("hello hello world".into(), BalancingStrategy::RoundRobin);
    let mapper = EngineId::new("mapper-1");
    co.register_engine(mapper.clone(), EngineRole::Mapper, 4);

    let task = match co.fetch_job(&mapper) {
        DispatchedTask::Map(t) => t,
        _ => panic!("expected map task"),
    };
    co.report_map_result(
        &mapper,
        &task.job_id,
        task.shard_id,
        vec![
            MapOutput { word: "hello".into(), count: 2 },
            MapOutput { word: "world".into(), count: 1 },
        ],
    )
    .unwrap();

    assert_eq!(co.state.lock().reduce_queue.len(), 2);

    let reducer = EngineId::new("reducer-1");
    co.register_engine(reducer.clone(), EngineRole::Reducer, 4);
    while let DispatchedTask::Reduce(rt) = co.fetch_job(&reducer) {
        let total: u64 = rt.counts.iter().sum();
        co.report_reduce_result(&reducer, &rt.job_id, rt.word, total).unwrap();
    }

    let state = co.state.lock();
    let job = state.jobs.get(&JobId::new(created.job_id)).unwrap();
    assert_eq!(job.status, mrwc_core::JobStatus::Done);
    assert_eq!(job.top_words.as_ref().unwrap()[0].word, "hello");
}

#[test]
fn sweep_evicts_unseen_engines_and_logs_it() {
    let clock = FakeClock::new(0);
    let co = Coordinator::new(clock.clone(), Arc::new(UuidIdGen), Arc::new(NullSink), 15);
    co.register_engine(EngineId::new("stale"), EngineRole::Mapper, 1);
    clock.advance(20);
    co.sweep();
    assert!(co.state.lock().registry.is_empty());
    let messages: Vec<String> = co.state.lock().log.tail().into_iter().map(|e| e.message).collect();
    assert!(messages.iter().any(|m| m.contains("evicted")));
}
