// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use mrwc_core::test_support::{job_record, map_output};
use proptest::prelude::*;

fn new_job(store: &mut JobStore, id: &str, num_shards: u32) {
    let record = job_record("hello hello world", num_shards);
    store.insert(JobId::new(id), record);
}

#[test]
fn unknown_job_on_map_result_fails() {
    let mut store = JobStore::new();
    let err = store
        .record_map_result(&JobId::new("ghost"), vec![], "now".into())
        .unwrap_err();
    assert_eq!(err, JobStoreError::NotFound);
}

#[test]
fn single_shard_transitions_to_reduce_with_one_task_per_word() {
    let mut store = JobStore::new();
    new_job(&mut store, "job-1", 1);

    let outcome = store
        .record_map_result(
            &JobId::new("job-1"),
            vec![map_output("hello", 2), map_output("world", 1)],
            "now".into(),
        )
        .unwrap();

    let job = store.get(&JobId::new("job-1")).unwrap();
    assert_eq!(job.status, JobStatus::Reduce);
    assert_eq!(job.num_reduce_tasks, 2);
    assert_eq!(job.completed_shards, 1);
    let MapResultOutcome::MovedToReduce(seed) = outcome else {
        panic!("expected MovedToReduce, got {outcome:?}");
    };
    assert_eq!(seed.tasks.len(), 2);
}

#[test]
fn map_result_before_last_shard_does_not_transition() {
    let mut store = JobStore::new();
    new_job(&mut store, "job-1", 2);
    let outcome = store
        .record_map_result(&JobId::new("job-1"), vec![map_output("a", 1)], "now".into())
        .unwrap();
    assert!(matches!(outcome, MapResultOutcome::StillMapping));
    assert_eq!(store.get(&JobId::new("job-1")).unwrap().status, JobStatus::Map);
}

#[test]
fn last_shard_with_no_words_completes_the_job_directly() {
    let mut store = JobStore::new();
    new_job(&mut store, "job-1", 1);
    let outcome = store
        .record_map_result(&JobId::new("job-1"), vec![], "t1".into())
        .unwrap();
    assert!(matches!(outcome, MapResultOutcome::CompletedWithNoWords));

    let job = store.get(&JobId::new("job-1")).unwrap();
    assert_eq!(job.status, JobStatus::Done);
    assert_eq!(job.completed_at, Some("t1".into()));
    assert_eq!(job.top_words, Some(Vec::new()));
}

#[test]
fn reduce_result_completes_job_and_computes_top_words() {
    let mut store = JobStore::new();
    new_job(&mut store, "job-1", 1);
    store
        .record_map_result(
            &JobId::new("job-1"),
            vec![map_output("hello", 2), map_output("world", 1)],
            "now".into(),
        )
        .unwrap();

    let done_after_first = store
        .record_reduce_result(&JobId::new("job-1"), "hello".into(), 2, "t1".into())
        .unwrap();
    assert!(!done_after_first);

    let done_after_second = store
        .record_reduce_result(&JobId::new("job-1"), "world".into(), 1, "t2".into())
        .unwrap();
    assert!(done_after_second);

    let job = store.get(&JobId::new("job-1")).unwrap();
    assert_eq!(job.status, JobStatus::Done);
    assert_eq!(job.completed_at, Some("t2".into()));
    let top = job.top_words.as_ref().unwrap();
    assert_eq!(top[0].word, "hello");
    assert_eq!(top[0].count, 2);
    assert_eq!(top[1].word, "world");
}

#[test]
fn reduce_results_equal_sum_of_map_results_mass_conservation() {
    // reduce_results[w] must equal the sum of every partial count mappers reported for w.
    let mut store = JobStore::new();
    new_job(&mut store, "job-1", 2);
    store
        .record_map_result(&JobId::new("job-1"), vec![map_output("a", 3)], "now".into())
        .unwrap();
    let outcome = store
        .record_map_result(&JobId::new("job-1"), vec![map_output("a", 4)], "now".into())
        .unwrap();
    let MapResultOutcome::MovedToReduce(seed) = outcome else {
        panic!("expected MovedToReduce, got {outcome:?}");
    };

    assert_eq!(seed.tasks.len(), 1);
    let total: u64 = seed.tasks[0].counts.iter().sum();
    store
        .record_reduce_result(&JobId::new("job-1"), "a".into(), total, "t".into())
        .unwrap();

    let job = store.get(&JobId::new("job-1")).unwrap();
    assert_eq!(job.reduce_results["a"], 7);
    assert_eq!(job.reduce_results["a"], job.map_results["a"].iter().sum::<u64>());
}

#[test]
fn empty_input_job_is_created_done_with_empty_top_words() {
    let record = job_record("", 0);
    assert!(mrwc_core::tokenize("").is_empty());
    assert_eq!(record.status, JobStatus::Done);
    assert_eq!(record.top_words, Some(Vec::new()));
}

const VOCAB: [&str; 4] = ["alpha", "bravo", "charlie", "delta"];

/// One shard's worth of reported `(word, count)` outputs, drawn from a small
/// fixed vocabulary so words collide across shards.
fn shard_outputs() -> impl Strategy<Value = Vec<MapOutput>> {
    proptest::collection::vec((0..VOCAB.len(), 1u64..10), 0..VOCAB.len()).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(i, count)| map_output(VOCAB[i], count))
            .collect()
    })
}

proptest! {
    /// `completed_shards <= num_shards` and `completed_reduce_tasks <=
    /// num_reduce_tasks` hold after every report, and once DONE the total
    /// count reduced for each word equals the sum of every partial count
    /// mappers reported for that word (no mass lost or gained in transit).
    #[test]
    fn shard_and_reduce_counters_stay_in_bounds_and_mass_is_conserved(
        shards in proptest::collection::vec(shard_outputs(), 1..8),
    ) {
        let num_shards = shards.len() as u32;
        let mut store = JobStore::new();
        new_job(&mut store, "job-1", num_shards);

        let mut last_outcome = MapResultOutcome::StillMapping;
        for outputs in shards {
            last_outcome = store.record_map_result(&JobId::new("job-1"), outputs, "t".into()).unwrap();
            let job = store.get(&JobId::new("job-1")).unwrap();
            prop_assert!(job.completed_shards <= job.num_shards);
        }

        let job = store.get(&JobId::new("job-1")).unwrap();
        let expected_totals: std::collections::HashMap<String, u64> = job
            .map_results
            .iter()
            .map(|(word, counts)| (word.clone(), counts.iter().sum()))
            .collect();

        if let MapResultOutcome::MovedToReduce(seed) = last_outcome {
            for task in &seed.tasks {
                store
                    .record_reduce_result(&JobId::new("job-1"), task.word.clone(), task.counts.iter().sum(), "t".into())
                    .unwrap();
                let job = store.get(&JobId::new("job-1")).unwrap();
                prop_assert!(job.completed_reduce_tasks <= job.num_reduce_tasks);
            }
        }

        let job = store.get(&JobId::new("job-1")).unwrap();
        prop_assert_eq!(job.status, JobStatus::Done);
        for (word, total) in &expected_totals {
            prop_assert_eq!(job.reduce_results.get(word), Some(total));
        }
    }
}
