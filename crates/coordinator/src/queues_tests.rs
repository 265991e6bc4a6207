// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use mrwc_core::test_support::map_task;

fn task(shard_id: u32) -> MapTask {
    map_task("job-1", shard_id, "")
}

#[test]
fn map_queue_is_strict_fifo() {
    let mut q = MapQueue::new();
    q.push(task(0));
    q.push(task(1));
    assert_eq!(q.pop().unwrap().shard_id, 0);
    assert_eq!(q.pop().unwrap().shard_id, 1);
    assert!(q.pop().is_none());
}

#[test]
fn map_queue_push_front_reprioritizes_to_head() {
    let mut q = MapQueue::new();
    q.push(task(0));
    q.push_front(task(99));
    assert_eq!(q.pop().unwrap().shard_id, 99);
}

#[test]
fn empty_queue_returns_none() {
    let mut q = ReduceQueue::new();
    assert!(q.is_empty());
    assert!(q.pop().is_none());
}
