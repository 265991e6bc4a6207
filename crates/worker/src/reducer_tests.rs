// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use mrwc_core::test_support::reduce_task;

#[test]
fn sums_counts_from_every_shard() {
    let task = reduce_task("j", "hello", vec![2, 3, 1]);
    assert_eq!(process(&task), 6);
}

#[test]
fn single_shard_count_passes_through() {
    let task = reduce_task("j", "hello", vec![5]);
    assert_eq!(process(&task), 5);
}
