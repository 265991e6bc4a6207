// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use mrwc_core::test_support::map_task;

#[test]
fn counts_words_case_insensitively_within_a_shard() {
    let task = map_task("j", 0, "Hello hello World");
    let outputs = process(&task);
    let hello = outputs.iter().find(|o| o.word == "hello").unwrap();
    assert_eq!(hello.count, 2);
    let world = outputs.iter().find(|o| o.word == "world").unwrap();
    assert_eq!(world.count, 1);
}

#[test]
fn empty_shard_produces_no_outputs() {
    let task = map_task("j", 0, "");
    assert!(process(&task).is_empty());
}
