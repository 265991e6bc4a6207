// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mapper task processing — tokenizes a shard and pre-sums per-word counts
//! within it, grounded on `original_source/backend/engine.py::process_map_task`.

use mrwc_core::{tokenize, MapOutput, MapTask};

/// Counts word occurrences within a single shard. The mapper pre-sums within
/// its shard; the reducer sums the per-shard
/// partials it receives.
pub fn process(task: &MapTask) -> Vec<MapOutput> {
    let words = tokenize(&task.text_content);
    let mut counts: indexmap::IndexMap<String, u64> = indexmap::IndexMap::new();
    for word in words {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts.into_iter().map(|(word, count)| MapOutput { word, count }).collect()
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod tests;
