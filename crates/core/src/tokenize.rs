// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenization and sharding shared by job creation and the
//! reference mapper worker.
//!
//! Grounded on `original_source/backend/map_reduce/api.py`'s
//! `re.findall(r"\b\w+\b", text.lower())`.

/// Lowercases and extracts maximal runs of `[A-Za-z0-9_]+`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut words = Vec::new();
    let mut current = String::new();
    for ch in lower.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            current.push(ch);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Shard size per step 3: `max(100, floor(W / 4))`.
pub fn shard_size(total_words: usize) -> usize {
    (total_words / 4).max(100)
}

/// Splits tokens into contiguous shards of `shard_size` words, the last
/// possibly shorter, each joined back into a space-separated string.
pub fn shard_tokens(words: &[String]) -> Vec<String> {
    if words.is_empty() {
        return Vec::new();
    }
    let size = shard_size(words.len());
    words.chunks(size).map(|chunk| chunk.join(" ")).collect()
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
