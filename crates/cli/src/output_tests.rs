// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use mrwc_core::WordCount;

use super::*;

fn sample_job() -> JobResponse {
    JobResponse {
        job_id: "abc123".into(),
        status: "done".into(),
        text_length: 30,
        num_shards: 1,
        top_words: Some(vec![WordCount { word: "alpha".into(), count: 2 }]),
        created_at: "2026-01-01T00:00:00Z".into(),
        completed_at: Some("2026-01-01T00:00:01Z".into()),
        duration_seconds: Some(1.0),
    }
}

#[test]
fn top_words_cell_formats_none_empty_and_present() {
    assert_eq!(top_words_cell(&None), "-");
    assert_eq!(top_words_cell(&Some(vec![])), "(empty)");
    assert_eq!(top_words_cell(&Some(vec![WordCount { word: "a".into(), count: 3 }])), "a:3");
}

#[test]
fn print_job_text_does_not_panic() {
    print_job(&sample_job(), OutputFormat::Text);
    print_job(&sample_job(), OutputFormat::Json);
}

#[test]
fn print_jobs_handles_empty_list() {
    print_jobs(&[], OutputFormat::Text);
    print_jobs(&[sample_job()], OutputFormat::Text);
}
