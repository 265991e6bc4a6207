// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use mrwc_core::{BalancingStrategy, JobStatus};

#[test]
fn job_response_carries_done_status_and_duration() {
    let mut record = JobRecord::new("a".into(), BalancingStrategy::RoundRobin, 1, "2026-01-01T00:00:00+00:00".into());
    record.status = JobStatus::Done;
    record.completed_at = Some("2026-01-01T00:00:05+00:00".into());
    record.top_words = Some(vec![]);

    let resp = JobResponse::from_record(&JobId::new("job-1"), &record);
    assert_eq!(resp.status, "done");
    assert_eq!(resp.duration_seconds, Some(5.0));
}

#[test]
fn job_response_has_no_duration_while_in_progress() {
    let record = JobRecord::new("a".into(), BalancingStrategy::RoundRobin, 1, "2026-01-01T00:00:00+00:00".into());
    let resp = JobResponse::from_record(&JobId::new("job-1"), &record);
    assert_eq!(resp.status, "map");
    assert!(resp.duration_seconds.is_none());
    assert!(resp.top_words.is_none());
}
