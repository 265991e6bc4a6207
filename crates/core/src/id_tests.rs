// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn engine_id_display_roundtrip() {
    let id = EngineId::new("mapper-1");
    assert_eq!(id.as_str(), "mapper-1");
    assert_eq!(id.to_string(), "mapper-1");
}

#[test]
fn job_id_from_str_and_eq() {
    let id: JobId = "abc-123".into();
    assert_eq!(id, "abc-123");
    assert_eq!(id, *"abc-123".to_string().as_str());
}

#[test]
fn uuid_id_gen_produces_unique_ids() {
    let gen = UuidIdGen;
    let a = gen.next();
    let b = gen.next();
    assert_ne!(a, b);
    assert_eq!(a.len(), 36);
}

#[test]
fn sequential_id_gen_is_deterministic() {
    let gen = SequentialIdGen::new("job");
    assert_eq!(gen.next(), "job-1");
    assert_eq!(gen.next(), "job-2");
}
