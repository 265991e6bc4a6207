// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fetch_job_request_round_trips_through_json() {
    let req = Request::FetchJob { engine_id: "mapper-1".into() };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("\"op\":\"fetch_job\""));
    let back: Request = serde_json::from_str(&json).unwrap();
    match back {
        Request::FetchJob { engine_id } => assert_eq!(engine_id, "mapper-1"),
        _ => panic!("wrong variant"),
    }
}

#[test]
fn none_task_serializes_with_task_type_none() {
    let resp = Response::Task(DispatchTaskPayload::None);
    let json = serde_json::to_string(&resp).unwrap();
    assert!(json.contains("\"task_type\":\"none\""));
}

#[test]
fn register_engine_round_trips() {
    let req = Request::RegisterEngine {
        engine_id: "e1".into(),
        role: mrwc_core::EngineRole::Mapper,
        capacity: 4,
    };
    let json = serde_json::to_string(&req).unwrap();
    let back: Request = serde_json::from_str(&json).unwrap();
    match back {
        Request::RegisterEngine { engine_id, role, capacity } => {
            assert_eq!(engine_id, "e1");
            assert_eq!(role, mrwc_core::EngineRole::Mapper);
            assert_eq!(capacity, 4);
        }
        _ => panic!("wrong variant"),
    }
}
