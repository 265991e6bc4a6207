// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use axum::response::IntoResponse;

#[test]
fn job_not_found_maps_to_404() {
    let resp = HttpApiError::JobNotFound.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[test]
fn internal_error_maps_to_500() {
    let resp = HttpApiError::Internal("boom".into()).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn jobstore_not_found_converts_into_http_api_error() {
    let err: HttpApiError = JobStoreError::NotFound.into();
    assert!(matches!(err, HttpApiError::JobNotFound));
}
