// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Maps coordinator errors onto HTTP statuses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::jobstore::JobStoreError;

#[derive(Debug, Error)]
pub enum HttpApiError {
    #[error("job not found")]
    JobNotFound,
    #[error("invalid multipart upload: {0}")]
    BadUpload(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<JobStoreError> for HttpApiError {
    fn from(err: JobStoreError) -> Self {
        match err {
            JobStoreError::NotFound => HttpApiError::JobNotFound,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for HttpApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            HttpApiError::JobNotFound => StatusCode::NOT_FOUND,
            HttpApiError::BadUpload(_) => StatusCode::BAD_REQUEST,
            HttpApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorBody { message: self.to_string() })).into_response()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
