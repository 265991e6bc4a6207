// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Axum router for the operator HTTP/JSON surface.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use mrwc_core::{BalancingStrategy, Clock, EngineRole, JobId};
use tower_http::cors::CorsLayer;

use crate::state::Coordinator;

use super::dto::{CreateJobRequest, EngineInfo, JobResponse, LogEntryResponse, StatsResponse};
use super::error::HttpApiError;

/// Builds the `/api`-prefixed router with CORS applied per
/// `MRWC_CORS_ORIGINS`.
pub fn build_router<C: Clock>(coordinator: Arc<Coordinator<C>>, cors_origins: &[String]) -> Router {
    let cors = build_cors(cors_origins);
    Router::new()
        .route("/api/jobs", post(create_job::<C>).get(list_jobs::<C>))
        .route("/api/jobs/upload", post(upload_job::<C>))
        .route("/api/jobs/:job_id", get(get_job::<C>))
        .route("/api/engines", get(list_engines::<C>))
        .route("/api/logs", get(list_logs::<C>))
        .route("/api/stats", get(stats::<C>))
        .layer(cors)
        .with_state(coordinator)
}

fn build_cors(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::permissive()
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_credentials(true)
            .allow_methods(tower_http::cors::Any)
    }
}

async fn create_job<C: Clock>(
    State(coordinator): State<Arc<Coordinator<C>>>,
    Json(body): Json<CreateJobRequest>,
) -> Json<JobResponse> {
    let created = coordinator.create_job(body.text, body.balancing_strategy);
    Json(JobResponse::from_created(&created))
}

async fn upload_job<C: Clock>(
    State(coordinator): State<Arc<Coordinator<C>>>,
    mut multipart: Multipart,
) -> Result<Json<JobResponse>, HttpApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpApiError::BadUpload(e.to_string()))?
    {
        if field.name() == Some("file") {
            let bytes = field.bytes().await.map_err(|e| HttpApiError::BadUpload(e.to_string()))?;
            let text = String::from_utf8(bytes.to_vec()).map_err(|e| HttpApiError::BadUpload(e.to_string()))?;
            let created = coordinator.create_job(text, BalancingStrategy::default());
            return Ok(Json(JobResponse::from_created(&created)));
        }
    }
    Err(HttpApiError::BadUpload("missing \"file\" field".into()))
}

async fn list_jobs<C: Clock>(State(coordinator): State<Arc<Coordinator<C>>>) -> Json<Vec<JobResponse>> {
    let state = coordinator.state.lock();
    let jobs = state
        .jobs
        .iter()
        .map(|(id, record)| JobResponse::from_record(id, record))
        .collect();
    Json(jobs)
}

async fn get_job<C: Clock>(
    State(coordinator): State<Arc<Coordinator<C>>>,
    Path(job_id): Path<String>,
) -> Result<Json<JobResponse>, HttpApiError> {
    let state = coordinator.state.lock();
    let id = JobId::new(job_id);
    let record = state.jobs.get(&id).ok_or(HttpApiError::JobNotFound)?;
    Ok(Json(JobResponse::from_record(&id, record)))
}

async fn list_engines<C: Clock>(State(coordinator): State<Arc<Coordinator<C>>>) -> Json<Vec<EngineInfo>> {
    let state = coordinator.state.lock();
    let engines = state
        .registry
        .iter()
        .map(|(id, record)| {
            let status = coordinator.engine_status(record);
            EngineInfo::from_record(id.as_str(), record, status)
        })
        .collect();
    Json(engines)
}

async fn list_logs<C: Clock>(State(coordinator): State<Arc<Coordinator<C>>>) -> Json<Vec<LogEntryResponse>> {
    let state = coordinator.state.lock();
    let entries = state
        .log
        .tail()
        .into_iter()
        .map(|e| LogEntryResponse { timestamp: e.timestamp, message: e.message })
        .collect();
    Json(entries)
}

async fn stats<C: Clock>(State(coordinator): State<Arc<Coordinator<C>>>) -> Json<StatsResponse> {
    let state = coordinator.state.lock();
    let mappers = state.registry.iter().filter(|(_, r)| r.role == EngineRole::Mapper).count();
    let reducers = state.registry.iter().filter(|(_, r)| r.role == EngineRole::Reducer).count();
    let active_jobs = state
        .jobs
        .iter()
        .filter(|(_, j)| j.status != mrwc_core::JobStatus::Done)
        .count();
    Json(StatsResponse {
        total_engines: state.registry.len(),
        mappers,
        reducers,
        map_queue_size: state.map_queue.len(),
        reduce_queue_size: state.reduce_queue.len(),
        total_jobs: state.jobs.len(),
        active_jobs,
    })
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
