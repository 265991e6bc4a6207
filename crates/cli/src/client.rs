// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin `reqwest` client for the coordinator's operator HTTP surface.

use mrwc_coordinator::http::dto::{CreateJobRequest, EngineInfo, JobResponse, LogEntryResponse, StatsResponse};
use mrwc_core::BalancingStrategy;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to coordinator failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("coordinator returned an error: {0}")]
    Api(String),

    #[error("failed to read job text from {path}: {source}")]
    ReadFile { path: std::path::PathBuf, source: std::io::Error },
}

pub struct CoordinatorClient {
    base_url: String,
    http: reqwest::Client,
}

impl CoordinatorClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url, http: reqwest::Client::new() }
    }

    pub async fn submit_job(&self, text: String, balancing_strategy: BalancingStrategy) -> Result<JobResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/jobs", self.base_url))
            .json(&CreateJobRequest { text, balancing_strategy })
            .send()
            .await?;
        parse(resp).await
    }

    pub async fn list_jobs(&self) -> Result<Vec<JobResponse>, ClientError> {
        let resp = self.http.get(format!("{}/api/jobs", self.base_url)).send().await?;
        parse(resp).await
    }

    pub async fn get_job(&self, job_id: &str) -> Result<JobResponse, ClientError> {
        let resp = self.http.get(format!("{}/api/jobs/{job_id}", self.base_url)).send().await?;
        parse(resp).await
    }

    pub async fn list_engines(&self) -> Result<Vec<EngineInfo>, ClientError> {
        let resp = self.http.get(format!("{}/api/engines", self.base_url)).send().await?;
        parse(resp).await
    }

    pub async fn list_logs(&self) -> Result<Vec<LogEntryResponse>, ClientError> {
        let resp = self.http.get(format!("{}/api/logs", self.base_url)).send().await?;
        parse(resp).await
    }

    pub async fn stats(&self) -> Result<StatsResponse, ClientError> {
        let resp = self.http.get(format!("{}/api/stats", self.base_url)).send().await?;
        parse(resp).await
    }
}

async fn parse<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api(format!("{status}: {body}")));
    }
    resp.json::<T>().await.map_err(ClientError::Request)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
