// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-variable configuration, read once at startup.

/// Coordinator runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_addr: String,
    pub http_addr: String,
    pub app_name: String,
    pub persistence_path: Option<String>,
    pub cors_origins: Vec<String>,
    pub dead_threshold_secs: i64,
    pub sweep_interval_secs: u64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Self {
        let cors_origins = env_or("MRWC_CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            rpc_addr: env_or("MRWC_RPC_ADDR", "0.0.0.0:50051"),
            http_addr: env_or("MRWC_HTTP_ADDR", "0.0.0.0:8080"),
            app_name: env_or("MRWC_APP_NAME", "MapReduce"),
            persistence_path: std::env::var("MRWC_PERSISTENCE_PATH").ok(),
            cors_origins,
            dead_threshold_secs: env_or("MRWC_DEAD_THRESHOLD_SECS", "15")
                .parse()
                .unwrap_or(15),
            sweep_interval_secs: env_or("MRWC_SWEEP_INTERVAL_SECS", "5")
                .parse()
                .unwrap_or(5),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_addr: "0.0.0.0:50051".into(),
            http_addr: "0.0.0.0:8080".into(),
            app_name: "MapReduce".into(),
            persistence_path: None,
            cors_origins: vec!["*".into()],
            dead_threshold_secs: 15,
            sweep_interval_secs: 5,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
