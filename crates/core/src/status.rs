// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closed status enums for jobs, workers, and tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A job's position in the MAP → REDUCE → DONE pipeline.
///
/// Closed 3-value enum. The "shuffle" label some source variants carry as a
/// transient value during the MAP→REDUCE transition is not represented here:
/// the transition is a single atomic step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Map,
    Reduce,
    Done,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Map => write!(f, "map"),
            JobStatus::Reduce => write!(f, "reduce"),
            JobStatus::Done => write!(f, "done"),
        }
    }
}

/// The role a registered worker plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineRole {
    Mapper,
    Reducer,
}

impl fmt::Display for EngineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineRole::Mapper => write!(f, "mapper"),
            EngineRole::Reducer => write!(f, "reducer"),
        }
    }
}

/// Liveness classification reported on the operator surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    Active,
    Idle,
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineStatus::Active => write!(f, "active"),
            EngineStatus::Idle => write!(f, "idle"),
        }
    }
}

/// Accepted-but-inert balancing hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BalancingStrategy {
    #[default]
    RoundRobin,
    LeastLoaded,
}

impl fmt::Display for BalancingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalancingStrategy::RoundRobin => write!(f, "round_robin"),
            BalancingStrategy::LeastLoaded => write!(f, "least_loaded"),
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
