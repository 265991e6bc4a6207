// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker (engine) registry record.

use serde::{Deserialize, Serialize};

use crate::status::EngineRole;

/// A registered engine worker: `engine_id → {role, capacity, current_load, last_seen}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineRecord {
    pub role: EngineRole,
    pub capacity: u32,
    pub current_load: u32,
    /// Unix seconds of the most recent RPC from this worker.
    pub last_seen: i64,
}

impl EngineRecord {
    pub fn new(role: EngineRole, capacity: u32, now: i64) -> Self {
        Self {
            role,
            capacity,
            current_load: 0,
            last_seen: now,
        }
    }

    pub fn has_capacity(&self) -> bool {
        self.current_load < self.capacity
    }

    /// Increments load if capacity allows; returns whether it charged.
    pub fn try_charge(&mut self) -> bool {
        if self.has_capacity() {
            self.current_load += 1;
            true
        } else {
            false
        }
    }

    /// Decrements load, clamped at zero.
    pub fn discharge(&mut self) {
        self.current_load = self.current_load.saturating_sub(1);
    }

    pub fn is_dead(&self, now: i64, dead_threshold_secs: i64) -> bool {
        now - self.last_seen > dead_threshold_secs
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
