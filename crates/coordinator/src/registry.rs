// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker directory.

use indexmap::IndexMap;
use mrwc_core::{EngineId, EngineRecord, EngineRole};

/// `engine_id → EngineRecord`. Owned exclusively by [`crate::state::CoordinatorState`].
#[derive(Debug, Default)]
pub struct Registry {
    engines: IndexMap<EngineId, EngineRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally stores/overwrites the worker entry with zeroed load.
    /// Re-registration with the same `engine_id` resets load to zero.
    pub fn register(&mut self, engine_id: EngineId, role: EngineRole, capacity: u32, now: i64) {
        self.engines
            .insert(engine_id, EngineRecord::new(role, capacity, now));
    }

    /// Sets `last_seen = now` on any RPC from a known worker. No-op if unknown.
    pub fn touch(&mut self, engine_id: &EngineId, now: i64) {
        if let Some(record) = self.engines.get_mut(engine_id) {
            record.last_seen = now;
        }
    }

    pub fn get(&self, engine_id: &EngineId) -> Option<&EngineRecord> {
        self.engines.get(engine_id)
    }

    /// If known and under capacity, increments load and returns true.
    pub fn try_charge(&mut self, engine_id: &EngineId) -> bool {
        self.engines
            .get_mut(engine_id)
            .map(|record| record.try_charge())
            .unwrap_or(false)
    }

    /// Decrements load, clamped at zero. No-op if unknown.
    pub fn discharge(&mut self, engine_id: &EngineId) {
        if let Some(record) = self.engines.get_mut(engine_id) {
            record.discharge();
        }
    }

    /// Removes every worker unseen for longer than `dead_threshold_secs`.
    /// Returns the removed IDs for logging.
    pub fn sweep(&mut self, now: i64, dead_threshold_secs: i64) -> Vec<EngineId> {
        let dead: Vec<EngineId> = self
            .engines
            .iter()
            .filter(|(_, record)| record.is_dead(now, dead_threshold_secs))
            .map(|(id, _)| id.clone())
            .collect();
        for id in &dead {
            self.engines.shift_remove(id);
        }
        dead
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EngineId, &EngineRecord)> {
        self.engines.iter()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
