// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Liveness sweeper: evicts workers unseen for longer than
//! `dead_threshold_secs`, running on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use mrwc_core::Clock;

use crate::state::Coordinator;

pub async fn run<C: Clock>(coordinator: Arc<Coordinator<C>>, interval_secs: u64) {
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    loop {
        ticker.tick().await;
        coordinator.sweep();
    }
}

#[cfg(test)]
#[path = "sweeper_tests.rs"]
mod tests;
