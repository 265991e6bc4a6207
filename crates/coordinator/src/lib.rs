// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mrwc-coordinator: the central coordinator process — registry, queues,
//! job store, activity log, dispatch protocol, operator HTTP surface, and
//! the liveness sweeper.

pub mod activity_log;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod jobstore;
pub mod queues;
pub mod registry;
pub mod state;
pub mod sweeper;

pub use activity_log::ActivityLog;
pub use jobstore::{JobStore, JobStoreError, ReduceSeed};
pub use queues::{MapQueue, ReduceQueue};
pub use registry::Registry;
pub use state::{Coordinator, CoordinatorState, CreatedJob, DispatchedTask};
