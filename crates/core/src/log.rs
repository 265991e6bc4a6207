// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Activity log entry.

use serde::{Deserialize, Serialize};

/// One line in the bounded activity log ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
}

/// Capacity of the activity log ring.
pub const LOG_CAPACITY: usize = 200;

/// Number of entries returned by the operator `/logs` endpoint.
pub const LOG_TAIL: usize = 50;
