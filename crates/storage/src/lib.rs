// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mrwc-storage: the persistence-sink boundary for job-creation summaries.

pub mod sink;

pub use sink::{JobSummary, JobSummarySink, JsonFileSink, NullSink, SinkError};
