// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker-facing dispatch protocol: length-prefixed JSON requests and
//! responses over TCP.

pub mod listener;
pub mod protocol;
pub mod wire;

pub use protocol::{DispatchTaskPayload, ProtocolError, Request, Response};
pub use wire::{read_request, read_response, write_request, write_response};
