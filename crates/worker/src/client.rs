// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch-protocol client: one TCP connection per RPC call, matching the
//! coordinator's stateless unary handling.

use mrwc_coordinator::dispatch::{read_response, write_request, ProtocolError, Request, Response};
use tokio::net::TcpStream;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Io(#[from] std::io::Error),
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

pub async fn call(coordinator_addr: &str, request: &Request) -> Result<Response, ClientError> {
    let mut stream = TcpStream::connect(coordinator_addr).await?;
    write_request(&mut stream, request).await?;
    Ok(read_response(&mut stream).await?)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
