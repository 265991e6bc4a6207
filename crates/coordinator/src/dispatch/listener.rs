// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TCP accept loop for the dispatch protocol — one connection per RPC call,
//! matching the original's stateless unary calls.

use std::sync::Arc;

use mrwc_core::{Clock, EngineId};
use tokio::net::{TcpListener, TcpStream};

use crate::state::{Coordinator, DispatchedTask};

use super::protocol::{DispatchTaskPayload, Request, Response};
use super::wire::{read_request, write_response};

pub async fn serve<C: Clock>(listener: TcpListener, coordinator: Arc<Coordinator<C>>) -> std::io::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move {
            if let Err(err) = handle_connection(stream, &coordinator).await {
                tracing::debug!(%peer, error = %err, "dispatch connection ended");
            }
        });
    }
}

async fn handle_connection<C: Clock>(
    mut stream: TcpStream,
    coordinator: &Coordinator<C>,
) -> Result<(), super::protocol::ProtocolError> {
    let request = read_request(&mut stream).await?;
    let response = handle_request(coordinator, request);
    write_response(&mut stream, &response).await
}

fn handle_request<C: Clock>(coordinator: &Coordinator<C>, request: Request) -> Response {
    match request {
        Request::RegisterEngine { engine_id, role, capacity } => {
            coordinator.register_engine(EngineId::new(engine_id), role, capacity);
            Response::Registered
        }
        Request::FetchJob { engine_id } => {
            let task = coordinator.fetch_job(&EngineId::new(engine_id));
            let payload = match task {
                DispatchedTask::Map(t) => DispatchTaskPayload::Map(t),
                DispatchedTask::Reduce(t) => DispatchTaskPayload::Reduce(t),
                DispatchedTask::None => DispatchTaskPayload::None,
            };
            Response::Task(payload)
        }
        Request::ReportMapResult { engine_id, job_id, shard_id, outputs } => {
            match coordinator.report_map_result(&EngineId::new(engine_id), &job_id, shard_id, outputs) {
                Ok(()) => Response::ResultAck,
                Err(err) => Response::Error { message: err.to_string() },
            }
        }
        Request::ReportReduceResult { engine_id, job_id, word, total } => {
            match coordinator.report_reduce_result(&EngineId::new(engine_id), &job_id, word, total) {
                Ok(()) => Response::ResultAck,
                Err(err) => Response::Error { message: err.to_string() },
            }
        }
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
