// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire framing: 4-byte big-endian length prefix + JSON payload, adapted from
//! the teacher's Unix-socket protocol onto `tokio::net::TcpStream`.

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::protocol::{ProtocolError, Request, Response, MAX_MESSAGE_SIZE, REQUEST_TIMEOUT};

async fn read_message<R: AsyncReadExt + Unpin>(reader: &mut R) -> Result<Vec<u8>, ProtocolError> {
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            return Err(ProtocolError::ConnectionClosed);
        }
        Err(e) => return Err(ProtocolError::Io(e)),
    }
    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge { size: len, max: MAX_MESSAGE_SIZE });
    }
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).await?;
    Ok(buf)
}

async fn write_message<W: AsyncWriteExt + Unpin>(writer: &mut W, data: &[u8]) -> Result<(), ProtocolError> {
    if data.len() > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge { size: data.len(), max: MAX_MESSAGE_SIZE });
    }
    writer.write_all(&(data.len() as u32).to_be_bytes()).await?;
    writer.write_all(data).await?;
    writer.flush().await?;
    Ok(())
}

pub async fn read_request<R: AsyncReadExt + Unpin>(reader: &mut R) -> Result<Request, ProtocolError> {
    let bytes = tokio::time::timeout(REQUEST_TIMEOUT, read_message(reader))
        .await
        .map_err(|_| ProtocolError::Timeout)??;
    Ok(serde_json::from_slice(&bytes)?)
}

pub async fn write_response<W: AsyncWriteExt + Unpin>(writer: &mut W, response: &Response) -> Result<(), ProtocolError> {
    let data = serde_json::to_vec(response)?;
    tokio::time::timeout(REQUEST_TIMEOUT, write_message(writer, &data))
        .await
        .map_err(|_| ProtocolError::Timeout)?
}

pub async fn write_request<W: AsyncWriteExt + Unpin>(writer: &mut W, request: &Request) -> Result<(), ProtocolError> {
    let data = serde_json::to_vec(request)?;
    tokio::time::timeout(REQUEST_TIMEOUT, write_message(writer, &data))
        .await
        .map_err(|_| ProtocolError::Timeout)?
}

pub async fn read_response<R: AsyncReadExt + Unpin>(reader: &mut R) -> Result<Response, ProtocolError> {
    let bytes = tokio::time::timeout(REQUEST_TIMEOUT, read_message(reader))
        .await
        .map_err(|_| ProtocolError::Timeout)??;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
