use std::io;

use async_std::net::SocketAddr;
use thiserror::Error;
use tracing::info;

use crate::socket::{SendError, Socket};

/// Sends a single datagram to `target` over a transient UDP socket.
///
/// The socket is bound on a system assigned port just before the
/// transmission and released when this function returns, on success and
/// failure alike. No state is carried between invocations.
///
/// Success means that the local network stack accepted the whole datagram.
/// It carries no information about delivery: a target port with no listener
/// still yields a success.
pub async fn send_once(target: SocketAddr, payload: &[u8]) -> Result<(), SendOnceError> {
    let socket = Socket::bind(None).await.map_err(SendOnceError::Bind)?;
    info!(
        "Sending {} bytes from port {} to {target}...",
        payload.len(),
        socket.port()
    );
    socket.send(target, payload).await?;
    Ok(())
}

#[derive(Error, Debug)]
pub enum SendOnceError {
    #[error("failed to acquire a local UDP socket")]
    Bind(#[source] io::Error),
    #[error("failed to hand the datagram to the network stack")]
    Send(#[from] SendError),
}
