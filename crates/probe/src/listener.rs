use anyhow::{Context, Result};
use dgram_net::{Socket, MAX_DATAGRAM_SIZE};
use tracing::info;

/// Runs the diagnostic receiver: binds the port and reports every datagram
/// which arrives, until the process is killed.
pub(crate) async fn run(port: u16) -> Result<()> {
    let socket = Socket::bind(Some(port))
        .await
        .with_context(|| format!("Failed to bind on port {port}"))?;
    info!("Listening on port {}...", socket.port());

    let mut buffer = [0u8; MAX_DATAGRAM_SIZE];
    loop {
        let (n, source) = socket
            .recv(&mut buffer)
            .await
            .context("Datagram receiving failed")?;
        info!(
            "Received {n} bytes from {source}: {:?}",
            String::from_utf8_lossy(&buffer[..n])
        );
    }
}
