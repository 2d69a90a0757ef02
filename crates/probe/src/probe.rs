use anyhow::{Context, Result};
use dgram_net::send_once;
use tracing::info;

use crate::config::ProbeConfig;

/// Sends the single probe datagram described by `config`.
///
/// Success means the local network stack accepted the datagram. UDP carries
/// no delivery signal, so a destination port with no listener is
/// indistinguishable from a delivered probe.
pub(crate) async fn run(config: ProbeConfig) -> Result<()> {
    let target = config.target();
    send_once(target, config.payload())
        .await
        .with_context(|| format!("Failed to send a probe datagram to {target}"))?;
    info!("Datagram handed to the network stack.");
    Ok(())
}
