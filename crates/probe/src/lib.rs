use async_std::task;

pub use crate::config::{ConfigError, ProbeConfig, DEFAULT_PORT};

mod config;
mod listener;
mod probe;

/// What the process was asked to do.
pub enum Mode {
    /// Send a single probe datagram and exit.
    Send(ProbeConfig),
    /// Receive datagrams on the port and report them until killed.
    Listen { port: u16 },
}

/// Runs the tool to completion on a single async task.
pub fn start(mode: Mode) -> anyhow::Result<()> {
    task::block_on(task::spawn(async move {
        match mode {
            Mode::Send(config) => probe::run(config).await,
            Mode::Listen { port } => listener::run(port).await,
        }
    }))
}
