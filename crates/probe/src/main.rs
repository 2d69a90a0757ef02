use clap::{Parser, Subcommand};
use dgram_probe_lib::{start, Mode, ProbeConfig, DEFAULT_PORT};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Send a single probe datagram and exit. This is the default command.
    Send {
        /// IPv4 numeric literal of the destination host.
        #[clap(short, long)]
        address: Option<String>,
        /// Destination UDP port.
        #[clap(short, long)]
        port: Option<u16>,
        /// Payload to transmit.
        #[clap(short, long)]
        message: Option<String>,
    },
    /// Receive datagrams and report them until killed.
    Listen {
        /// UDP port to bind.
        #[clap(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let mode = match Args::parse().command {
        Some(Command::Send {
            address,
            port,
            message,
        }) => Mode::Send(ProbeConfig::new(
            address.as_deref(),
            port,
            message.as_deref(),
        )?),
        Some(Command::Listen { port }) => Mode::Listen { port },
        None => Mode::Send(ProbeConfig::default()),
    };

    let result = start(mode);
    if let Err(error) = result.as_ref() {
        error!("{error:#}");
    }
    result
}
