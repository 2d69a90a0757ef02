//! Final (i.e. parsed and validated) probe configuration and its building
//! from command line overrides.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use thiserror::Error;

/// Host which runs the receiving test service.
const DEFAULT_ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 168, 2, 6);
/// Port the receiving test service listens on.
pub const DEFAULT_PORT: u16 = 6968;
/// Payload the receiving test service matches on, byte for byte.
const DEFAULT_MESSAGE: &str = "test c\n";

/// Destination and payload of a single probe datagram.
///
/// A no-override configuration sends `"test c\n"` to `192.168.2.6:6968`,
/// the fixed values the receiving test service expects.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    address: Ipv4Addr,
    port: u16,
    payload: Vec<u8>,
}

impl ProbeConfig {
    /// Builds the configuration from optional command line overrides.
    /// Values which are not overridden keep their defaults.
    ///
    /// The address must be an IPv4 numeric literal. Host names are
    /// deliberately not resolved: a non-numeric address is a fatal
    /// configuration error, not a retryable condition.
    pub fn new(
        address: Option<&str>,
        port: Option<u16>,
        message: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let address = match address {
            Some(literal) => Ipv4Addr::from_str(literal)
                .map_err(|_| ConfigError::Address(literal.to_owned()))?,
            None => DEFAULT_ADDRESS,
        };

        Ok(Self {
            address,
            port: port.unwrap_or(DEFAULT_PORT),
            payload: message
                .map_or(DEFAULT_MESSAGE, |message| message)
                .as_bytes()
                .to_vec(),
        })
    }

    /// The destination of the probe datagram in socket address form.
    pub fn target(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(self.address), self.port)
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            port: DEFAULT_PORT,
            payload: DEFAULT_MESSAGE.as_bytes().to_vec(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("`{0}` is not an IPv4 numeric literal")]
    Address(String),
}
