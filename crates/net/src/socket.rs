use std::{
    io,
    net::{IpAddr, Ipv4Addr},
};

use async_std::net::{SocketAddr, UdpSocket};
use thiserror::Error;

/// Maximum size of a UDP datagram which might be sent or received by this
/// crate.
///
/// This equals the receive buffer size of the test service the probe was
/// written against. Larger payloads are refused before they reach the
/// network stack.
pub const MAX_DATAGRAM_SIZE: usize = 4096;

/// This struct represents a low level network socket. The socket is based on
/// UDP and thus provides unreliable and unordered means of data delivery.
pub struct Socket {
    socket: UdpSocket,
    port: u16,
}

impl Socket {
    /// Creates / binds a new IPv4 based socket on the unspecified address.
    ///
    /// # Arguments
    ///
    /// * `port` - if None, system assigned port is used.
    pub async fn bind(port: Option<u16>) -> io::Result<Self> {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port.unwrap_or(0));
        let socket = UdpSocket::bind(addr).await?;

        let obtained_port = socket.local_addr().map(|addr| addr.port())?;
        if let Some(desired_port) = port {
            assert_eq!(obtained_port, desired_port);
        }

        Ok(Self {
            socket,
            port: obtained_port,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Receive a single datagram.
    ///
    /// The returned data are guaranteed to be at most [`MAX_DATAGRAM_SIZE`]
    /// bytes long.
    ///
    /// # Panics
    ///
    /// Panics if len of `buf` is smaller than [`MAX_DATAGRAM_SIZE`].
    pub async fn recv(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr), RecvError> {
        assert!(buf.len() >= MAX_DATAGRAM_SIZE);

        self.socket
            .recv_from(buf)
            .await
            .map(|(len, source)| (len.min(MAX_DATAGRAM_SIZE), source))
            .map_err(RecvError::from)
    }

    /// Send data to a single target.
    ///
    /// Success means that the whole datagram was accepted by the local
    /// network stack. UDP gives no signal about delivery to the peer.
    pub async fn send(&self, target: SocketAddr, data: &[u8]) -> Result<(), SendError> {
        if data.len() > MAX_DATAGRAM_SIZE {
            return Err(SendError::TooLarge(data.len()));
        }

        let n = self
            .socket
            .send_to(data, target)
            .await
            .map_err(SendError::from)?;

        if n < data.len() {
            Err(SendError::PartialSend(n, data.len()))
        } else {
            Ok(())
        }
    }
}

#[derive(Error, Debug)]
pub enum RecvError {
    #[error("an IO error occurred")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("an IO error occurred")]
    Io(#[from] io::Error),
    #[error("datagram of {0} bytes exceeds the {MAX_DATAGRAM_SIZE} byte limit")]
    TooLarge(usize),
    #[error("only {0} of {1} bytes sent")]
    PartialSend(usize, usize),
}

#[cfg(test)]
mod tests {
    use async_std::task;

    use super::*;

    fn loopback(port: u16) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port)
    }

    #[test]
    fn test_round_trip() {
        task::block_on(async {
            let receiver = Socket::bind(None).await.unwrap();
            let sender = Socket::bind(None).await.unwrap();

            sender
                .send(loopback(receiver.port()), b"a few bytes")
                .await
                .unwrap();

            let mut buf = [0u8; MAX_DATAGRAM_SIZE];
            let (n, source) = receiver.recv(&mut buf).await.unwrap();
            assert_eq!(&buf[..n], b"a few bytes");
            assert_eq!(source.port(), sender.port());
        });
    }

    #[test]
    fn test_zero_length_datagram() {
        task::block_on(async {
            let receiver = Socket::bind(None).await.unwrap();
            let sender = Socket::bind(None).await.unwrap();

            sender.send(loopback(receiver.port()), &[]).await.unwrap();

            let mut buf = [0u8; MAX_DATAGRAM_SIZE];
            let (n, _) = receiver.recv(&mut buf).await.unwrap();
            assert_eq!(n, 0);
        });
    }

    #[test]
    fn test_too_large() {
        task::block_on(async {
            let sender = Socket::bind(None).await.unwrap();
            let data = vec![0u8; MAX_DATAGRAM_SIZE + 1];

            let result = sender.send(loopback(6968), &data).await;
            assert!(matches!(
                result,
                Err(SendError::TooLarge(n)) if n == MAX_DATAGRAM_SIZE + 1
            ));
        });
    }
}
