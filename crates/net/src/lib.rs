pub use sender::{send_once, SendOnceError};
pub use socket::{RecvError, SendError, Socket, MAX_DATAGRAM_SIZE};

mod sender;
mod socket;
