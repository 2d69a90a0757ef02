use std::{net::UdpSocket, thread::sleep, time::Duration};

use ntest::timeout;

use crate::common::{spawn_and_wait, term_and_wait};

mod common;

#[test]
#[timeout(10_000)]
fn test_listen_reports_datagrams() {
    let child = spawn_and_wait(&["listen", "--port", "16968"]);

    let client = UdpSocket::bind("127.0.0.1:0").unwrap();
    client.send_to(b"test c\n", "127.0.0.1:16968").unwrap();
    client.send_to(b"second datagram", "127.0.0.1:16968").unwrap();
    sleep(Duration::from_millis(500));

    let output = term_and_wait(child);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Listening on port 16968"),
        "unexpected stdout: {stdout}"
    );
    assert!(stdout.contains("Received 7 bytes"));
    assert!(stdout.contains("test c"));
    assert!(stdout.contains("second datagram"));
}
