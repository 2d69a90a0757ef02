use std::{
    process::{Child, Command, Output, Stdio},
    thread::sleep,
    time::Duration,
};

use assert_cmd::cargo::CommandCargoExt;
use nix::{
    sys::signal::{kill, Signal},
    unistd::Pid,
};

pub fn spawn_and_wait(args: &[&str]) -> Child {
    let child = Command::cargo_bin("dgram-probe")
        .unwrap()
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    sleep(Duration::from_millis(500));
    child
}

pub fn term_and_wait(child: Child) -> Output {
    let pid = Pid::from_raw(child.id().try_into().unwrap());
    kill(pid, Signal::SIGTERM).unwrap();
    child.wait_with_output().unwrap()
}
