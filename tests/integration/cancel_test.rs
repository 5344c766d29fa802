//! Ctrl-C inside an interactive selector, driven through a pseudo-terminal

use std::fs::{self, File};
use std::io::{Read, Write};
use std::os::unix::io::{FromRawFd, OwnedFd};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::helpers::Project;

const CTRL_C: u8 = 0x03;
const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";

/// Master and slave ends of a fresh pty.
///
/// Keys are typed before sjphy enters raw mode, so the slave is set up to
/// pass them through untouched: no line buffering, no signal characters,
/// no CR to NL mapping, no echo.
fn open_pty() -> (File, OwnedFd) {
    let (mut master, mut slave) = (0, 0);
    let rc = unsafe {
        libc::openpty(
            &mut master,
            &mut slave,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            std::ptr::null_mut(),
        )
    };
    assert_eq!(rc, 0, "openpty failed");

    let mut mode = std::mem::MaybeUninit::uninit();
    assert_eq!(unsafe { libc::tcgetattr(slave, mode.as_mut_ptr()) }, 0);
    let mut mode = unsafe { mode.assume_init() };
    mode.c_lflag &= !(libc::ICANON | libc::ISIG | libc::ECHO);
    mode.c_iflag &= !libc::ICRNL;
    assert_eq!(unsafe { libc::tcsetattr(slave, libc::TCSANOW, &mode) }, 0);

    unsafe { (File::from_raw_fd(master), OwnedFd::from_raw_fd(slave)) }
}

fn wait_with_timeout(child: &mut Child) -> ExitStatus {
    let deadline = Instant::now() + Duration::from_secs(20);
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("sjphy did not exit after Ctrl-C");
        }
        std::thread::sleep(Duration::from_millis(20));
    }
}

/// Run sjphy with a terminal on stdin, type `keys`, return status and stdout.
fn run_on_tty(project: &Project, args: &[&str], keys: &[u8]) -> (ExitStatus, String) {
    let (mut master, slave) = open_pty();
    let mut child = Command::new(env!("CARGO_BIN_EXE_sjphy"))
        .arg("--root")
        .arg(project.root())
        .args(args)
        .env("NO_COLOR", "1")
        .env("PATH", "")
        .stdin(Stdio::from(slave))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute sjphy");

    master.write_all(keys).unwrap();
    let status = wait_with_timeout(&mut child);

    let mut stdout = String::new();
    child
        .stdout
        .take()
        .unwrap()
        .read_to_string(&mut stdout)
        .unwrap();
    (status, stdout)
}

#[test]
fn ctrl_c_in_list_selector_exits_zero() {
    let project = Project::new();
    project.add_experiment("a-optics");
    project.add_experiment("b-bridge");

    let (status, stdout) = run_on_tty(&project, &["open"], &[CTRL_C]);

    assert_eq!(status.code(), Some(0));
    assert!(stdout.contains("Open which experiment?"));
    // Cursor shown again after the hidden session
    let hidden = stdout.find(HIDE_CURSOR).expect("cursor hidden");
    assert!(stdout[hidden..].contains(SHOW_CURSOR));
}

#[test]
fn ctrl_c_in_overwrite_question_keeps_data() {
    let project = Project::new();
    let dir = project.add_experiment("bridge");
    fs::write(dir.join("data.yaml"), "r1: 100\n").unwrap();

    let (status, stdout) = run_on_tty(&project, &["init", "bridge"], &[CTRL_C]);

    assert_eq!(status.code(), Some(0));
    assert!(stdout.contains("[y]"));
    assert!(stdout.ends_with(SHOW_CURSOR));
    assert_eq!(fs::read_to_string(dir.join("data.yaml")).unwrap(), "r1: 100\n");
}

#[test]
fn arrow_then_enter_picks_second_option() {
    let project = Project::new();
    let dir = project.add_experiment("bridge");
    fs::write(dir.join("data.yaml"), "r1: 100\n").unwrap();

    // Right to "n", Enter: the command ends without touching the data
    let (status, stdout) = run_on_tty(&project, &["init", "bridge"], b"\x1b[C\r");

    assert_eq!(status.code(), Some(0));
    assert!(stdout.contains("Overwrite it? n"));
    assert_eq!(fs::read_to_string(dir.join("data.yaml")).unwrap(), "r1: 100\n");
}
