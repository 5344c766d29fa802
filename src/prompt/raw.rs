//! Raw terminal mode and single-key reads.
//!
//! The terminal is switched to raw mode for exactly one key read and put
//! back right after, so line-buffered prompts in between keep working.

use libc::{c_int, termios};
use std::io::{self, Read};
use std::mem;
use std::sync::Mutex;

use super::error::PromptError;
use super::key::{Key, KeySource, ESC};

pub(crate) const STDIN_FD: c_int = 0;

/// Mode captured before the current raw read, if one is in flight.
///
/// Published so the interrupt handler can restore it when the process is
/// terminated mid-read.
static SAVED_MODE: Mutex<Option<(c_int, termios)>> = Mutex::new(None);

fn publish(mode: Option<(c_int, termios)>) {
    if let Ok(mut slot) = SAVED_MODE.lock() {
        *slot = mode;
    }
}

/// Restore the mode saved by an in-flight raw read, if any.
///
/// Used from the interrupt handler; errors are ignored.
pub(crate) fn restore_saved_mode() {
    if let Ok(mut slot) = SAVED_MODE.lock() {
        if let Some((fd, saved)) = slot.take() {
            unsafe { libc::tcsetattr(fd, libc::TCSANOW, &saved as *const termios) };
        }
    }
}

/// Scoped raw mode. The captured mode is restored on drop.
pub(crate) struct RawMode {
    fd: c_int,
    saved: termios,
    restored: bool,
}

impl RawMode {
    /// Capture the current mode of `fd` and switch it to raw.
    pub(crate) fn enter(fd: c_int) -> Result<Self, PromptError> {
        let mut tbuf = mem::MaybeUninit::uninit();
        if 0 > unsafe { libc::tcgetattr(fd, tbuf.as_mut_ptr()) } {
            return Err(PromptError::TerminalMode {
                action: "read",
                source: io::Error::last_os_error(),
            });
        }
        let saved: termios = unsafe { tbuf.assume_init() };

        let mut raw = saved;
        unsafe { libc::cfmakeraw(&mut raw as *mut termios) };

        publish(Some((fd, saved)));
        if 0 > unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw as *const termios) } {
            publish(None);
            return Err(PromptError::TerminalMode {
                action: "enter raw",
                source: io::Error::last_os_error(),
            });
        }

        Ok(Self {
            fd,
            saved,
            restored: false,
        })
    }

    /// Restore the captured mode, reporting failure.
    pub(crate) fn leave(mut self) -> Result<(), PromptError> {
        self.restored = true;
        let result = self.restore();
        publish(None);
        result
    }

    fn restore(&self) -> Result<(), PromptError> {
        if 0 > unsafe { libc::tcsetattr(self.fd, libc::TCSADRAIN, &self.saved as *const termios) }
        {
            return Err(PromptError::TerminalMode {
                action: "restore",
                source: io::Error::last_os_error(),
            });
        }
        Ok(())
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if !self.restored {
            // Unwinding; nobody to report to
            let _ = self.restore();
            publish(None);
        }
    }
}

/// Read one key's worth of bytes: a single byte, or ESC plus two more.
pub fn read_sequence<R: Read>(input: &mut R) -> Result<Vec<u8>, PromptError> {
    let mut first = [0u8; 1];
    read_exact(input, &mut first)?;
    if first[0] != ESC {
        return Ok(vec![first[0]]);
    }

    let mut rest = [0u8; 2];
    read_exact(input, &mut rest)?;
    Ok(vec![ESC, rest[0], rest[1]])
}

fn read_exact<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<(), PromptError> {
    input.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => PromptError::InputClosed,
        _ => PromptError::Io(e),
    })
}

/// Reads keys from standard input in raw mode.
pub struct RawKeyReader {
    fd: c_int,
    stdin: io::Stdin,
}

impl RawKeyReader {
    pub(crate) fn stdin() -> Self {
        Self {
            fd: STDIN_FD,
            stdin: io::stdin(),
        }
    }
}

impl KeySource for RawKeyReader {
    fn read_key(&mut self) -> Result<Key, PromptError> {
        let raw = RawMode::enter(self.fd)?;
        let bytes = read_sequence(&mut self.stdin.lock());
        raw.leave()?;

        let bytes = bytes?;
        let key = Key::decode(&bytes);
        tracing::trace!(?bytes, ?key, "key read");
        Ok(key)
    }
}
