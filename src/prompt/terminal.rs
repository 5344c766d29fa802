//! The controlling terminal as a single owned handle.

use std::io::{self, Write};
use std::sync::Once;

use terminal_size::{terminal_size, Width};

use super::error::PromptError;
use super::raw::{restore_saved_mode, RawKeyReader};
use super::screen::ansi;

/// Exclusive handle on stdin/stdout for one prompt.
///
/// Bundles the raw key reader with the output stream so a prompt owns both
/// for its whole session.
pub struct Terminal {
    keys: RawKeyReader,
    out: io::Stdout,
}

impl Terminal {
    /// Open the controlling terminal. Fails when stdin is not a TTY.
    pub fn open() -> Result<Self, PromptError> {
        if !atty::is(atty::Stream::Stdin) {
            return Err(PromptError::NotATerminal);
        }
        Ok(Self {
            keys: RawKeyReader::stdin(),
            out: io::stdout(),
        })
    }

    /// Terminal width in columns, if it can be determined.
    pub fn width(&self) -> Option<usize> {
        terminal_size().map(|(Width(w), _)| w as usize)
    }

    /// Borrow the key reader and the output stream together.
    pub fn split(&mut self) -> (&mut RawKeyReader, &mut io::Stdout) {
        (&mut self.keys, &mut self.out)
    }
}

/// End the process after the user pressed Ctrl-C in a selector.
///
/// Cancellation is not an error: the exit status is 0.
pub(crate) fn exit_cancelled() -> ! {
    tracing::debug!("selection cancelled, exiting");
    let _ = io::stdout().flush();
    std::process::exit(0)
}

static HANDLER: Once = Once::new();

/// Install the process-wide handler for SIGINT, SIGTERM and SIGHUP.
///
/// The handler restores a terminal mode left behind by an interrupted raw
/// read, shows the cursor and exits with status 0. Safe to call more than
/// once.
pub fn install_interrupt_handler() -> Result<(), PromptError> {
    let mut result = Ok(());
    HANDLER.call_once(|| {
        result = ctrlc::set_handler(|| {
            restore_saved_mode();
            let mut out = io::stdout();
            let _ = out.write_all(ansi::SHOW_CURSOR.as_bytes());
            let _ = writeln!(out);
            let _ = out.flush();
            std::process::exit(0);
        })
        .map_err(|e| PromptError::Io(io::Error::new(io::ErrorKind::Other, e)));
    });
    result
}
