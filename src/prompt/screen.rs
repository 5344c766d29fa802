//! Cursor visibility and line erasing.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use super::error::PromptError;

/// Escape sequences written by the prompts.
pub mod ansi {
    pub const HIDE_CURSOR: &str = "\x1b[?25l";
    pub const SHOW_CURSOR: &str = "\x1b[?25h";
    /// Cursor to the start of the previous line.
    pub const CURSOR_PREV_LINE: &str = "\x1b[F";
    /// Clear from the cursor to the end of the line.
    pub const CLEAR_LINE: &str = "\x1b[K";
}

/// Move up and clear `n` lines, undoing the last `n` printed lines.
///
/// The caller must know how many lines it printed; a wrong count leaves
/// stale lines behind or eats lines that were not ours.
pub fn erase_lines<W: Write + ?Sized>(out: &mut W, n: usize) -> io::Result<()> {
    for _ in 0..n {
        out.write_all(ansi::CURSOR_PREV_LINE.as_bytes())?;
        out.write_all(ansi::CLEAR_LINE.as_bytes())?;
    }
    out.flush()
}

/// Hides the cursor while alive.
///
/// Dropping the guard shows the cursor again, whichever way the scope is
/// left. Writes go through the guard to the wrapped writer.
pub struct CursorGuard<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> CursorGuard<'a, W> {
    pub fn hide(out: &'a mut W) -> io::Result<Self> {
        out.write_all(ansi::HIDE_CURSOR.as_bytes())?;
        out.flush()?;
        Ok(Self { out })
    }
}

impl<W: Write> Deref for CursorGuard<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        self.out
    }
}

impl<W: Write> DerefMut for CursorGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut W {
        self.out
    }
}

impl<W: Write> Drop for CursorGuard<'_, W> {
    fn drop(&mut self) {
        let _ = self.out.write_all(ansi::SHOW_CURSOR.as_bytes());
        let _ = self.out.flush();
    }
}

/// Run `op` with the cursor hidden, showing it again afterwards.
pub fn hidden_cursor<W, T, F>(out: &mut W, op: F) -> Result<T, PromptError>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<T, PromptError>,
{
    let mut guard = CursorGuard::hide(out)?;
    let result = op(&mut *guard);
    drop(guard);
    result
}
