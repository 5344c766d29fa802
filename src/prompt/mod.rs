//! Interactive terminal prompts.
//!
//! A small line-oriented prompt toolkit built directly on termios raw mode
//! and ANSI escape sequences:
//!
//! - [`select`] / [`panel_select`]: arrow-key menus that redraw in place and
//!   leave a one-line summary behind
//! - [`prompt_line`]: validated single-line input
//! - [`read_until_eof`]: multi-line paste capture
//!
//! # Architecture
//!
//! - `key`: key codes and the [`KeySource`] seam
//! - `raw`: raw mode for exactly one key read, restored on every path
//! - `screen`: cursor hiding guard and line erasing
//! - `terminal`: the owned stdin/stdout handle and the interrupt handler
//! - `select` / `input`: the prompts themselves
//!
//! The prompt loops are generic over [`KeySource`] / `BufRead` and
//! `io::Write`, so they run unchanged against scripted input in tests.
//!
//! # Cancellation
//!
//! Ctrl-C inside a selector ends the whole process with status 0 after the
//! cursor has been restored. Signals received while a prompt is active do
//! the same once [`install_interrupt_handler`] has been called.

mod error;
mod input;
mod key;
mod raw;
mod screen;
mod select;
mod terminal;

pub use error::PromptError;
pub use input::{prompt_line, read_until_eof, LineInput, INVALID_INPUT};
pub use key::{Key, KeySource};
pub use raw::{read_sequence, RawKeyReader};
pub use screen::{ansi, erase_lines, hidden_cursor, CursorGuard};
pub use select::{
    panel_select, select, Frame, Outcome, SelectStyle, Selection, Selector, DEFAULT_PANEL_WIDTH,
    LIST_FOOTER, PANEL_LINES,
};
pub use terminal::{install_interrupt_handler, Terminal};
