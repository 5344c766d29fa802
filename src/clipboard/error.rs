//! Clipboard operation errors.

/// Errors that can occur while copying to the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error(
        "No clipboard tool available. On Linux, install xclip, xsel, or wl-clipboard."
    )]
    NoToolAvailable,

    #[error("Nothing to copy")]
    Empty,
}
