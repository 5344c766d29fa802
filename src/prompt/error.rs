//! Prompt errors.

use std::io;

/// Errors that end a prompt.
///
/// Validation failures and unknown keys never surface here: they are
/// handled inside the prompt loop.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Standard input is not a terminal")]
    NotATerminal,

    #[error("Unable to {action} terminal mode: {source}")]
    TerminalMode {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("No options to select from")]
    NoOptions,

    #[error("Input closed before a value was entered")]
    InputClosed,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
