//! Copy results and method identifiers.

use humansize::{format_size, DECIMAL};

/// A successful clipboard copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyResult {
    pub method: CopyMethod,
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(method: CopyMethod, size_bytes: usize) -> Self {
        Self { method, size_bytes }
    }

    /// User-facing confirmation, e.g. `Prompt copied to clipboard (1.20 kB via xclip)`.
    pub fn message(&self, what: &str) -> String {
        format!(
            "{} copied to clipboard ({} via {})",
            what,
            format_size(self.size_bytes, DECIMAL),
            self.method.name()
        )
    }
}

/// Which tool performed the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Linux Wayland
    WlCopy,
}

impl CopyMethod {
    /// Executable name, also used for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlCopy => "wl-copy",
        }
    }

    /// Arguments that make the tool read the clipboard content from stdin.
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Pbcopy => &[],
            Self::Xclip => &["-selection", "clipboard"],
            Self::Xsel => &["--clipboard", "--input"],
            Self::WlCopy => &[],
        }
    }
}
