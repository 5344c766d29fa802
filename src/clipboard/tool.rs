//! CopyTool trait and the command-pipe implementation.

use super::result::CopyMethod;
use std::io::Write;
use std::process::{Command, Stdio};

/// A tool that can put text on the system clipboard.
pub trait CopyTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> CopyMethod;

    /// Human-readable name for messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is usable here. Should be fast.
    fn is_available(&self) -> bool;

    /// Copy text content to the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}

/// Error from a specific tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// Tool not found on system
    NotFound,
    /// Tool execution failed
    Failed(String),
}

/// A clipboard tool that takes the text on stdin.
///
/// Every supported platform tool (pbcopy, xclip, xsel, wl-copy) works this
/// way; they only differ in program name and arguments.
#[derive(Debug, Clone, Copy)]
pub struct PipeTool {
    method: CopyMethod,
}

impl PipeTool {
    pub fn new(method: CopyMethod) -> Self {
        Self { method }
    }

    fn on_path(&self) -> bool {
        Command::new("which")
            .arg(self.method.name())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl CopyTool for PipeTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        match self.method {
            CopyMethod::Pbcopy => cfg!(target_os = "macos"),
            _ => cfg!(target_os = "linux") && self.on_path(),
        }
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut cmd = Command::new(self.method.name());
        cmd.args(self.method.args());
        pipe_text(cmd, self.name(), text)
    }
}

/// Run `cmd` with `text` on its stdin and wait for it.
///
/// The child is always reaped, including when it stops reading early.
fn pipe_text(mut cmd: Command, name: &str, text: &str) -> Result<(), CopyToolError> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    // Dropping stdin closes the pipe so the tool sees end of input
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    if let Err(e) = written {
        let _ = child.kill();
        let _ = child.wait();
        return Err(CopyToolError::Failed(format!("{} stopped reading input: {}", name, e)));
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} exited with {}", name, status)))
    }
}

/// Tools for this platform, in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(PipeTool::new(CopyMethod::Pbcopy))]
    }

    #[cfg(target_os = "linux")]
    {
        // Wayland first when a Wayland session is running
        let mut methods = vec![CopyMethod::Xclip, CopyMethod::Xsel, CopyMethod::WlCopy];
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            methods.rotate_right(1);
        }
        methods
            .into_iter()
            .map(|m| Box::new(PipeTool::new(m)) as Box<dyn CopyTool>)
            .collect()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}
