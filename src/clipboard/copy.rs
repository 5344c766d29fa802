//! Copy orchestrator for clipboard operations.

use super::error::ClipboardError;
use super::result::CopyResult;
use super::tool::{platform_tools, CopyTool, CopyToolError};

/// Copies text using the first tool that works.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[Box<dyn CopyTool>] {
        &self.tools
    }

    /// Put `text` on the clipboard.
    ///
    /// Tools are tried in order; unavailable or failing ones are skipped.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }

        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => {
                    tracing::debug!(tool = tool.name(), bytes = text.len(), "copied to clipboard");
                    return Ok(CopyResult::new(tool.method(), text.len()));
                }
                Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(message)) => {
                    tracing::warn!(tool = tool.name(), %message, "clipboard tool failed");
                    continue;
                }
            }
        }

        Err(ClipboardError::NoToolAvailable)
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::result::CopyMethod;
    use std::sync::{Arc, Mutex};

    /// Records what it was asked to copy.
    struct FakeTool {
        method: CopyMethod,
        available: bool,
        outcome: Result<(), CopyToolError>,
        copied: Arc<Mutex<Vec<String>>>,
    }

    impl FakeTool {
        fn boxed(
            method: CopyMethod,
            available: bool,
            outcome: Result<(), CopyToolError>,
            copied: &Arc<Mutex<Vec<String>>>,
        ) -> Box<dyn CopyTool> {
            Box::new(Self {
                method,
                available,
                outcome,
                copied: Arc::clone(copied),
            })
        }
    }

    impl CopyTool for FakeTool {
        fn method(&self) -> CopyMethod {
            self.method
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
            self.copied
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name(), text));
            self.outcome.clone()
        }
    }

    #[test]
    fn first_working_tool_wins() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let copy = Copy::with_tools(vec![
            FakeTool::boxed(CopyMethod::Xclip, false, Ok(()), &log),
            FakeTool::boxed(
                CopyMethod::Xsel,
                true,
                Err(CopyToolError::Failed("no display".into())),
                &log,
            ),
            FakeTool::boxed(CopyMethod::WlCopy, true, Ok(()), &log),
        ]);

        let result = copy.text("prompt").unwrap();
        assert_eq!(result, CopyResult::new(CopyMethod::WlCopy, 6));
        assert_eq!(
            *log.lock().unwrap(),
            vec!["xsel:prompt".to_string(), "wl-copy:prompt".to_string()]
        );
    }

    #[test]
    fn no_working_tool_is_an_error() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let copy = Copy::with_tools(vec![FakeTool::boxed(
            CopyMethod::Xclip,
            true,
            Err(CopyToolError::NotFound),
            &log,
        )]);
        assert!(matches!(
            copy.text("prompt"),
            Err(ClipboardError::NoToolAvailable)
        ));
    }

    #[test]
    fn empty_text_is_rejected_before_any_tool_runs() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let copy = Copy::with_tools(vec![FakeTool::boxed(CopyMethod::Xclip, true, Ok(()), &log)]);
        assert!(matches!(copy.text(""), Err(ClipboardError::Empty)));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn no_tools_at_all() {
        let copy = Copy::with_tools(Vec::new());
        assert!(copy.tools().is_empty());
        assert!(matches!(
            copy.text("x"),
            Err(ClipboardError::NoToolAvailable)
        ));
    }
}
