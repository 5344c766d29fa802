//! System clipboard access through platform command-line tools.
//!
//! - macOS: `pbcopy`
//! - Linux: `xclip`, `xsel`, `wl-copy` (Wayland first in a Wayland session)

mod copy;
mod error;
mod result;
mod tool;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{platform_tools, CopyTool, CopyToolError, PipeTool};
