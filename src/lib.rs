//! SJPHY - launcher for physics experiment notebooks.
//!
//! The core is [`prompt`], a line-oriented interactive prompt toolkit on
//! raw termios. The remaining modules implement the launcher workflow:
//! experiments and their notebooks, the student profile, clipboard access
//! and configuration.

pub mod banner;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod experiment;
pub mod notebook;
pub mod profile;
pub mod prompt;
pub mod theme;

pub use config::Config;
pub use experiment::{Experiment, ExperimentError};
pub use profile::{ProfileStore, Student};
pub use theme::{current_theme, Theme};
