//! # fibdrv-cli
//!
//! CLI output, sweep progress display, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod sweep_progress;
pub mod ui;

pub use presenter::{CliResultPresenter, ResultPresenter};
