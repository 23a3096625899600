//! CLI command handlers. Each command is in its own file.

mod completions;
mod convert;
mod inspect;

pub use completions::run_completions;
pub use convert::{run_convert, ConvertArgs};
pub use inspect::run_inspect;

use anyhow::{Context, Result};
use std::path::Path;

/// Whole-file read of the sidebar export.
fn read_export(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read sidebar export: {}", path.display()))
}
