//! `arcmark inspect` – dump the normalized tree.

use anyhow::{Context, Result};
use arcmark_core::diagnostics::TracingSink;
use arcmark_core::netscape::RenderOptions;
use std::path::Path;

use super::read_export;

pub fn run_inspect(input: &Path) -> Result<()> {
    let text = read_export(input)?;
    let conversion = arcmark_core::convert_str(&text, &RenderOptions::default(), &mut TracingSink)
        .with_context(|| format!("convert {}", input.display()))?;
    let json = serde_json::to_string_pretty(&conversion.tree)?;
    println!("{json}");
    Ok(())
}
