use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::netscape::RenderOptions;

/// Where Arc keeps the sidebar export on macOS, relative to `$HOME`.
const ARC_SIDEBAR_RELATIVE: &str = "Library/Application Support/Arc/StorableSidebar.json";

/// Global configuration loaded from `~/.config/arcmark/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcmarkConfig {
    /// Sidebar export to read when `--input` is not given. None = Arc's default location.
    #[serde(default)]
    pub input_path: Option<PathBuf>,
    /// Bookmark file to write when `--output` is not given.
    pub output_path: PathBuf,
    /// Entity-escape titles and URLs in the output (off reproduces the classic export).
    #[serde(default)]
    pub escape_html: bool,
    /// `<TITLE>`/`<H1>` text of the generated document.
    #[serde(default = "default_document_title")]
    pub document_title: String,
}

fn default_document_title() -> String {
    RenderOptions::default().document_title
}

impl Default for ArcmarkConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: PathBuf::from("arc_bookmarks.html"),
            escape_html: false,
            document_title: default_document_title(),
        }
    }
}

impl ArcmarkConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            document_title: self.document_title.clone(),
            escape_html: self.escape_html,
        }
    }

    /// Configured input, else Arc's sidebar file under `$HOME`.
    pub fn resolve_input(&self) -> Result<PathBuf> {
        if let Some(path) = &self.input_path {
            return Ok(path.clone());
        }
        let home = std::env::var_os("HOME").context("HOME is not set; pass --input")?;
        Ok(PathBuf::from(home).join(ARC_SIDEBAR_RELATIVE))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("arcmark")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ArcmarkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ArcmarkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ArcmarkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ArcmarkConfig::default();
        assert!(cfg.input_path.is_none());
        assert_eq!(cfg.output_path, PathBuf::from("arc_bookmarks.html"));
        assert!(!cfg.escape_html);
        assert_eq!(cfg.document_title, "Bookmarks");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ArcmarkConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ArcmarkConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.output_path, cfg.output_path);
        assert_eq!(parsed.escape_html, cfg.escape_html);
        assert_eq!(parsed.document_title, cfg.document_title);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            input_path = "/tmp/StorableSidebar.json"
            output_path = "/tmp/out.html"
            escape_html = true
            document_title = "Arc"
        "#;
        let cfg: ArcmarkConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.input_path.as_deref(),
            Some(std::path::Path::new("/tmp/StorableSidebar.json"))
        );
        assert_eq!(cfg.resolve_input().unwrap(), PathBuf::from("/tmp/StorableSidebar.json"));
        let opts = cfg.render_options();
        assert!(opts.escape_html);
        assert_eq!(opts.document_title, "Arc");
    }

    #[test]
    fn config_toml_minimal_uses_defaults() {
        let cfg: ArcmarkConfig = toml::from_str(r#"output_path = "b.html""#).unwrap();
        assert!(cfg.input_path.is_none());
        assert!(!cfg.escape_html);
        assert_eq!(cfg.document_title, "Bookmarks");
    }
}
