//! `arcmark convert` – sidebar export in, bookmark HTML out.

use anyhow::{Context, Result};
use arcmark_core::config::ArcmarkConfig;
use arcmark_core::diagnostics::TracingSink;
use arcmark_core::netscape::RenderOptions;
use std::path::PathBuf;

use super::read_export;

/// Convert settings after merging CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub render: RenderOptions,
}

impl ConvertArgs {
    pub fn resolve(
        cfg: &ArcmarkConfig,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        escape_html: bool,
        title: Option<String>,
    ) -> Result<Self> {
        let input = match input {
            Some(path) => path,
            None => cfg.resolve_input()?,
        };
        let mut render = cfg.render_options();
        render.escape_html |= escape_html;
        if let Some(title) = title {
            render.document_title = title;
        }
        Ok(Self {
            input,
            output: output.unwrap_or_else(|| cfg.output_path.clone()),
            render,
        })
    }
}

/// Reads, converts and writes. Nothing is written when conversion fails.
pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let text = read_export(&args.input)?;
    let conversion = arcmark_core::convert_str(&text, &args.render, &mut TracingSink)
        .with_context(|| format!("convert {}", args.input.display()))?;

    std::fs::write(&args.output, &conversion.html)
        .with_context(|| format!("write bookmarks: {}", args.output.display()))?;

    let stats = conversion.stats();
    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        spaces = stats.spaces,
        folders = stats.folders,
        bookmarks = stats.bookmarks,
        "conversion finished"
    );
    println!(
        "Wrote {} bookmarks ({} folders, {} spaces) to {}",
        stats.bookmarks,
        stats.folders,
        stats.spaces,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"{
        "sidebar": { "containers": [
            { "global": {} },
            {
                "spaces": ["s1", { "id": "s1", "title": "Work", "containerIDs": ["c1"] }],
                "items": [
                    { "id": "c1", "childrenIds": ["t1"] },
                    { "id": "t1", "data": { "tab": { "savedURL": "https://x.com", "savedTitle": "X" } } }
                ]
            }
        ]}
    }"#;

    #[test]
    fn flags_override_config() {
        let cfg = ArcmarkConfig {
            input_path: Some(PathBuf::from("cfg.json")),
            ..ArcmarkConfig::default()
        };
        let args = ConvertArgs::resolve(
            &cfg,
            Some(PathBuf::from("flag.json")),
            Some(PathBuf::from("out.html")),
            true,
            Some("Mine".into()),
        )
        .unwrap();
        assert_eq!(args.input, PathBuf::from("flag.json"));
        assert_eq!(args.output, PathBuf::from("out.html"));
        assert!(args.render.escape_html);
        assert_eq!(args.render.document_title, "Mine");

        let args = ConvertArgs::resolve(&cfg, None, None, false, None).unwrap();
        assert_eq!(args.input, PathBuf::from("cfg.json"));
        assert_eq!(args.output, PathBuf::from("arc_bookmarks.html"));
        assert!(!args.render.escape_html);
    }

    #[test]
    fn writes_bookmark_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("StorableSidebar.json");
        std::fs::write(&input, EXPORT).unwrap();
        let output = dir.path().join("out.html");
        let args = ConvertArgs {
            input,
            output: output.clone(),
            render: RenderOptions::default(),
        };
        run_convert(&args).unwrap();
        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<DT><H3>Work</H3>"));
        assert!(html.contains("<DT><A HREF=\"https://x.com\">X</A>"));
    }

    #[test]
    fn invalid_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.json");
        std::fs::write(&input, r#"{"sidebar": {"containers": []}}"#).unwrap();
        let output = dir.path().join("out.html");
        let args = ConvertArgs {
            input,
            output: output.clone(),
            render: RenderOptions::default(),
        };
        assert!(run_convert(&args).is_err());
        assert!(!output.exists());
    }
}
