//! `docnav export` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON.
    #[arg(long)]
    compact: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the output
    /// cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let json = render(&config, self.compact)?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, format!("{json}\n"))?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.data(&json)?,
        }

        Ok(())
    }
}

/// Serialize the framework configuration of a loaded site.
fn render(config: &Config, compact: bool) -> Result<String, CliError> {
    let metadata = config.load_project_metadata()?;
    let nav = config.site.nav.resolve(&metadata);
    let framework_config = config.site.to_framework_config(&nav);

    let json = if compact {
        serde_json::to_string(&framework_config)?
    } else {
        serde_json::to_string_pretty(&framework_config)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_resolves_version_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        std::fs::write(
            &path,
            r#"
[site]
title = "wire"

[[site.nav]]
text = { from = "version" }
items = [{ text = "Changelog", link = "https://example.com/CHANGELOG.md" }]
"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("package.json"), r#"{"version": "0.4.0"}"#).unwrap();
        let config = Config::load(Some(&path), None).unwrap();

        let json: serde_json::Value = serde_json::from_str(&render(&config, true).unwrap()).unwrap();

        assert_eq!(json["title"], "wire");
        assert_eq!(json["themeConfig"]["nav"][0]["text"], "0.4.0");
    }

    #[test]
    fn test_render_compact_is_single_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        std::fs::write(&path, "[site]\ntitle = \"wire\"\n").unwrap();
        let config = Config::load(Some(&path), None).unwrap();

        let compact = render(&config, true).unwrap();
        let pretty = render(&config, false).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
    }
}
