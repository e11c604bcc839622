//! `docnav sidebar` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::Config;
use docnav_site::SidebarMatch;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page path to select the sidebar for (e.g. /guide/wire).
    path: String,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the selected sidebar as JSON.
    #[arg(long)]
    json: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// A path without a sidebar is reported but is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let Some(matched) = config.site.sidebar.lookup(&self.path) else {
            output.warning(&format!("No sidebar for {}", self.path));
            return Ok(());
        };

        if self.json {
            output.data(&serde_json::to_string_pretty(&matched)?)?;
            return Ok(());
        }

        output.heading(&matched.prefix)?;
        for line in render_lines(matched, &self.path) {
            match line {
                Line::Section(text) => output.data(&text)?,
                Line::Link(text) => output.data_dim(&text)?,
                Line::Active(text) => output.heading(&text)?,
            }
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Section(String),
    Link(String),
    Active(String),
}

fn render_lines(matched: SidebarMatch<'_>, page_path: &str) -> Vec<Line> {
    let active = matched.active(page_path).map(|(_, link)| link);
    let mut lines = Vec::new();

    for section in matched.sections {
        let marker = match section.collapsed {
            Some(true) => " (collapsed)",
            Some(false) => " (collapsible)",
            None => "",
        };
        lines.push(Line::Section(format!("  {}{marker}", section.text)));

        for item in &section.items {
            if active.is_some_and(|active| std::ptr::eq(active, item)) {
                lines.push(Line::Active(format!("  > {}  {}", item.text, item.link)));
            } else {
                lines.push(Line::Link(format!("    {}  {}", item.text, item.link)));
            }
        }
    }

    lines
}
