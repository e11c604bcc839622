//! `docnav check` command implementation.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config, ConfigError};
use docnav_site::{
    NavEntry, NavText, ProjectMetadata, Severity, ValidationReport, find_page_source,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Treat warnings as errors.
    #[arg(long)]
    strict: bool,

    /// Also check that internal links resolve to markdown pages.
    #[arg(long)]
    links: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or has
    /// blocking issues.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = match Config::load(self.config.as_deref(), Some(&cli_settings)) {
            Ok(config) => config,
            Err(ConfigError::Site(err)) => {
                for issue in err.report.issues() {
                    output.issue(issue);
                }
                return Err(summary_error(&err.report));
            }
            Err(err) => return Err(err.into()),
        };

        let report = collect_issues(&config, self.links)?;
        for issue in report.issues() {
            output.issue(issue);
        }

        let warnings = report.warnings().count();
        let report = report
            .into_result(self.strict)
            .map_err(|err| summary_error(&err.report))?;

        if report.is_clean() {
            output.success("Configuration is valid");
        } else {
            output.success(&format!("Configuration is valid ({warnings} warning(s))"));
        }

        Ok(())
    }
}

/// Run site validation plus the checks that need the filesystem.
fn collect_issues(config: &Config, links: bool) -> Result<ValidationReport, CliError> {
    let mut report = config.validation_report();

    let metadata = config.load_project_metadata()?;
    check_metadata_labels(&mut report, config.site.nav.entries(), &metadata, "nav");

    for (key, path) in config.site.icons.missing_local_files() {
        report.push(
            Severity::Warning,
            format!("icons[{key:?}]"),
            format!("local icon file {} not found", path.display()),
        );
    }

    if links {
        let source_dir = &config.docs_resolved.source_dir;
        let mut seen = HashSet::new();
        for link in config.site.internal_links() {
            if seen.insert(link) && find_page_source(source_dir, link).is_none() {
                report.push(
                    Severity::Warning,
                    format!("link {link:?}"),
                    format!("no markdown page under {}", source_dir.display()),
                );
            }
        }
    }

    Ok(report)
}

fn check_metadata_labels(
    report: &mut ValidationReport,
    entries: &[NavEntry],
    metadata: &ProjectMetadata,
    location: &str,
) {
    for (i, entry) in entries.iter().enumerate() {
        let location = format!("{location}[{i}]");
        if let NavText::Metadata { from } = entry.text()
            && metadata.field(*from).is_none()
        {
            report.push(
                Severity::Warning,
                &location,
                format!("project metadata has no {:?} field, label is empty", from.as_str()),
            );
        }
        if let NavEntry::Group { items, .. } = entry {
            check_metadata_labels(report, items, metadata, &format!("{location}.items"));
        }
    }
}

fn summary_error(report: &ValidationReport) -> CliError {
    CliError::Validation(format!(
        "Check failed: {} error(s), {} warning(s)",
        report.errors().count(),
        report.warnings().count()
    ))
}
