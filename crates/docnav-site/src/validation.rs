//! Structural validation of a [`SiteDefinition`].
//!
//! Validation runs once at load time and collects every issue instead of
//! stopping at the first one. Errors make the configuration unusable;
//! warnings flag likely mistakes (duplicated labels, empty groups) that
//! still render.

use std::collections::HashSet;
use std::fmt;

use crate::comments::CommentsConfig;
use crate::icons::IconSource;
use crate::nav::{NavEntry, NavText};
use crate::sidebar::{SidebarLink, SidebarSection};
use crate::theme::EditLink;
use crate::{SiteDefinition, is_external_link};

/// Issue severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Likely mistake; the site still renders.
    Warning,
    /// Invalid configuration.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Single validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    /// Severity.
    pub severity: Severity,
    /// Location in the configuration (e.g. `sidebar["/guide/"][0].items[2]`).
    pub location: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

/// All issues found in a site definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

/// Error returned when a report contains blocking issues.
#[derive(Debug, thiserror::Error)]
#[error("{report}")]
pub struct ValidationError {
    /// Report with the blocking issues.
    pub report: ValidationReport,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl ValidationReport {
    /// All issues in discovery order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Issues with [`Severity::Error`].
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
    }

    /// Issues with [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }

    /// Check if any error was found.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Check if no issue at all was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Record an issue.
    pub fn push(&mut self, severity: Severity, location: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            severity,
            location: location.into(),
            message: message.into(),
        });
    }

    /// Convert into a result.
    ///
    /// Errors always fail; warnings fail only when `strict` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] carrying the report when it is blocking.
    pub fn into_result(self, strict: bool) -> Result<Self, ValidationError> {
        let blocking = self.has_errors() || (strict && !self.is_clean());
        if blocking {
            Err(ValidationError { report: self })
        } else {
            Ok(self)
        }
    }

    fn error(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, location, message);
    }

    fn warning(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, location, message);
    }
}

/// Validate a site definition.
#[must_use]
pub(crate) fn validate(site: &SiteDefinition) -> ValidationReport {
    let mut report = ValidationReport::default();

    if site.title.trim().is_empty() {
        report.warning("title", "site title is empty");
    }

    validate_nav(&mut report, "nav", site.nav.entries(), false);
    validate_sidebar(&mut report, site);

    if let Some(edit_link) = &site.edit_link {
        validate_edit_link(&mut report, edit_link);
    }

    for (i, social) in site.social_links.iter().enumerate() {
        let location = format!("social_links[{i}]");
        if social.icon.trim().is_empty() {
            report.error(&location, "icon cannot be empty");
        }
        if !is_external_link(&social.link) {
            report.error(&location, "link must start with http:// or https://");
        }
    }

    for (key, source) in site.icons.iter() {
        let location = format!("icons[{key:?}]");
        if key.is_empty() {
            report.error(&location, "icon key cannot be empty");
        }
        match source {
            IconSource::Named(name) if name.trim().is_empty() => {
                report.error(&location, "icon name cannot be empty");
            }
            IconSource::Local { local } if local.as_os_str().is_empty() => {
                report.error(&location, "local icon path cannot be empty");
            }
            _ => {}
        }
    }

    if let Some(comments) = &site.comments {
        validate_comments(&mut report, comments);
    }

    report
}

/// `nested` is set for the items of a dropdown, which must all be links.
fn validate_nav(report: &mut ValidationReport, location: &str, entries: &[NavEntry], nested: bool) {
    let mut seen = HashSet::new();

    for (i, entry) in entries.iter().enumerate() {
        let location = format!("{location}[{i}]");

        if let NavText::Literal(text) = entry.text() {
            if text.trim().is_empty() {
                report.warning(&location, "text is empty");
            } else if !seen.insert(text.as_str()) {
                report.warning(&location, format!("duplicate text {text:?} among siblings"));
            }
        }

        match entry {
            NavEntry::Link { link, .. } => {
                if link.trim().is_empty() {
                    report.error(&location, "link cannot be empty");
                }
            }
            NavEntry::Group { items, .. } => {
                if nested {
                    report.error(&location, "nested entry must be a link, not a dropdown");
                } else if items.is_empty() {
                    report.warning(&location, "dropdown has no items");
                }
                validate_nav(report, &format!("{location}.items"), items, true);
            }
        }
    }
}

fn validate_sidebar(report: &mut ValidationReport, site: &SiteDefinition) {
    for (prefix, sections) in site.sidebar.iter() {
        let location = format!("sidebar[{prefix:?}]");

        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            report.error(&location, "prefix must start and end with '/'");
        }
        if sections.is_empty() {
            report.warning(&location, "sidebar has no sections");
        }

        let mut seen = HashSet::new();
        for (i, section) in sections.iter().enumerate() {
            let location = format!("{location}[{i}]");
            if section.text.trim().is_empty() {
                report.error(&location, "section text cannot be empty");
            } else if !seen.insert(section.text.as_str()) {
                report.warning(
                    &location,
                    format!("duplicate section {:?} among siblings", section.text),
                );
            }
            validate_section(report, &location, prefix, section);
        }
    }
}

fn validate_section(
    report: &mut ValidationReport,
    location: &str,
    prefix: &str,
    section: &SidebarSection,
) {
    if section.items.is_empty() {
        report.warning(location, "section has no links");
    }

    let mut seen = HashSet::new();
    for (i, SidebarLink { text, link }) in section.items.iter().enumerate() {
        let location = format!("{location}.items[{i}]");

        if text.trim().is_empty() {
            report.warning(&location, "text is empty");
        } else if !seen.insert(text.as_str()) {
            report.warning(&location, format!("duplicate text {text:?} among siblings"));
        }

        if link.trim().is_empty() {
            report.error(&location, "link cannot be empty");
        } else if !is_external_link(link) && !link.starts_with(prefix) {
            report.error(
                &location,
                format!("link {link:?} is outside sidebar prefix {prefix:?}"),
            );
        }
    }
}

fn validate_edit_link(report: &mut ValidationReport, edit_link: &EditLink) {
    if !is_external_link(&edit_link.pattern) {
        report.error(
            "edit_link.pattern",
            "pattern must start with http:// or https://",
        );
    }
    if !edit_link.pattern.contains(EditLink::PATH_PLACEHOLDER) {
        report.error(
            "edit_link.pattern",
            format!("pattern must contain {}", EditLink::PATH_PLACEHOLDER),
        );
    }
}

fn validate_comments(report: &mut ValidationReport, comments: &CommentsConfig) {
    let repo_valid = comments
        .repo
        .split_once('/')
        .is_some_and(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'));
    if !repo_valid {
        report.error("comments.repo", "repo must have the form owner/name");
    }
    if comments.repo_id.trim().is_empty() {
        report.error("comments.repo_id", "repo_id cannot be empty");
    }
    if comments.category.trim().is_empty() {
        report.error("comments.category", "category cannot be empty");
    }
    if comments.category_id.trim().is_empty() {
        report.error("comments.category_id", "category_id cannot be empty");
    }
}
