//! Site definition.
//!
//! [`SiteDefinition`] is the whole declarative description of the
//! documentation site. It is built once at load time and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};

use crate::comments::CommentsConfig;
use crate::icons::IconMap;
use crate::nav::{NavEntry, NavTree};
use crate::sidebar::SidebarRegistry;
use crate::theme::{EditLink, Footer, MarkdownConfig, SearchConfig, SocialLink};
use crate::validation::{self, ValidationReport};

/// Declarative documentation site description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDefinition {
    /// Site title.
    pub title: String,
    /// Site description (HTML meta description).
    pub description: String,
    /// Search configuration.
    pub search: SearchConfig,
    /// Top navigation bar.
    pub nav: NavTree,
    /// Sidebars keyed by path prefix.
    pub sidebar: SidebarRegistry,
    /// "Edit this page" link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
    /// Social links in the nav bar.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
    /// Page footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// Markdown renderer plugins.
    pub markdown: MarkdownConfig,
    /// Code group icons.
    #[serde(skip_serializing_if = "IconMap::is_empty")]
    pub icons: IconMap,
    /// Comment widget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<CommentsConfig>,
}

impl SiteDefinition {
    /// Run structural validation.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validation::validate(self)
    }

    /// Internal links of the nav bar and all sidebars, in declaration order.
    ///
    /// External links are skipped.
    #[must_use]
    pub fn internal_links(&self) -> Vec<&str> {
        let mut links = Vec::new();
        collect_nav_links(self.nav.entries(), &mut links);
        links.extend(
            self.sidebar
                .iter()
                .flat_map(|(_, sections)| sections)
                .flat_map(|section| &section.items)
                .map(|item| item.link.as_str()),
        );
        links.retain(|link| !crate::is_external_link(link));
        links
    }
}

fn collect_nav_links<'a>(entries: &'a [NavEntry], links: &mut Vec<&'a str>) {
    for entry in entries {
        match entry {
            NavEntry::Link { link, .. } => links.push(link),
            NavEntry::Group { items, .. } => collect_nav_links(items, links),
        }
    }
}
