//! Path-prefix keyed sidebars.
//!
//! Each site area (guide, reference, ...) gets its own sidebar, registered
//! under the URL-path prefix its pages live in. A page gets the sidebar of
//! the longest prefix its path starts with, or no sidebar at all.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Leaf link in a sidebar section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLink {
    /// Display text.
    pub text: String,
    /// Link target.
    pub link: String,
}

/// Collapsible group of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Section heading.
    pub text: String,
    /// Initial collapse state. `None` makes the section non-collapsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<SidebarLink>,
}

impl SidebarSection {
    /// Find the link pointing at a page path.
    #[must_use]
    pub fn find_link(&self, page_path: &str) -> Option<&SidebarLink> {
        let target = strip_page_extension(page_path);
        self.items
            .iter()
            .find(|item| strip_page_extension(&item.link) == target)
    }
}

/// Sidebars keyed by URL-path prefix (e.g. `/guide/`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarRegistry {
    sidebars: BTreeMap<String, Vec<SidebarSection>>,
}

/// Sidebar selected for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarMatch<'a> {
    /// Prefix the page path matched.
    pub prefix: &'a str,
    /// Sections of the matched sidebar.
    pub sections: &'a [SidebarSection],
}

impl<'a> SidebarMatch<'a> {
    /// Find the section and link that point at the given page.
    #[must_use]
    pub fn active(&self, page_path: &str) -> Option<(&'a SidebarSection, &'a SidebarLink)> {
        let page_path = normalize_page_path(page_path);
        self.sections
            .iter()
            .find_map(|section| section.find_link(&page_path).map(|link| (section, link)))
    }

    /// Check if any section links to the given target.
    #[must_use]
    pub fn contains_link(&self, link: &str) -> bool {
        self.sections
            .iter()
            .flat_map(|section| &section.items)
            .any(|item| item.link == link)
    }
}

impl SidebarRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the sidebar for a prefix, replacing any previous one.
    pub fn insert(&mut self, prefix: impl Into<String>, sections: Vec<SidebarSection>) {
        self.sidebars.insert(prefix.into(), sections);
    }

    /// Registered prefixes in order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.sidebars.keys().map(String::as_str)
    }

    /// Iterate over prefixes and their sections.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarSection])> {
        self.sidebars
            .iter()
            .map(|(prefix, sections)| (prefix.as_str(), sections.as_slice()))
    }

    /// Number of registered sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Check if no sidebar is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Select the sidebar for a page path.
    ///
    /// The path is normalized first (see [`normalize_page_path`]). Among the
    /// prefixes the path starts with, the longest wins. The bare area root
    /// (`/guide` for prefix `/guide/`) matches too.
    ///
    /// Returns `None` when no prefix matches; the page renders without a
    /// sidebar.
    #[must_use]
    pub fn lookup(&self, page_path: &str) -> Option<SidebarMatch<'_>> {
        let path = normalize_page_path(page_path);
        self.sidebars
            .iter()
            .filter(|(prefix, _)| prefix_matches(prefix, &path))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, sections)| SidebarMatch {
                prefix,
                sections,
            })
    }
}

/// Normalize a page path for sidebar lookup.
///
/// Strips the query string and fragment, and ensures a leading slash.
///
/// ```
/// use docnav_site::normalize_page_path;
///
/// assert_eq!(normalize_page_path("guide/wire#install"), "/guide/wire");
/// assert_eq!(normalize_page_path(""), "/");
/// ```
#[must_use]
pub fn normalize_page_path(page_path: &str) -> String {
    let end = page_path.find(['?', '#']).unwrap_or(page_path.len());
    let path = &page_path[..end];
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    path.starts_with(prefix) || prefix.strip_suffix('/').is_some_and(|root| root == path)
}

fn strip_page_extension(path: &str) -> &str {
    path.strip_suffix(".md")
        .or_else(|| path.strip_suffix(".html"))
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn link(text: &str, link: &str) -> SidebarLink {
        SidebarLink {
            text: text.to_owned(),
            link: link.to_owned(),
        }
    }

    fn section(text: &str, items: Vec<SidebarLink>) -> SidebarSection {
        SidebarSection {
            text: text.to_owned(),
            collapsed: None,
            items,
        }
    }

    fn wire_registry() -> SidebarRegistry {
        let mut registry = SidebarRegistry::new();
        registry.insert(
            "/guide/",
            vec![
                section(
                    "Introduction",
                    vec![
                        link("What is Wire?", "/guide/wire"),
                        link("Getting Started", "/guide/getting-started"),
                        link("Targeting Nodes", "/guide/targeting"),
                    ],
                ),
                section(
                    "Features",
                    vec![
                        link("Secret management", "/guide/keys"),
                        link("Parallelism", "/guide/parallelism"),
                    ],
                ),
            ],
        );
        registry.insert(
            "/reference/",
            vec![section(
                "Reference",
                vec![
                    link("CLI", "/reference/cli"),
                    link("Module Options", "/reference/module"),
                ],
            )],
        );
        registry
    }

    #[test]
    fn test_lookup_returns_sidebar_containing_leaf() {
        let registry = wire_registry();

        let sidebar = registry.lookup("/guide/wire").unwrap();

        assert_eq!(sidebar.prefix, "/guide/");
        assert_eq!(sidebar.sections[0].text, "Introduction");
        assert!(
            sidebar.sections[0]
                .items
                .contains(&link("What is Wire?", "/guide/wire"))
        );
    }

    #[test]
    fn test_lookup_selects_area_by_prefix() {
        let registry = wire_registry();

        let sidebar = registry.lookup("/reference/module").unwrap();

        assert_eq!(sidebar.prefix, "/reference/");
        assert_eq!(sidebar.sections.len(), 1);
    }

    #[test]
    fn test_lookup_no_match_returns_none() {
        let registry = wire_registry();

        assert!(registry.lookup("/").is_none());
        assert!(registry.lookup("/blog/post").is_none());
        assert!(registry.lookup("/guidebook").is_none());
    }

    #[test]
    fn test_lookup_empty_registry_returns_none() {
        assert!(SidebarRegistry::new().lookup("/guide/wire").is_none());
    }

    #[test]
    fn test_lookup_prefers_longest_prefix() {
        let mut registry = wire_registry();
        registry.insert(
            "/guide/advanced/",
            vec![section(
                "Advanced",
                vec![link("Tuning", "/guide/advanced/tuning")],
            )],
        );

        let advanced = registry.lookup("/guide/advanced/tuning").unwrap();
        let guide = registry.lookup("/guide/keys").unwrap();

        assert_eq!(advanced.prefix, "/guide/advanced/");
        assert_eq!(guide.prefix, "/guide/");
    }

    #[test]
    fn test_lookup_root_prefix_is_fallback() {
        let mut registry = wire_registry();
        registry.insert("/", vec![section("Home", vec![link("Home", "/")])]);

        assert_eq!(registry.lookup("/blog/post").unwrap().prefix, "/");
        assert_eq!(registry.lookup("/guide/wire").unwrap().prefix, "/guide/");
    }

    #[test]
    fn test_lookup_area_root_without_trailing_slash() {
        let registry = wire_registry();

        assert_eq!(registry.lookup("/guide").unwrap().prefix, "/guide/");
    }

    #[test]
    fn test_lookup_normalizes_path() {
        let registry = wire_registry();

        assert_eq!(registry.lookup("guide/wire").unwrap().prefix, "/guide/");
        assert_eq!(
            registry.lookup("/reference/cli?tab=2#flags").unwrap().prefix,
            "/reference/"
        );
    }

    #[test]
    fn test_active_finds_section_and_link() {
        let registry = wire_registry();
        let sidebar = registry.lookup("/guide/parallelism").unwrap();

        let (section, link) = sidebar.active("/guide/parallelism.html").unwrap();

        assert_eq!(section.text, "Features");
        assert_eq!(link.text, "Parallelism");
    }

    #[test]
    fn test_active_unknown_page_returns_none() {
        let registry = wire_registry();
        let sidebar = registry.lookup("/guide/unlisted").unwrap();

        assert!(sidebar.active("/guide/unlisted").is_none());
    }

    #[test]
    fn test_contains_link() {
        let registry = wire_registry();
        let sidebar = registry.lookup("/guide/").unwrap();

        assert!(sidebar.contains_link("/guide/keys"));
        assert!(!sidebar.contains_link("/reference/cli"));
    }

    #[test]
    fn test_prefixes_are_ordered() {
        let registry = wire_registry();

        let prefixes: Vec<_> = registry.prefixes().collect();

        assert_eq!(prefixes, vec!["/guide/", "/reference/"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_section_collapsed_serialization() {
        let mut collapsible = section("Use cases", vec![link("Tailscale", "/guide/tailscale")]);
        collapsible.collapsed = Some(true);

        let json = serde_json::to_value(&collapsible).unwrap();
        let plain = serde_json::to_value(section("Intro", Vec::new())).unwrap();

        assert_eq!(json["collapsed"], true);
        assert!(plain.get("collapsed").is_none());
    }

    #[test]
    fn test_normalize_page_path() {
        assert_eq!(normalize_page_path("/guide/wire"), "/guide/wire");
        assert_eq!(normalize_page_path("guide/wire"), "/guide/wire");
        assert_eq!(normalize_page_path("/guide/wire?x=1"), "/guide/wire");
        assert_eq!(normalize_page_path("#top"), "/");
    }
}
