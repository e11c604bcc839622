//! Navigation and sidebar composition model for docnav.
//!
//! This crate provides:
//! - [`SiteDefinition`]: the declarative site description (nav bar, sidebars,
//!   edit link, social links, footer, markdown plugins, icons, comments)
//! - [`NavTree`]: top navigation entries, resolved against [`ProjectMetadata`]
//! - [`SidebarRegistry`]: path-prefix keyed sidebars with longest-prefix lookup
//! - [`ValidationReport`]: structural checks run once at load time
//! - [`FrameworkConfig`]: the object handed to the site rendering framework
//! - [`PageFrontmatter`] and [`find_page_source`]: per-page settings read
//!   from the markdown sources
//!
//! # Quick Start
//!
//! ```
//! use docnav_site::{ProjectMetadata, SiteDefinition};
//!
//! let site: SiteDefinition = serde_json::from_str(r#"{
//!     "title": "wire",
//!     "nav": [{ "text": "Guide", "link": "/guide/wire" }],
//!     "sidebar": {
//!         "/guide/": [{
//!             "text": "Introduction",
//!             "items": [{ "text": "What is Wire?", "link": "/guide/wire" }]
//!         }]
//!     }
//! }"#).unwrap();
//!
//! assert!(site.validate().is_clean());
//!
//! let sidebar = site.sidebar.lookup("/guide/wire").unwrap();
//! assert_eq!(sidebar.prefix, "/guide/");
//!
//! let nav = site.nav.resolve(&ProjectMetadata::default());
//! let config = site.to_framework_config(&nav);
//! assert_eq!(config.title, "wire");
//! ```

mod comments;
mod export;
mod frontmatter;
mod icons;
mod nav;
mod sidebar;
mod site;
mod source;
mod theme;
mod validation;

pub use comments::{CommentsConfig, InputPosition, TermMapping};
pub use export::{CommentsExport, FrameworkConfig, MarkdownExport, ThemeConfig, ViteExport, VitePlugin};
pub use frontmatter::{FrontmatterError, PageFrontmatter};
pub use icons::{IconMap, IconSource};
pub use nav::{MetadataField, NavEntry, NavText, NavTree, ProjectMetadata, ResolvedNav, ResolvedNavEntry};
pub use sidebar::{SidebarLink, SidebarMatch, SidebarRegistry, SidebarSection, normalize_page_path};
pub use site::SiteDefinition;
pub use source::find_page_source;
pub use theme::{EditLink, Footer, MarkdownConfig, MarkdownPlugin, SearchConfig, SearchProvider, SocialLink};
pub use validation::{Issue, Severity, ValidationError, ValidationReport};

/// Check whether a link points outside the site.
#[must_use]
pub fn is_external_link(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}
