//! Discussion-backed comment widget.
//!
//! Comments are stored as discussions in a repository category. The widget
//! is embedded below page content; whether a page shows it depends on the
//! site default, the page frontmatter and the home page switch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::PageFrontmatter;
use crate::sidebar::normalize_page_path;

/// How a page is matched to its discussion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermMapping {
    /// Page pathname.
    #[default]
    #[serde(rename = "pathname")]
    Pathname,
    /// Full page URL.
    #[serde(rename = "url")]
    Url,
    /// Page `<title>`.
    #[serde(rename = "title")]
    Title,
    /// Page `og:title` meta tag.
    #[serde(rename = "og:title")]
    OgTitle,
    /// Fixed search term.
    #[serde(rename = "specific")]
    Specific,
    /// Fixed discussion number.
    #[serde(rename = "number")]
    Number,
}

impl TermMapping {
    /// Value used in the widget's `data-mapping` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pathname => "pathname",
            Self::Url => "url",
            Self::Title => "title",
            Self::OgTitle => "og:title",
            Self::Specific => "specific",
            Self::Number => "number",
        }
    }
}

/// Where the comment input box is placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPosition {
    /// Above existing comments.
    #[default]
    Top,
    /// Below existing comments.
    Bottom,
}

impl InputPosition {
    fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Comment widget configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentsConfig {
    /// Repository holding the discussions (`owner/name`).
    pub repo: String,
    /// Repository node id.
    pub repo_id: String,
    /// Discussion category name.
    #[serde(default = "default_category")]
    pub category: String,
    /// Discussion category node id.
    pub category_id: String,
    /// Page to discussion mapping.
    #[serde(default)]
    pub mapping: TermMapping,
    /// Comment input placement.
    #[serde(default)]
    pub input_position: InputPosition,
    /// Widget language when the page locale has no entry in `locales`.
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Page locale to widget language.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub locales: BTreeMap<String, String>,
    /// Show comments on the home page.
    #[serde(default)]
    pub home_page_show_comment: bool,
    /// Widget theme in light mode.
    #[serde(default = "default_light_theme")]
    pub light_theme: String,
    /// Widget theme in dark mode.
    #[serde(default = "default_dark_theme")]
    pub dark_theme: String,
    /// Show comments on pages without a `comment` frontmatter key.
    #[serde(default)]
    pub enabled_by_default: bool,
}

fn default_category() -> String {
    "General".to_owned()
}

fn default_lang() -> String {
    "en".to_owned()
}

fn default_light_theme() -> String {
    "light".to_owned()
}

fn default_dark_theme() -> String {
    "transparent_dark".to_owned()
}

impl CommentsConfig {
    /// Decide whether a page shows the comment widget.
    ///
    /// The home page shows comments only when `home_page_show_comment` is set.
    /// Elsewhere the frontmatter `comment` key wins over `enabled_by_default`.
    #[must_use]
    pub fn is_enabled_for(&self, page_path: &str, frontmatter: Option<&PageFrontmatter>) -> bool {
        if is_home_page(page_path) && !self.home_page_show_comment {
            return false;
        }

        frontmatter
            .and_then(|fm| fm.comment)
            .unwrap_or(self.enabled_by_default)
    }

    /// Widget language for a page locale.
    #[must_use]
    pub fn lang_for(&self, locale: Option<&str>) -> &str {
        locale
            .and_then(|locale| self.locales.get(locale))
            .unwrap_or(&self.lang)
    }

    /// `data-*` attributes of the widget script tag.
    #[must_use]
    pub fn embed_attributes(&self, locale: Option<&str>, dark: bool) -> BTreeMap<&'static str, String> {
        let theme = if dark {
            &self.dark_theme
        } else {
            &self.light_theme
        };

        BTreeMap::from([
            ("data-repo", self.repo.clone()),
            ("data-repo-id", self.repo_id.clone()),
            ("data-category", self.category.clone()),
            ("data-category-id", self.category_id.clone()),
            ("data-mapping", self.mapping.as_str().to_owned()),
            ("data-strict", "0".to_owned()),
            ("data-reactions-enabled", "1".to_owned()),
            ("data-emit-metadata", "0".to_owned()),
            ("data-input-position", self.input_position.as_str().to_owned()),
            ("data-theme", theme.clone()),
            ("data-lang", self.lang_for(locale).to_owned()),
        ])
    }
}

fn is_home_page(page_path: &str) -> bool {
    matches!(
        normalize_page_path(page_path).as_str(),
        "/" | "/index" | "/index.md" | "/index.html"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn wire_comments() -> CommentsConfig {
        CommentsConfig {
            repo: "wires-org/wire".to_owned(),
            repo_id: "R_kgDOMQQbzw".to_owned(),
            category: "giscus".to_owned(),
            category_id: "DIC_kwDOMQQbz84Co4vv".to_owned(),
            mapping: TermMapping::Pathname,
            input_position: InputPosition::Top,
            lang: "en".to_owned(),
            locales: BTreeMap::from([("en-US".to_owned(), "en".to_owned())]),
            home_page_show_comment: false,
            light_theme: "light".to_owned(),
            dark_theme: "transparent_dark".to_owned(),
            enabled_by_default: false,
        }
    }

    fn frontmatter(comment: Option<bool>) -> PageFrontmatter {
        PageFrontmatter {
            comment,
            ..Default::default()
        }
    }

    #[test]
    fn test_disabled_by_default() {
        let comments = wire_comments();

        assert!(!comments.is_enabled_for("/guide/wire", None));
        assert!(!comments.is_enabled_for("/guide/wire", Some(&frontmatter(None))));
    }

    #[test]
    fn test_frontmatter_enables_comments() {
        let comments = wire_comments();

        assert!(comments.is_enabled_for("/guide/wire", Some(&frontmatter(Some(true)))));
    }

    #[test]
    fn test_frontmatter_disables_comments() {
        let comments = CommentsConfig {
            enabled_by_default: true,
            ..wire_comments()
        };

        assert!(comments.is_enabled_for("/guide/wire", None));
        assert!(!comments.is_enabled_for("/guide/wire", Some(&frontmatter(Some(false)))));
    }

    #[test]
    fn test_home_page_hidden_unless_enabled() {
        let comments = wire_comments();
        let enabled = Some(frontmatter(Some(true)));

        assert!(!comments.is_enabled_for("/", enabled.as_ref()));
        assert!(!comments.is_enabled_for("/index.html", enabled.as_ref()));

        let comments = CommentsConfig {
            home_page_show_comment: true,
            ..wire_comments()
        };
        assert!(comments.is_enabled_for("/", enabled.as_ref()));
    }

    #[test]
    fn test_lang_for_locale() {
        let comments = wire_comments();

        assert_eq!(comments.lang_for(Some("en-US")), "en");
        assert_eq!(comments.lang_for(Some("de-DE")), "en");
        assert_eq!(comments.lang_for(None), "en");
    }

    #[test]
    fn test_embed_attributes() {
        let comments = wire_comments();

        let attrs = comments.embed_attributes(Some("en-US"), true);

        assert_eq!(attrs["data-repo"], "wires-org/wire");
        assert_eq!(attrs["data-repo-id"], "R_kgDOMQQbzw");
        assert_eq!(attrs["data-category"], "giscus");
        assert_eq!(attrs["data-category-id"], "DIC_kwDOMQQbz84Co4vv");
        assert_eq!(attrs["data-mapping"], "pathname");
        assert_eq!(attrs["data-input-position"], "top");
        assert_eq!(attrs["data-theme"], "transparent_dark");
        assert_eq!(attrs["data-lang"], "en");
    }

    #[test]
    fn test_embed_attributes_light_theme() {
        let attrs = wire_comments().embed_attributes(None, false);

        assert_eq!(attrs["data-theme"], "light");
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{
            "repo": "wires-org/wire",
            "repo_id": "R_1",
            "category_id": "DIC_1"
        }"#;

        let comments: CommentsConfig = serde_json::from_str(json).unwrap();

        assert_eq!(comments.category, "General");
        assert_eq!(comments.mapping, TermMapping::Pathname);
        assert_eq!(comments.input_position, InputPosition::Top);
        assert_eq!(comments.lang, "en");
        assert_eq!(comments.dark_theme, "transparent_dark");
        assert!(!comments.home_page_show_comment);
        assert!(!comments.enabled_by_default);
    }

    #[test]
    fn test_term_mapping_og_title() {
        let mapping: TermMapping = serde_json::from_str(r#""og:title""#).unwrap();

        assert_eq!(mapping, TermMapping::OgTitle);
        assert_eq!(mapping.as_str(), "og:title");
    }
}
