//! Theme settings passed through to the rendering framework.

use serde::{Deserialize, Serialize};

/// Search provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built with the site.
    #[default]
    Local,
}

/// Search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search provider.
    pub provider: SearchProvider,
}

/// "Edit this page" link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditLink {
    /// URL pattern with a `:path` placeholder for the page source path.
    pub pattern: String,
    /// Link text.
    #[serde(default = "default_edit_link_text")]
    pub text: String,
}

fn default_edit_link_text() -> String {
    "Edit this page".to_owned()
}

impl EditLink {
    /// Placeholder replaced with the page source path.
    pub const PATH_PLACEHOLDER: &'static str = ":path";

    /// Build the edit URL for a page source path relative to the docs root.
    ///
    /// ```
    /// use docnav_site::EditLink;
    ///
    /// let edit = EditLink {
    ///     pattern: "https://github.com/wires-org/wire/edit/main/docs/:path".to_owned(),
    ///     text: "Edit this page on GitHub".to_owned(),
    /// };
    /// assert_eq!(
    ///     edit.url_for("guide/wire.md"),
    ///     "https://github.com/wires-org/wire/edit/main/docs/guide/wire.md"
    /// );
    /// ```
    #[must_use]
    pub fn url_for(&self, source_path: &str) -> String {
        self.pattern
            .replace(Self::PATH_PLACEHOLDER, source_path.trim_start_matches('/'))
    }
}

/// Link to an external profile shown in the nav bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (e.g. `github`).
    pub icon: String,
    /// Target URL.
    pub link: String,
}

/// Page footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Footer message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Copyright notice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Markdown extension registered with the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkdownPlugin {
    /// `[^1]` footnote syntax.
    Footnote,
    /// File-type icons on code group tabs (see [`IconMap`](crate::IconMap)).
    GroupIcons,
}

/// Markdown renderer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Plugins in registration order.
    pub plugins: Vec<MarkdownPlugin>,
}

impl MarkdownConfig {
    /// Check if a plugin is registered.
    #[must_use]
    pub fn is_enabled(&self, plugin: MarkdownPlugin) -> bool {
        self.plugins.contains(&plugin)
    }
}
