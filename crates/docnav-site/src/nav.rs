//! Top navigation bar.
//!
//! The nav bar is a fixed editorial list of links and dropdown groups.
//! A label may be sourced from [`ProjectMetadata`] instead of being written
//! literally, which is how the version dropdown gets its text.
//!
//! # Example
//!
//! ```
//! use docnav_site::{MetadataField, NavEntry, NavText, NavTree, ProjectMetadata};
//!
//! let tree = NavTree::new(vec![NavEntry::Group {
//!     text: NavText::Metadata { from: MetadataField::Version },
//!     items: vec![NavEntry::link("Changelog", "https://example.com/CHANGELOG.md")],
//! }]);
//!
//! let metadata = ProjectMetadata { version: Some("1.0.0".to_owned()), ..Default::default() };
//! let nav = tree.resolve(&metadata);
//! assert_eq!(nav.entries()[0].text(), "1.0.0");
//! ```

use serde::{Deserialize, Serialize};

/// Project metadata fields a nav label can be read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataField {
    /// Package version.
    Version,
    /// Package name.
    Name,
}

impl MetadataField {
    /// Field name as it appears in the metadata file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Name => "name",
        }
    }
}

/// Project metadata read once at load time (e.g. from `package.json`).
///
/// Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectMetadata {
    /// Package name.
    #[serde(default)]
    pub name: Option<String>,
    /// Package version.
    #[serde(default)]
    pub version: Option<String>,
}

impl ProjectMetadata {
    /// Parse metadata from JSON content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a JSON object.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Get a metadata field value.
    #[must_use]
    pub fn field(&self, field: MetadataField) -> Option<&str> {
        match field {
            MetadataField::Version => self.version.as_deref(),
            MetadataField::Name => self.name.as_deref(),
        }
    }
}

/// Label of a nav entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavText {
    /// Literal label.
    Literal(String),
    /// Label read from project metadata.
    Metadata {
        /// Metadata field to read.
        from: MetadataField,
    },
}

impl NavText {
    /// Literal label text, `None` for metadata-sourced labels.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            Self::Metadata { .. } => None,
        }
    }

    fn resolve(&self, metadata: &ProjectMetadata) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Metadata { from } => {
                if let Some(value) = metadata.field(*from) {
                    value.to_owned()
                } else {
                    tracing::warn!(
                        field = from.as_str(),
                        "Project metadata field missing, nav label will be empty"
                    );
                    String::new()
                }
            }
        }
    }
}

impl From<&str> for NavText {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_owned())
    }
}

/// Nav bar entry as declared in configuration.
///
/// An entry has either a `link` or `items`, never both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawNavEntry")]
pub enum NavEntry {
    /// Leaf link.
    Link {
        /// Display text.
        text: NavText,
        /// Link target.
        link: String,
    },
    /// Dropdown group.
    Group {
        /// Display text.
        text: NavText,
        /// Nested entries.
        items: Vec<NavEntry>,
    },
}

/// Nav entry fields before the link/group shape is checked.
#[derive(Deserialize)]
struct RawNavEntry {
    text: NavText,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    items: Option<Vec<NavEntry>>,
}

impl TryFrom<RawNavEntry> for NavEntry {
    type Error = String;

    fn try_from(raw: RawNavEntry) -> Result<Self, Self::Error> {
        match (raw.link, raw.items) {
            (Some(link), None) => Ok(Self::Link {
                text: raw.text,
                link,
            }),
            (None, Some(items)) => Ok(Self::Group {
                text: raw.text,
                items,
            }),
            (Some(_), Some(_)) => {
                Err("nav entry cannot have both `link` and `items`".to_owned())
            }
            (None, None) => Err("nav entry needs either `link` or `items`".to_owned()),
        }
    }
}

impl NavEntry {
    /// Create a leaf link with a literal label.
    #[must_use]
    pub fn link(text: &str, link: &str) -> Self {
        Self::Link {
            text: text.into(),
            link: link.to_owned(),
        }
    }

    /// Entry label.
    #[must_use]
    pub fn text(&self) -> &NavText {
        match self {
            Self::Link { text, .. } | Self::Group { text, .. } => text,
        }
    }

    fn resolve(&self, metadata: &ProjectMetadata) -> ResolvedNavEntry {
        match self {
            Self::Link { text, link } => ResolvedNavEntry::Link {
                text: text.resolve(metadata),
                link: link.clone(),
            },
            Self::Group { text, items } => ResolvedNavEntry::Group {
                text: text.resolve(metadata),
                items: items.iter().map(|item| item.resolve(metadata)).collect(),
            },
        }
    }
}

/// Ordered nav bar entries as declared in configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavTree {
    entries: Vec<NavEntry>,
}

impl NavTree {
    /// Create a nav tree from entries.
    #[must_use]
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self { entries }
    }

    /// Declared entries in order.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Check if the nav bar has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve metadata-sourced labels.
    ///
    /// A missing metadata field renders as an empty label.
    #[must_use]
    pub fn resolve(&self, metadata: &ProjectMetadata) -> ResolvedNav {
        ResolvedNav {
            entries: self
                .entries
                .iter()
                .map(|entry| entry.resolve(metadata))
                .collect(),
        }
    }
}

/// Nav bar entry with plain-text labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedNavEntry {
    /// Leaf link.
    Link {
        /// Display text.
        text: String,
        /// Link target.
        link: String,
    },
    /// Dropdown group.
    Group {
        /// Display text.
        text: String,
        /// Nested entries.
        items: Vec<ResolvedNavEntry>,
    },
}

impl ResolvedNavEntry {
    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link { text, .. } | Self::Group { text, .. } => text,
        }
    }
}

/// Nav bar rendered identically on every page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedNav {
    entries: Vec<ResolvedNavEntry>,
}

impl ResolvedNav {
    /// Entries in order.
    #[must_use]
    pub fn entries(&self) -> &[ResolvedNavEntry] {
        &self.entries
    }
}
