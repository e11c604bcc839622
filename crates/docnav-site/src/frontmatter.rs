//! Page frontmatter.
//!
//! A markdown page may start with a YAML block delimited by `---` lines.
//! Only the keys that affect navigation and theme integrations are read;
//! everything else is left to the rendering framework.

use serde::Deserialize;

/// Navigation-relevant frontmatter keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFrontmatter {
    /// Page title override.
    #[serde(default)]
    pub title: Option<String>,
    /// Show or hide the comment widget.
    #[serde(default)]
    pub comment: Option<bool>,
    /// Show or hide the sidebar.
    #[serde(default)]
    pub sidebar: Option<bool>,
    /// Show or hide the edit link.
    #[serde(default)]
    pub edit_link: Option<bool>,
}

/// Error type for frontmatter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    /// Opening `---` without a closing one.
    #[error("Unterminated frontmatter block")]
    Unterminated,
    /// YAML parsing error.
    #[error("Invalid frontmatter YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl PageFrontmatter {
    /// Parse the frontmatter block of a markdown document.
    ///
    /// Documents without a block (or with an empty one) yield the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is not closed or the YAML is malformed.
    pub fn parse(markdown: &str) -> Result<Self, FrontmatterError> {
        let Some(yaml) = extract_block(markdown)? else {
            return Ok(Self::default());
        };

        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Whether the page shows the sidebar (default: shown).
    #[must_use]
    pub fn shows_sidebar(&self) -> bool {
        self.sidebar.unwrap_or(true)
    }

    /// Whether the page shows the edit link (default: shown).
    #[must_use]
    pub fn shows_edit_link(&self) -> bool {
        self.edit_link.unwrap_or(true)
    }
}

/// Extract the YAML between the opening and closing `---` lines.
fn extract_block(markdown: &str) -> Result<Option<&str>, FrontmatterError> {
    let markdown = markdown.strip_prefix('\u{feff}').unwrap_or(markdown);
    let Some(rest) = markdown
        .strip_prefix("---\n")
        .or_else(|| markdown.strip_prefix("---\r\n"))
    else {
        return Ok(None);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Ok(Some(&rest[..offset]));
        }
        offset += line.len();
    }

    Err(FrontmatterError::Unterminated)
}
