//! File-type icons for code group tabs.
//!
//! Code group tabs are labelled with a file name (`hive.nix`,
//! `configuration.nix`) or a free label (`nixos`, `home`). The icon map
//! assigns an icon to a label by exact key or, failing that, by the longest
//! key the label ends with.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where an icon comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconSource {
    /// Icon from an icon set (e.g. `vscode-icons:file-type-nix`).
    Named(String),
    /// Local SVG file.
    Local {
        /// Path to the SVG file.
        local: PathBuf,
    },
}

/// Icon assignments keyed by label, file name or file suffix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconMap {
    icons: BTreeMap<String, IconSource>,
}

impl IconMap {
    /// Create an empty icon map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an icon to a key.
    pub fn insert(&mut self, key: impl Into<String>, source: IconSource) {
        self.icons.insert(key.into(), source);
    }

    /// Iterate over keys and icons.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IconSource)> {
        self.icons.iter().map(|(key, source)| (key.as_str(), source))
    }

    /// Check if no icon is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Find the icon for a code group label.
    ///
    /// An exact key wins; otherwise the longest key that ends the label
    /// (compared case-insensitively) is used.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<&IconSource> {
        if let Some(source) = self.icons.get(label) {
            return Some(source);
        }

        let label = label.to_lowercase();
        self.icons
            .iter()
            .filter(|(key, _)| !key.is_empty() && label.ends_with(&key.to_lowercase()))
            .max_by_key(|(key, _)| key.len())
            .map(|(_, source)| source)
    }

    /// Resolve relative local icon paths against a base directory.
    pub fn resolve_local_paths(&mut self, base: &Path) {
        for source in self.icons.values_mut() {
            if let IconSource::Local { local } = source
                && local.is_relative()
            {
                *local = base.join(&*local);
            }
        }
    }

    /// Local icon files that do not exist on disk.
    #[must_use]
    pub fn missing_local_files(&self) -> Vec<(&str, &Path)> {
        self.icons
            .iter()
            .filter_map(|(key, source)| match source {
                IconSource::Local { local } if !local.exists() => {
                    Some((key.as_str(), local.as_path()))
                }
                _ => None,
            })
            .collect()
    }
}
