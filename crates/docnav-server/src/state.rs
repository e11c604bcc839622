//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;

use docnav_site::{ProjectMetadata, ResolvedNav, SiteDefinition};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Loaded site definition.
    pub(crate) site: SiteDefinition,
    /// Nav bar resolved against project metadata.
    pub(crate) nav: ResolvedNav,
    /// Framework configuration object, serialized once at startup.
    pub(crate) framework_config: serde_json::Value,
    /// Documentation source directory.
    pub(crate) source_dir: PathBuf,
}

impl AppState {
    /// Resolve the nav bar and serialize the framework configuration.
    pub(crate) fn new(
        site: SiteDefinition,
        metadata: &ProjectMetadata,
        source_dir: PathBuf,
    ) -> Result<Self, serde_json::Error> {
        let nav = site.nav.resolve(metadata);
        let framework_config = serde_json::to_value(site.to_framework_config(&nav))?;

        Ok(Self {
            site,
            nav,
            framework_config,
            source_dir,
        })
    }
}
