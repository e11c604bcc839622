//! Configuration management for docnav.
//!
//! Parses `docnav.toml` with serde and provides auto-discovery of the config
//! file in parent directories. The `[site]` table holds the
//! [`SiteDefinition`]; it is validated once at load time and loading fails
//! on any validation error. Warnings are logged and kept available through
//! [`Config::validation_report`].
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `site.title`
//! - `site.comments.repo_id`
//! - `site.comments.category_id`

mod expand;

use std::path::{Path, PathBuf};

use docnav_site::{ProjectMetadata, SiteDefinition, ValidationError, ValidationReport};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site definition.
    pub site: SiteDefinition,
    docs: DocsConfigRaw,
    metadata: MetadataConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved metadata configuration (set after loading).
    #[serde(skip)]
    pub metadata_resolved: MetadataConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown pages.
    pub source_dir: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct MetadataConfigRaw {
    package: Option<String>,
}

/// Resolved project metadata configuration.
#[derive(Debug, Default)]
pub struct MetadataConfig {
    /// JSON package file providing `version` and `name`.
    pub package: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error outside the site definition.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Site definition failed validation.
    #[error("Invalid site definition: {0}")]
    Site(#[from] ValidationError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`DOCNAV_HOST`} not set").
        message: String,
    },
    /// Project metadata file exists but is not valid JSON.
    #[error("Invalid project metadata in {}: {source}", .path.display())]
    Metadata {
        /// Metadata file path.
        path: PathBuf,
        /// Parse error.
        #[source]
        source: serde_json::Error,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents,
    /// falling back to an empty site rooted at the current directory.
    ///
    /// CLI settings are applied after loading and path resolution.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// an environment variable is missing or the site definition is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Directory containing the config file, or `.` for defaults.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(Path::new("."))
    }

    /// Run site validation and return every issue, warnings included.
    #[must_use]
    pub fn validation_report(&self) -> ValidationReport {
        self.site.validate()
    }

    /// Read project metadata from the configured package file.
    ///
    /// A missing file yields empty metadata and a warning.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, or
    /// `ConfigError::Metadata` if it is not a JSON object.
    pub fn load_project_metadata(&self) -> Result<ProjectMetadata, ConfigError> {
        let path = &self.metadata_resolved.package;
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Project metadata file not found");
            return Ok(ProjectMetadata::default());
        }

        let content = std::fs::read_to_string(path)?;
        ProjectMetadata::from_json(&content).map_err(|source| ConfigError::Metadata {
            path: path.clone(),
            source,
        })
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteDefinition::default(),
            docs: DocsConfigRaw::default(),
            metadata: MetadataConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            metadata_resolved: MetadataConfig {
                package: base.join("package.json"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        for (key, local) in config.site.icons.missing_local_files() {
            tracing::warn!(icon = key, path = %local.display(), "Local icon file not found");
        }

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Site warnings are logged; only errors fail.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for invalid server settings and
    /// `ConfigError::Site` when the site definition has errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;

        let report = self.site.validate().into_result(false)?;
        for issue in report.warnings() {
            tracing::warn!(location = %issue.location, "{}", issue.message);
        }

        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;

        if let Some(ref mut comments) = self.site.comments {
            comments.repo_id = expand::expand_env(&comments.repo_id, "site.comments.repo_id")?;
            comments.category_id =
                expand::expand_env(&comments.category_id, "site.comments.category_id")?;
        }

        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
        };
        self.metadata_resolved = MetadataConfig {
            package: resolve(self.metadata.package.as_deref(), "package.json"),
        };
        self.site.icons.resolve_local_paths(config_dir);
    }
}
