//! Configuration management for SAP Bit.
//!
//! Parses `sapbit.toml` with serde and provides auto-discovery of the config
//! file in parent directories. Top-level keys describe the site (language,
//! title, theme, plugins); the `[server]` and `[docs]` tables describe how
//! the tooling runs.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`, `description`
//! - `server.host`
//! - `theme.repo`
//! - every string-valued plugin option

mod expand;
mod site;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use site::{
    NavbarEntry, PluginDescriptor, SidebarGroup, SidebarSection, SiteConfig, ThemeConfig,
};

/// CLI settings that override configuration file values.
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
const CONFIG_FILENAME: &str = "sapbit.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site description consumed by the navigation model.
    #[serde(flatten)]
    pub site: SiteConfig,
    /// Server configuration.
    pub server: ServerConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
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
    /// Directory holding the markdown sources referenced by navbar and sidebar.
    pub source_dir: PathBuf,
}

/// Error loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.repo`").
        field: String,
        /// Error message (e.g., "${`SAPBIT_REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), LoadError> {
    if value.is_empty() {
        return Err(LoadError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sapbit.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the configuration is invalid after CLI overrides.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, LoadError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(LoadError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Relative paths resolve against `base_dir`. Environment variables are
    /// expanded and the result is validated, as with [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, LoadError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_paths(base_dir);
        config.validate()?;
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

    /// Search for config file in current directory and parents.
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
            site: SiteConfig::default(),
            server: ServerConfig::default(),
            docs: DocsConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate tooling configuration values.
    ///
    /// Site content (navbar, sidebar, plugins) is validated separately when
    /// the navigation model is built.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), LoadError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(LoadError::Validation("server.port cannot be 0".to_owned()));
        }
        if self.site.theme.search_max_suggestions == 0 {
            return Err(LoadError::Validation(
                "theme.search_max_suggestions must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), LoadError> {
        expand::expand_in_place(&mut self.site.title, "title")?;
        expand::expand_in_place(&mut self.site.description, "description")?;
        expand::expand_in_place(&mut self.server.host, "server.host")?;

        if let Some(repo) = self.site.theme.repo.as_mut() {
            expand::expand_in_place(repo, "theme.repo")?;
        }

        for plugin in &mut self.site.plugins {
            expand::expand_options(&mut plugin.options, &plugin.name)?;
        }

        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };
    }
}
