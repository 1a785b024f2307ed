//! Configuration management for docpost.
//!
//! Parses `docpost.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `tabs.class_prefix`
//! - `tabs.panel_id_prefix`

mod expand;

use std::path::{Path, PathBuf};

use docpost_annotate::AnnotateOptions;
use docpost_tabs::TabsOptions;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override tabifier enabled flag.
    pub tabs_enabled: Option<bool>,
    /// Override every annotation rule at once.
    pub annotate_enabled: Option<bool>,
    /// Override the tab widget class prefix.
    pub class_prefix: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docpost.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tabifier configuration.
    pub tabs: TabsConfig,
    /// Annotation rule configuration.
    pub annotate: AnnotateConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Tabifier configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Whether level-4 heading runs are turned into tab widgets.
    pub enabled: bool,
    /// Block class of the tab widget.
    pub class_prefix: String,
    /// Prefix of generated panel ids.
    pub panel_id_prefix: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        let options = TabsOptions::default();
        Self {
            enabled: true,
            class_prefix: options.class_prefix,
            panel_id_prefix: options.panel_id_prefix,
        }
    }
}

impl TabsConfig {
    /// Tabifier options for this configuration.
    #[must_use]
    pub fn options(&self) -> TabsOptions {
        TabsOptions {
            class_prefix: self.class_prefix.clone(),
            panel_id_prefix: self.panel_id_prefix.clone(),
        }
    }
}

/// Annotation rule configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)] // One switch per independent rule
pub struct AnnotateConfig {
    /// Apply callout classes (`note`, `warning`, ...).
    pub callouts: bool,
    /// Apply spec directive classes (`spec-must`, ...).
    pub directives: bool,
    /// Apply Glue headline and table classes.
    pub glue: bool,
    /// Apply AIP page layout fixes (state banner, listings, summary table).
    pub aip: bool,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        let options = AnnotateOptions::default();
        Self {
            callouts: options.callouts,
            directives: options.directives,
            glue: options.glue,
            aip: options.aip,
        }
    }
}

impl AnnotateConfig {
    #[must_use]
    pub fn options(&self) -> AnnotateOptions {
        AnnotateOptions {
            callouts: self.callouts,
            directives: self.directives,
            glue: self.glue,
            aip: self.aip,
        }
    }
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
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`tabs.class_prefix`").
        field: String,
        /// Error message (e.g., "${`TABS_PREFIX`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a string to be usable inside an HTML attribute token.
fn require_attribute_token(value: &str, field: &str) -> Result<(), ConfigError> {
    if value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'))
    {
        return Err(ConfigError::Validation(format!(
            "{field} must not contain whitespace, quotes or markup characters"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docpost.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(enabled) = settings.tabs_enabled {
            self.tabs.enabled = enabled;
        }
        if let Some(enabled) = settings.annotate_enabled {
            self.annotate.callouts = enabled;
            self.annotate.directives = enabled;
            self.annotate.glue = enabled;
            self.annotate.aip = enabled;
        }
        if let Some(prefix) = &settings.class_prefix {
            self.tabs.class_prefix.clone_from(prefix);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.tabs.class_prefix, "tabs.class_prefix")?;
        require_attribute_token(&self.tabs.class_prefix, "tabs.class_prefix")?;
        require_non_empty(&self.tabs.panel_id_prefix, "tabs.panel_id_prefix")?;
        require_attribute_token(&self.tabs.panel_id_prefix, "tabs.panel_id_prefix")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.tabs.class_prefix = expand::expand_env(&self.tabs.class_prefix, "tabs.class_prefix")?;
        self.tabs.panel_id_prefix =
            expand::expand_env(&self.tabs.panel_id_prefix, "tabs.panel_id_prefix")?;
        Ok(())
    }
}
