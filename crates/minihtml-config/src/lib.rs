//! Configuration management for minihtml.
//!
//! Parses `minihtml.toml` configuration files with serde and provides
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
//! - `source.path`
//! - `output.path`
//! - `page.title`
//! - `page.stylesheet`
//! - `page.favicon`
//! - `page.logo`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the article path.
    pub source_path: Option<PathBuf>,
    /// Override the output HTML path.
    pub output_path: Option<PathBuf>,
    /// Override the page title.
    pub title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "minihtml.toml";

/// Article path used when neither the config file nor the CLI sets one.
const DEFAULT_SOURCE_PATH: &str = "minimega/doc/content/articles/api.article";

/// Output path used when neither the config file nor the CLI sets one.
const DEFAULT_OUTPUT_PATH: &str = "index.html";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Article source (path is a relative string from TOML).
    source: SourceConfigRaw,
    /// Output destination (path is a relative string from TOML).
    output: OutputConfigRaw,
    /// Page chrome.
    pub page: PageConfig,

    /// Resolved input and output paths (set after loading).
    #[serde(skip)]
    pub paths: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw source configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    path: Option<String>,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
}

/// Resolved input and output paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    /// Article to convert.
    pub source: PathBuf,
    /// HTML file to write.
    pub output: PathBuf,
}

/// Page chrome configuration.
///
/// Unset fields fall back to the defaults of the page renderer.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
    /// Document title.
    pub title: Option<String>,
    /// Stylesheet href.
    pub stylesheet: Option<String>,
    /// Favicon href.
    pub favicon: Option<String>,
    /// Header banner image.
    pub logo: Option<String>,
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
        /// Config field path (e.g., "`page.title`").
        field: String,
        /// Error message (e.g., "${`API_TITLE`} not set").
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

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `minihtml.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated after the overrides.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
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
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.source_path {
            self.paths.source.clone_from(source);
        }
        if let Some(output) = &settings.output_path {
            self.paths.output.clone_from(output);
        }
        if let Some(title) = &settings.title {
            self.page.title = Some(title.clone());
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            source: SourceConfigRaw::default(),
            output: OutputConfigRaw::default(),
            page: PageConfig::default(),
            paths: PathsConfig {
                source: base.join(DEFAULT_SOURCE_PATH),
                output: base.join(DEFAULT_OUTPUT_PATH),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(title) = &self.page.title {
            require_non_empty(title, "page.title")?;
        }

        if self.paths.source.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "source.path cannot be empty".to_owned(),
            ));
        }
        if self.paths.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output.path cannot be empty".to_owned(),
            ));
        }
        if self.paths.source == self.paths.output {
            return Err(ConfigError::Validation(format!(
                "output.path would overwrite the source article {}",
                self.paths.source.display()
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let fields = [
            (&mut self.source.path, "source.path"),
            (&mut self.output.path, "output.path"),
            (&mut self.page.title, "page.title"),
            (&mut self.page.stylesheet, "page.stylesheet"),
            (&mut self.page.favicon, "page.favicon"),
            (&mut self.page.logo, "page.logo"),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *value = expand::expand_env(value, field)?;
            }
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// Rejects explicitly empty paths, which would otherwise resolve to the
    /// config directory itself.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let resolve = |path: Option<&str>, default: &str, field: &str| match path {
            Some("") => Err(ConfigError::Validation(format!("{field} cannot be empty"))),
            Some(path) => Ok(config_dir.join(path)),
            None => Ok(config_dir.join(default)),
        };

        self.paths = PathsConfig {
            source: resolve(self.source.path.as_deref(), DEFAULT_SOURCE_PATH, "source.path")?,
            output: resolve(self.output.path.as_deref(), DEFAULT_OUTPUT_PATH, "output.path")?,
        };

        Ok(())
    }
}
