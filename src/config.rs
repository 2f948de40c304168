//! Configuration file handling for convterm.
//!
//! Loads configuration from `<config dir>/convterm/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::console::ConsoleColor;

/// Configuration file structure for convterm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub codec: CodecConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CodecConfig {
    /// Reject binary input whose length is not a multiple of 8 instead of
    /// dropping the trailing digits
    #[serde(default)]
    pub strict_binary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_prompt_color")]
    pub prompt_color: ConsoleColor,
    #[serde(default = "default_error_color")]
    pub error_color: ConsoleColor,
    /// First character is echoed per password character; empty disables echo
    #[serde(default = "default_password_mask")]
    pub password_mask: String,
    /// Window title set by interactive commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt_color: default_prompt_color(),
            error_color: default_error_color(),
            password_mask: default_password_mask(),
            title: None,
        }
    }
}

impl ConsoleConfig {
    /// The mask character for password prompts, if echo is enabled.
    pub fn mask(&self) -> Option<char> {
        self.password_mask.chars().next()
    }
}

fn default_prompt_color() -> ConsoleColor {
    ConsoleColor::Cyan
}

fn default_error_color() -> ConsoleColor {
    ConsoleColor::Red
}

fn default_password_mask() -> String {
    "*".to_string()
}

/// Written by `convterm config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# convterm configuration

[codec]
# Reject binary input whose length is not a multiple of 8
# (by default trailing digits are dropped)
strict_binary = false

[console]
# Colors: black, dark-blue, dark-green, dark-cyan, dark-red, dark-magenta,
# dark-yellow, gray, dark-gray, blue, green, cyan, red, magenta, yellow, white
prompt_color = "cyan"
error_color = "red"

# Character echoed while typing a password; "" echoes nothing
password_mask = "*"

# Window title for interactive commands
# title = "convterm"
"#;

impl Config {
    /// Load configuration from a file path, or the default path when `None`.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the commented default configuration to `path`, creating parent
    /// directories. Refuses to overwrite an existing file.
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(io_err)?;
        log::info!("Wrote default config to {}", path.display());
        Ok(())
    }
}

/// Errors that can occur when loading or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to render config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("convterm").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/convterm/config.toml")
        })
}
