//! Configuration module for geopin
//!
//! Manages the catalog location, paging defaults and matching tolerances.
//! Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use crate::matcher::{MatchOptions, TieBreak, Tolerance};
use crate::points::DEFAULT_POINT_NAME;
use crate::session::SessionOptions;
use crate::view::PageSize;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `geopin config get|set`
pub const KEYS: [&str; 7] = [
    "catalog_path",
    "page_size",
    "pick_tolerance",
    "click_tolerance",
    "tie_break",
    "placeholder_name",
    "quiet",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeopinConfig {
    /// JSON file with country records
    pub catalog_path: Option<PathBuf>,

    /// Initial page size (3, 6, 9 or 12)
    pub page_size: PageSize,

    /// Tolerance in degrees for catalog picks
    pub pick_tolerance: f64,

    /// Tolerance in degrees for free map clicks
    pub click_tolerance: f64,

    /// Policy when several countries match
    pub tie_break: TieBreak,

    /// Display name for points that match no country
    pub placeholder_name: String,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for GeopinConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: PageSize::default(),
            pick_tolerance: Tolerance::PICK.degrees(),
            click_tolerance: Tolerance::CLICK.degrees(),
            tie_break: TieBreak::default(),
            placeholder_name: DEFAULT_POINT_NAME.to_string(),
            quiet: false,
        }
    }
}

impl GeopinConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("geopin").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, creating it with defaults
    /// when missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Read a single key as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "catalog_path" => self
                .catalog_path
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
            "page_size" => self.page_size.to_string(),
            "pick_tolerance" => self.pick_tolerance.to_string(),
            "click_tolerance" => self.click_tolerance.to_string(),
            "tie_break" => match self.tie_break {
                TieBreak::FirstInCatalog => "first".to_string(),
                TieBreak::Nearest => "nearest".to_string(),
            },
            "placeholder_name" => self.placeholder_name.clone(),
            "quiet" => self.quiet.to_string(),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Update a single key from text (does not save)
    ///
    /// An empty value clears `catalog_path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "catalog_path" => {
                self.catalog_path = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "page_size" => {
                let size: usize = parse(key, value)?;
                self.page_size =
                    PageSize::try_from(size).map_err(|e| ConfigError::Message(e.to_string()))?;
            }
            "pick_tolerance" => self.pick_tolerance = parse_tolerance(key, value)?,
            "click_tolerance" => self.click_tolerance = parse_tolerance(key, value)?,
            "tie_break" => {
                self.tie_break = match value {
                    "first" => TieBreak::FirstInCatalog,
                    "nearest" => TieBreak::Nearest,
                    other => {
                        return Err(ConfigError::Message(format!(
                            "Invalid tie_break '{other}': expected 'first' or 'nearest'"
                        )));
                    }
                };
            }
            "placeholder_name" => {
                if value.is_empty() {
                    return Err(ConfigError::Message(
                        "placeholder_name cannot be empty".to_string(),
                    ));
                }
                self.placeholder_name = value.to_string();
            }
            "quiet" => self.quiet = parse(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Matching options for catalog picks
    #[must_use]
    pub fn pick_options(&self) -> MatchOptions {
        MatchOptions::new(Tolerance::new(self.pick_tolerance), self.tie_break)
    }

    /// Matching options for free map clicks
    #[must_use]
    pub fn click_options(&self) -> MatchOptions {
        MatchOptions::new(Tolerance::new(self.click_tolerance), self.tie_break)
    }

    /// Session tunables derived from this configuration
    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            page_size: self.page_size,
            pick: self.pick_options(),
            click: self.click_options(),
            placeholder: self.placeholder_name.clone(),
        }
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown config key '{key}'. Valid keys: {}",
        KEYS.join(", ")
    ))
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ConfigError::Message(format!("Invalid value '{value}' for {key}: {e}")))
}

fn parse_tolerance(key: &str, value: &str) -> Result<f64, ConfigError> {
    let degrees: f64 = parse(key, value)?;
    if !degrees.is_finite() || degrees < 0.0 {
        return Err(ConfigError::Message(format!(
            "Invalid value '{value}' for {key}: expected a non-negative number of degrees"
        )));
    }
    Ok(degrees)
}
