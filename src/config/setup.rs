//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when geopin is run for the first time.

use super::GeopinConfig;
use crate::view::PageSize;
use config::ConfigError;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for catalog location and page size
///
/// 1. Prompts for the country catalog JSON file (may be left empty)
/// 2. Prompts for the initial page size
/// 3. Creates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup() -> Result<GeopinConfig, ConfigError> {
    println!("Welcome to geopin! Let's set up your country catalog.\n");

    let default_catalog = dirs::data_local_dir()
        .map(|dir| dir.join("geopin").join("countries.json"))
        .map(|path| path.to_string_lossy().to_string())
        .unwrap_or_default();

    let catalog_str: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Country catalog file (leave empty for none)")
        .default(default_catalog)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let sizes: Vec<String> = PageSize::ALL.iter().map(ToString::to_string).collect();
    let default_index = PageSize::ALL
        .iter()
        .position(|size| *size == PageSize::default())
        .unwrap_or(0);
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Points per page")
        .items(&sizes)
        .default(default_index)
        .interact()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = GeopinConfig {
        catalog_path: (!catalog_str.trim().is_empty()).then(|| PathBuf::from(catalog_str.trim())),
        page_size: PageSize::ALL.get(choice).copied().unwrap_or_default(),
        ..GeopinConfig::default()
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
