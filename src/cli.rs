//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for geopin using the `clap` crate.
//!
//! # Commands
//!
//! - **shell**: Interactive session for marking and browsing points (default)
//! - **locate**: Match one coordinate against the catalog and print the result
//! - **countries**: List catalog entries, optionally filtered
//! - **config**: Read or write configuration keys
//!
//! # Examples
//!
//! ```no_run
//! use geopin::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::Locate { lat, lng, .. } => println!("{lat}, {lng}"),
//!     _ => {}
//! }
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., page_size=9)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., tie_break)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the config file location
    Path,
}

#[derive(Parser, Debug)]
#[command(name = "geopin")]
#[command(about = "Mark points on a world map and browse them", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Country catalog JSON file (overrides config)
    #[arg(long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Points per page: 3, 6, 9 or 12 (overrides config)
    #[arg(long = "page-size", value_name = "N", global = true)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Interactive session (default)
    #[command(visible_alias = "s")]
    Shell,

    /// Find the country at a coordinate
    #[command(visible_alias = "l")]
    Locate {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// Match tolerance in degrees (defaults to the configured click tolerance)
        #[arg(short = 't', long = "tolerance")]
        tolerance: Option<f64>,

        /// Print the point as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// List catalog countries
    #[command(visible_alias = "c")]
    Countries {
        /// Case-insensitive name filter
        #[arg(value_name = "FILTER")]
        filter: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to the interactive shell
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Shell)
    }
}
