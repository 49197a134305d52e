//! Geopin CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (default command)
//! geopin
//! geopin --catalog countries.json shell
//!
//! # Which country is at this coordinate?
//! geopin locate 46.2 2.2
//! geopin locate -14.2 -51.9 --tolerance 0.5 --json
//!
//! # List catalog countries
//! geopin countries fra
//!
//! # Configuration
//! geopin config set page_size=9
//! geopin config get tie_break
//! ```
//!
//! # Configuration
//!
//! On first run, geopin will prompt for initial setup. Configuration is stored
//! in the user's config directory (`~/.config/geopin/config.toml` on Linux).
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=geopin=debug`).

use geopin::{
    GeopinError, Session,
    cli::{Cli, Commands},
    commands, config,
    view::PageSize,
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, GeopinError>;

/// Main entry point for the geopin application
///
/// # Errors
///
/// Returns `GeopinError` if configuration, catalog loading, or the command
/// itself fails.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let mut config = config::GeopinConfig::load_or_setup()?;

    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return commands::config(config, command, quiet);
    }

    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    if let Some(size) = cli.page_size {
        config.page_size = PageSize::try_from(size)?;
    }

    match command {
        Commands::Shell => {
            let catalog = commands::session_catalog(config.catalog_path.as_deref());
            let session = Session::new(config.session_options()).with_catalog(catalog);
            commands::shell(session, quiet)?;
        }
        Commands::Locate {
            lat,
            lng,
            tolerance,
            json,
        } => {
            let catalog = commands::require_catalog(config.catalog_path.as_deref())?;
            commands::locate(
                &catalog,
                lat,
                lng,
                tolerance,
                config.click_options(),
                &config.placeholder_name,
                json,
            )?;
        }
        Commands::Countries { filter } => {
            let catalog = commands::require_catalog(config.catalog_path.as_deref())?;
            commands::countries(&catalog, filter.as_deref(), quiet);
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}
