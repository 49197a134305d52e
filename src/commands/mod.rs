//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and the effective configuration.

pub mod config;
pub mod countries;
pub mod locate;
pub mod shell;

pub use config::execute as config;
pub use countries::execute as countries;
pub use locate::execute as locate;
pub use shell::execute as shell;

use crate::GeopinError;
use crate::catalog::{CountryCatalog, JsonFileSource};
use std::path::Path;
use tracing::warn;

/// Load the catalog for a one-shot command, failing loudly
///
/// # Errors
///
/// Returns `GeopinError::InvalidInput` if no catalog is configured and
/// `GeopinError::Catalog` if it cannot be read.
pub fn require_catalog(path: Option<&Path>) -> Result<CountryCatalog, GeopinError> {
    let path = path.ok_or_else(|| {
        GeopinError::InvalidInput(
            "No catalog configured. Use --catalog <FILE> or 'geopin config set catalog_path=<FILE>'."
                .into(),
        )
    })?;
    Ok(CountryCatalog::load(&JsonFileSource::new(path))?)
}

/// Load the catalog for an interactive session, falling back to empty
#[must_use]
pub fn session_catalog(path: Option<&Path>) -> CountryCatalog {
    match path {
        Some(path) => CountryCatalog::load_or_empty(&JsonFileSource::new(path)),
        None => {
            warn!("No catalog configured; every point will use the placeholder name");
            CountryCatalog::empty()
        }
    }
}
