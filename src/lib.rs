//! Geopin - mark points on a world map and browse them
//!
//! This library provides the core of a map-based browsing session: a country
//! catalog, a coordinate matcher that enriches clicked points with country
//! details, an append-only point store, search and pagination over the
//! points, and a camera controller that flies the map to selected points.

use thiserror::Error;

pub mod camera;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod geo;
pub mod matcher;
pub mod output;
pub mod points;
pub mod session;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use catalog::{Country, CountryCatalog, CountryDetails};
pub use geo::Coordinate;
pub use points::{Point, PointStore};
pub use session::{PickOutcome, Session, SessionOptions};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GeopinError {
    /// Invalid coordinate
    #[error("Coordinate error: {0}")]
    Geo(#[from] geo::GeoError),
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Invalid page size or surface
    #[error("View error: {0}")]
    View(#[from] view::ViewError),
    /// Interactive shell failure
    #[error("Shell error: {0}")]
    Shell(#[from] commands::shell::ShellError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
