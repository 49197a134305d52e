//! Catalog sources
//!
//! A `CatalogSource` hands out an unordered collection of countries. Sorting
//! and de-duplication happen in `CountryCatalog`, not here.
//!
//! The JSON format is the one served by the REST Countries API
//! (`/v3.1/all?fields=name,latlng,population,region,capital,flags`):
//!
//! ```json
//! [{
//!   "name": { "common": "France" },
//!   "latlng": [46.0, 2.0],
//!   "population": 67391582,
//!   "region": "Europe",
//!   "capital": ["Paris"],
//!   "flags": { "png": "https://flagcdn.com/w320/fr.png" }
//! }]
//! ```
//!
//! Every field except `name.common` may be missing or `null`.

use super::error::CatalogError;
use super::{Country, CountryDetails};
use crate::geo::Coordinate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for anything that can supply country records
///
/// Implementations are free to do I/O. Callers that must never fail should go
/// through [`super::CountryCatalog::load_or_empty`].
pub trait CatalogSource {
    /// Fetch all country records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the records cannot be produced.
    fn fetch(&self) -> Result<Vec<Country>, CatalogError>;
}

/// Reads country records from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Country>, CatalogError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_countries(&content)
    }
}

/// In-memory source, mostly useful for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    countries: Vec<Country>,
}

impl StaticSource {
    #[must_use]
    pub const fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

impl CatalogSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Country>, CatalogError> {
        Ok(self.countries.clone())
    }
}

/// Decode a JSON array of country records
///
/// # Errors
///
/// Returns `CatalogError::Decode` if the text is not a JSON array of records
/// with at least `name.common`.
pub fn parse_countries(json: &str) -> Result<Vec<Country>, CatalogError> {
    let raw: Vec<RawCountry> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(Country::from).collect())
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: RawName,
    #[serde(default)]
    latlng: Option<Vec<f64>>,
    #[serde(default)]
    population: Option<u64>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    capital: Option<Vec<String>>,
    #[serde(default)]
    flags: Option<RawFlags>,
}

#[derive(Debug, Deserialize)]
struct RawName {
    common: String,
}

#[derive(Debug, Deserialize)]
struct RawFlags {
    #[serde(default)]
    png: Option<String>,
    #[serde(default)]
    svg: Option<String>,
}

/// Empty strings carry no information, treat them as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        // A record with a malformed coordinate is kept but cannot be matched
        let reference = match raw.latlng.as_deref() {
            Some([lat, lng, ..]) => Coordinate::new(*lat, *lng).ok(),
            _ => None,
        };

        let capital = non_empty(raw.capital.and_then(|c| c.into_iter().next()));
        let flag_url = raw
            .flags
            .and_then(|f| non_empty(f.png).or_else(|| non_empty(f.svg)));

        Self {
            common_name: raw.name.common,
            reference,
            details: CountryDetails {
                population: raw.population,
                region: non_empty(raw.region),
                capital,
                flag_url,
            },
        }
    }
}
