//! Reference country catalog
//!
//! The catalog is an immutable snapshot built once from a [`CatalogSource`].
//! Countries are kept sorted by common name using Unicode collation, so
//! accented names sit next to their unaccented neighbours. Common names are
//! unique: when a source supplies the same name twice, the first record wins.
//!
//! Countries without a reference coordinate stay in the catalog (they can be
//! listed) but never take part in coordinate matching and cannot be picked.

pub mod error;
pub mod source;

pub use error::CatalogError;
pub use source::{CatalogSource, JsonFileSource, StaticSource, parse_countries};

use crate::geo::Coordinate;
use feruca::Collator;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{info, warn};

/// Optional enrichment fields shared by countries and points
///
/// Every field is independently optional; display code must check each one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountryDetails {
    pub population: Option<u64>,
    pub region: Option<String>,
    pub capital: Option<String>,
    pub flag_url: Option<String>,
}

/// A reference country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    /// Unique key within a catalog
    pub common_name: String,

    /// Representative coordinate, `None` when the source had none
    pub reference: Option<Coordinate>,

    pub details: CountryDetails,
}

impl Country {
    /// Create a country with a reference coordinate and no details
    #[must_use]
    pub fn new(common_name: impl Into<String>, reference: Coordinate) -> Self {
        Self {
            common_name: common_name.into(),
            reference: Some(reference),
            details: CountryDetails::default(),
        }
    }

    /// Attach enrichment details
    #[must_use]
    pub fn with_details(mut self, details: CountryDetails) -> Self {
        self.details = details;
        self
    }
}

/// Order used by the catalog: Unicode collation (root locale), then bytewise
/// so the order is total.
///
/// Accented names sort with their base letters, so "Åland Islands" comes
/// before "Albania".
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    compare_with(&mut Collator::default(), a, b)
}

fn compare_with(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}

/// Sorted, de-duplicated, read-only list of countries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    /// The catalog in effect before any source has been loaded
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            countries: Vec::new(),
        }
    }

    /// Build a catalog from unordered records
    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();

        for country in countries {
            if seen.insert(country.common_name.clone()) {
                unique.push(country);
            } else {
                warn!("Dropping duplicate country '{}'", country.common_name);
            }
        }

        let mut collator = Collator::default();
        unique.sort_by(|a, b| compare_with(&mut collator, &a.common_name, &b.common_name));
        Self { countries: unique }
    }

    /// Load a catalog from a source
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source fails.
    pub fn load(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let catalog = Self::from_countries(source.fetch()?);
        info!("Loaded catalog with {} countries", catalog.len());
        Ok(catalog)
    }

    /// Load a catalog, falling back to an empty one if the source fails
    ///
    /// Matching against the empty catalog always misses, so points are simply
    /// left unenriched.
    pub fn load_or_empty(source: &dyn CatalogSource) -> Self {
        Self::load(source).unwrap_or_else(|e| {
            warn!("Country catalog unavailable, continuing without enrichment: {e}");
            Self::empty()
        })
    }

    /// All countries in catalog order
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Look up a country by exact common name
    #[must_use]
    pub fn get(&self, common_name: &str) -> Option<&Country> {
        let mut collator = Collator::default();
        self.countries
            .binary_search_by(|c| compare_with(&mut collator, &c.common_name, common_name))
            .ok()
            .map(|idx| &self.countries[idx])
    }

    /// Countries that can be offered in a selector (those with a coordinate)
    pub fn selectable(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter().filter(|c| c.reference.is_some())
    }

    /// Countries whose common name contains `term`, case-insensitively
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Country> {
        let needle = term.to_lowercase();
        self.countries
            .iter()
            .filter(|c| c.common_name.to_lowercase().contains(&needle))
            .collect()
    }
}
