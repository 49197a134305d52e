//! Points and the append-only point store
//!
//! A `Point` is immutable once built and has no id: its identity is its
//! position in the `PointStore`. Insertion order is the only order the store
//! knows about, and it drives list numbering and "latest point" semantics.

use crate::catalog::{Country, CountryDetails};
use crate::geo::Coordinate;
use serde::Serialize;

/// Display name for points that did not match any country
pub const DEFAULT_POINT_NAME: &str = "Custom point";

/// A user-created marker, optionally enriched with country details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    coordinate: Coordinate,
    display_name: String,
    enriched: bool,
    details: CountryDetails,
}

impl Point {
    /// A point with no country information
    #[must_use]
    pub fn raw(coordinate: Coordinate, placeholder: impl Into<String>) -> Self {
        Self {
            coordinate,
            display_name: placeholder.into(),
            enriched: false,
            details: CountryDetails::default(),
        }
    }

    /// A point carrying a verbatim copy of the country's name and details
    #[must_use]
    pub fn from_country(coordinate: Coordinate, country: &Country) -> Self {
        Self {
            coordinate,
            display_name: country.common_name.clone(),
            enriched: true,
            details: country.details.clone(),
        }
    }

    /// Build from a match result, falling back to a raw point on a miss
    #[must_use]
    pub fn from_match(
        coordinate: Coordinate,
        country: Option<&Country>,
        placeholder: &str,
    ) -> Self {
        match country {
            Some(country) => Self::from_country(coordinate, country),
            None => Self::raw(coordinate, placeholder),
        }
    }

    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether a catalog country was matched when the point was created
    #[must_use]
    pub const fn is_enriched(&self) -> bool {
        self.enriched
    }

    #[must_use]
    pub const fn details(&self) -> &CountryDetails {
        &self.details
    }

    /// Case-insensitive substring test on the display name
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn name_contains_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.display_name.to_lowercase().contains(needle)
    }
}

/// Ordered, append-only collection of points for one session
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a point, returning its position
    ///
    /// Never fails and never touches earlier points.
    pub fn append(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// All points in insertion order
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Most recently appended point
    #[must_use]
    pub fn latest(&self) -> Option<&Point> {
        self.points.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
