//! Coordinate-to-country matching
//!
//! A country matches a coordinate when *both* axis deltas are strictly below
//! the tolerance:
//!
//! ```text
//! |lat - ref_lat| < tolerance  &&  |lng - ref_lng| < tolerance
//! ```
//!
//! This is a box test in degrees, not a great-circle distance. Two tolerance
//! regimes are in use:
//!
//! - [`Tolerance::PICK`] (`1e-4`): the coordinate *is* a catalog reference
//!   point, so the match degenerates to finding that country again
//! - [`Tolerance::CLICK`] (`1e-1`): free-hand map clicks are imprecise
//!
//! When several countries pass the test, [`TieBreak`] decides. The default
//! returns the first one in catalog (alphabetical) order.

use crate::catalog::{Country, CountryCatalog};
use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Per-axis matching tolerance in degrees
///
/// Always finite and non-negative. A tolerance of zero never matches since the
/// comparison is strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Tolerance for catalog-driven selection
    pub const PICK: Self = Self(1e-4);

    /// Tolerance for free-hand map clicks
    pub const CLICK: Self = Self(1e-1);

    /// Create a tolerance; negative or non-finite values become zero
    #[must_use]
    pub fn new(degrees: f64) -> Self {
        if degrees.is_finite() && degrees > 0.0 {
            Self(degrees)
        } else {
            Self(0.0)
        }
    }

    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// Whether `point` lies inside the tolerance box around `reference`
    #[must_use]
    pub fn admits(self, point: &Coordinate, reference: &Coordinate) -> bool {
        let (d_lat, d_lng) = point.axis_deltas(reference);
        d_lat < self.0 && d_lng < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::CLICK
    }
}

/// Policy for choosing among several matching countries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// First match in catalog order (alphabetical)
    #[default]
    #[serde(rename = "first")]
    FirstInCatalog,

    /// Smallest squared degree distance; equal distances fall back to catalog order
    Nearest,
}

/// Matching parameters for one entry point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatchOptions {
    pub tolerance: Tolerance,
    pub tie_break: TieBreak,
}

impl MatchOptions {
    #[must_use]
    pub const fn new(tolerance: Tolerance, tie_break: TieBreak) -> Self {
        Self {
            tolerance,
            tie_break,
        }
    }
}

/// Find the country matching `coordinate`, first-in-catalog on ties
///
/// Countries without a reference coordinate are ignored. An empty catalog
/// never matches.
#[must_use]
pub fn match_country<'a>(
    coordinate: &Coordinate,
    catalog: &'a CountryCatalog,
    tolerance: Tolerance,
) -> Option<&'a Country> {
    match_country_with(
        coordinate,
        catalog,
        MatchOptions::new(tolerance, TieBreak::FirstInCatalog),
    )
}

/// Find the country matching `coordinate` with an explicit tie-break policy
#[must_use]
pub fn match_country_with<'a>(
    coordinate: &Coordinate,
    catalog: &'a CountryCatalog,
    options: MatchOptions,
) -> Option<&'a Country> {
    let mut candidates = catalog.countries().iter().filter_map(|country| {
        let reference = country.reference?;
        options
            .tolerance
            .admits(coordinate, &reference)
            .then_some((country, reference))
    });

    match options.tie_break {
        TieBreak::FirstInCatalog => candidates.next().map(|(country, _)| country),
        TieBreak::Nearest => candidates
            .min_by(|(_, a), (_, b)| {
                squared_distance(coordinate, a).total_cmp(&squared_distance(coordinate, b))
            })
            .map(|(country, _)| country),
    }
}

fn squared_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let (d_lat, d_lng) = a.axis_deltas(b);
    d_lat * d_lat + d_lng * d_lng
}
