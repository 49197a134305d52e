//! Locate command - match a single coordinate against the catalog

use crate::catalog::CountryCatalog;
use crate::geo::Coordinate;
use crate::matcher::{MatchOptions, Tolerance, match_country_with};
use crate::points::Point;
use crate::{GeopinError, output};

type Result<T> = std::result::Result<T, GeopinError>;

/// Build the point a click at `(lat, lng)` would produce
///
/// # Errors
///
/// Returns `GeopinError::Geo` if either number is not finite.
pub fn locate(
    catalog: &CountryCatalog,
    lat: f64,
    lng: f64,
    options: MatchOptions,
    placeholder: &str,
) -> Result<Point> {
    let coordinate = Coordinate::normalized(lat, lng)?;
    let matched = match_country_with(&coordinate, catalog, options);
    Ok(Point::from_match(coordinate, matched, placeholder))
}

/// Execute the locate command
///
/// # Errors
///
/// Returns `GeopinError` if the coordinate is invalid or the point cannot be
/// serialized.
pub fn execute(
    catalog: &CountryCatalog,
    lat: f64,
    lng: f64,
    tolerance: Option<f64>,
    mut options: MatchOptions,
    placeholder: &str,
    json: bool,
) -> Result<()> {
    if let Some(degrees) = tolerance {
        options.tolerance = Tolerance::new(degrees);
    }
    let point = locate(catalog, lat, lng, options, placeholder)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&point)?);
    } else {
        println!("{}", output::point_card(&point));
    }
    Ok(())
}
