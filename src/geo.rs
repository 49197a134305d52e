//! Geographic coordinate type
//!
//! A `Coordinate` is always finite with latitude in `[-90, 90]` and longitude
//! in `[-180, 180]`. Two constructors exist:
//!
//! - [`Coordinate::new`] rejects anything outside those ranges
//! - [`Coordinate::normalized`] clamps latitude and wraps longitude, which is
//!   what a map click needs (panning across the antimeridian yields
//!   longitudes like `190.0`)

use serde::Serialize;
use thiserror::Error;

/// Errors raised when building a coordinate from raw numbers
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Latitude or longitude is NaN or infinite
    #[error("Coordinate is not a finite number: ({lat}, {lng})")]
    NotFinite { lat: f64, lng: f64 },

    /// Latitude outside [-90, 90]
    #[error("Latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180]
    #[error("Longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),
}

/// A (latitude, longitude) pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both ranges
    ///
    /// # Errors
    ///
    /// Returns `GeoError` if either value is non-finite or out of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeoError::NotFinite { lat, lng });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Create a coordinate from an arbitrary finite pair
    ///
    /// Latitude is clamped into `[-90, 90]`; longitude is wrapped into
    /// `[-180, 180)`. Values already in range are kept as-is, so `180.0`
    /// stays `180.0`.
    ///
    /// # Errors
    ///
    /// Returns `GeoError::NotFinite` for NaN or infinite input.
    pub fn normalized(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeoError::NotFinite { lat, lng });
        }
        let lat = lat.clamp(-90.0, 90.0);
        let lng = if (-180.0..=180.0).contains(&lng) {
            lng
        } else {
            (lng + 180.0).rem_euclid(360.0) - 180.0
        };
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Absolute per-axis deltas to another coordinate, `(|Δlat|, |Δlng|)`
    #[must_use]
    pub fn axis_deltas(&self, other: &Self) -> (f64, f64) {
        ((self.lat - other.lat).abs(), (self.lng - other.lng).abs())
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = GeoError;

    fn try_from((lat, lng): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Coordinate::new(91.0, 0.0),
            Err(GeoError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Coordinate::new(0.0, -180.5),
            Err(GeoError::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn test_new_rejects_nan() {
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0),
            Err(GeoError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_normalized_wraps_longitude() {
        let c = Coordinate::normalized(10.0, 190.0).unwrap();
        assert!((c.lng() - -170.0).abs() < 1e-9);

        let c = Coordinate::normalized(10.0, -540.0).unwrap();
        assert!((c.lng() - -180.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_clamps_latitude() {
        let c = Coordinate::normalized(95.0, 0.0).unwrap();
        assert_eq!(c.lat(), 90.0);
    }

    #[test]
    fn test_normalized_keeps_in_range_values() {
        let c = Coordinate::normalized(46.2276, 2.2137).unwrap();
        assert_eq!(c, Coordinate::new(46.2276, 2.2137).unwrap());
        assert_eq!(Coordinate::normalized(0.0, 180.0).unwrap().lng(), 180.0);
    }

    #[test]
    fn test_normalized_rejects_infinity() {
        assert!(Coordinate::normalized(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_four_decimals() {
        let c = Coordinate::new(46.22764, 2.21372).unwrap();
        assert_eq!(c.to_string(), "46.2276, 2.2137");
    }
}
