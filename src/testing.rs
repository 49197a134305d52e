//! Testing utilities for geopin
//!
//! Fixtures shared by the unit tests: a small country catalog, a map surface
//! that records camera commands, a failing catalog source, and a temporary
//! catalog file.
//!
//! Only available when compiled with `cfg(test)`.

use crate::camera::{FlyTo, MapSurface};
use crate::catalog::{CatalogError, CatalogSource, Country, CountryCatalog, CountryDetails};
use crate::geo::Coordinate;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Small catalog used across tests
///
/// Contains Armenia, Brazil, France (with full details), Japan, and
/// "Nowhere Land" which has no reference coordinate.
///
/// # Panics
/// Panics if a hard-coded coordinate is invalid.
#[must_use]
pub fn sample_catalog() -> CountryCatalog {
    let coord = |lat, lng| Coordinate::new(lat, lng).expect("valid fixture coordinate");

    let france = Country::new("France", coord(46.2276, 2.2137)).with_details(CountryDetails {
        population: Some(67_391_582),
        region: Some("Europe".to_string()),
        capital: Some("Paris".to_string()),
        flag_url: Some("https://flagcdn.com/w320/fr.png".to_string()),
    });
    let armenia = Country::new("Armenia", coord(40.0690, 45.0382)).with_details(CountryDetails {
        population: Some(2_963_234),
        region: Some("Asia".to_string()),
        capital: Some("Yerevan".to_string()),
        flag_url: None,
    });
    let nowhere = Country {
        common_name: "Nowhere Land".to_string(),
        reference: None,
        details: CountryDetails::default(),
    };

    CountryCatalog::from_countries(vec![
        france,
        Country::new("Japan", coord(36.2048, 138.2529)),
        armenia,
        Country::new("Brazil", coord(-14.2350, -51.9253)),
        nowhere,
    ])
}

/// Map surface that records every fly-to it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingMap {
    pub commands: Vec<FlyTo>,
}

impl MapSurface for RecordingMap {
    fn fly_to(&mut self, command: FlyTo) {
        self.commands.push(command);
    }
}

/// Catalog source that always fails, like an unreachable endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSource;

impl CatalogSource for FailingSource {
    fn fetch(&self) -> Result<Vec<Country>, CatalogError> {
        Err(CatalogError::Unavailable("source offline".to_string()))
    }
}

/// RAII guard for a temporary catalog JSON file
///
/// The file is removed when the guard is dropped.
pub struct TempCatalogFile {
    file: NamedTempFile,
}

impl TempCatalogFile {
    /// Write `content` to a fresh temporary file
    ///
    /// # Errors
    /// Returns an `io::Error` if the file cannot be created or written.
    pub fn create(content: &str) -> io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(Self { file })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_contents() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.selectable().count(), 4);
        assert_eq!(catalog.countries()[0].common_name, "Armenia");
    }

    #[test]
    fn test_temp_catalog_file_cleanup() {
        let path = {
            let file = TempCatalogFile::create("[]").unwrap();
            assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "[]");
            file.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
