//! Integration tests for geopin
//!
//! These tests drive a full session through the public API: a catalog loaded
//! from a temporary JSON file, clicks and picks, search and pagination, and
//! the camera commands they produce.

use geopin::camera::{FlyTo, MapSurface};
use geopin::catalog::{CatalogSource, CountryCatalog, JsonFileSource};
use geopin::commands::shell::{Flow, Shell, ShellCommand};
use geopin::config::GeopinConfig;
use geopin::matcher::{TieBreak, Tolerance};
use geopin::view::{PageSize, Surface, ViewStatus};
use geopin::{Coordinate, PickOutcome, Session, SessionOptions};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"[
    {
        "name": { "common": "France" },
        "latlng": [46.2276, 2.2137],
        "population": 67391582,
        "region": "Europe",
        "capital": ["Paris"],
        "flags": { "png": "https://flagcdn.com/w320/fr.png" }
    },
    {
        "name": { "common": "Armenia" },
        "latlng": [40.0690, 45.0382],
        "population": 2963234,
        "region": "Asia",
        "capital": ["Yerevan"]
    },
    {
        "name": { "common": "Antarctica" },
        "population": 1000,
        "region": "Antarctic"
    },
    {
        "name": { "common": "France" },
        "latlng": [0.0, 0.0]
    }
]"#;

#[derive(Default)]
struct RecordingMap {
    commands: Vec<FlyTo>,
}

impl MapSurface for RecordingMap {
    fn fly_to(&mut self, command: FlyTo) {
        self.commands.push(command);
    }
}

/// Helper that writes the catalog into a temp dir
fn write_catalog(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("countries.json");
    fs::write(&path, CATALOG_JSON).unwrap();
    path
}

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

fn loaded_session(options: SessionOptions) -> (Session, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir);
    let mut session = Session::new(options);
    session.load_catalog(&JsonFileSource::new(path));
    (session, dir)
}

#[test]
fn test_catalog_from_file_is_sorted_and_deduplicated() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir);

    let raw = JsonFileSource::new(&path).fetch().unwrap();
    assert_eq!(raw.len(), 4);

    let catalog = CountryCatalog::load(&JsonFileSource::new(&path)).unwrap();
    let names: Vec<&str> = catalog
        .countries()
        .iter()
        .map(|c| c.common_name.as_str())
        .collect();
    assert_eq!(names, vec!["Antarctica", "Armenia", "France"]);
    assert_eq!(
        catalog.get("France").unwrap().reference,
        Some(coord(46.2276, 2.2137))
    );
    assert_eq!(catalog.selectable().count(), 2);
}

#[test]
fn test_missing_catalog_file_gives_usable_session() {
    let mut session = Session::default();
    session.load_catalog(&JsonFileSource::new("no/such/countries.json"));

    assert!(session.catalog().is_empty());
    let index = session.click(coord(46.2276, 2.2137));
    assert_eq!(
        session.store().get(index).unwrap().display_name(),
        "Custom point"
    );
}

#[test]
fn test_tight_and_loose_click_scenario() {
    let mut options = SessionOptions::default();
    options.click.tolerance = Tolerance::PICK;
    let (mut tight, _dir) = loaded_session(options);

    let index = tight.click(coord(46.2276, 2.2137));
    assert_eq!(tight.store().get(index).unwrap().display_name(), "France");

    let (mut loose, _dir2) = loaded_session(SessionOptions::default());
    let index = loose.click(coord(0.0, 0.0));
    let point = loose.store().get(index).unwrap();
    assert_eq!(point.display_name(), "Custom point");
    assert!(point.details().region.is_none());
    assert!(point.details().capital.is_none());
    assert!(point.details().population.is_none());
}

#[test]
fn test_pick_flow_end_to_end() {
    let (mut session, _dir) = loaded_session(SessionOptions::default());
    let mut map = RecordingMap::default();

    assert_eq!(
        session.pick_country("Armenia", &mut map),
        PickOutcome::Added { index: 0 }
    );
    assert_eq!(
        session.pick_country("Antarctica", &mut map),
        PickOutcome::Unavailable
    );

    let selected = session.selected_point().unwrap();
    assert_eq!(selected.display_name(), "Armenia");
    assert_eq!(selected.details().capital.as_deref(), Some("Yerevan"));
    assert_eq!(map.commands.len(), 1);
    assert_eq!(map.commands[0].target, coord(40.0690, 45.0382));
    assert_eq!(map.commands[0].zoom, 5);

    // Repeated derivations do not move the camera again
    for _ in 0..3 {
        let _ = session.view();
        session.notify_camera(&mut map);
    }
    assert_eq!(map.commands.len(), 1);

    // A new pick of the same country is a new selection
    session.pick_country("Armenia", &mut map);
    assert_eq!(map.commands.len(), 2);
}

#[test]
fn test_search_and_pagination_end_to_end() {
    let options = SessionOptions {
        page_size: PageSize::Three,
        ..SessionOptions::default()
    };
    let (mut session, _dir) = loaded_session(options);
    let mut map = RecordingMap::default();

    session.pick_country("France", &mut map);
    for i in 0..6 {
        session.click(coord(-60.0 + f64::from(i), -60.0));
    }
    assert_eq!(session.store().len(), 7);

    let view = session.view();
    assert_eq!(view.total_pages(), 3);
    assert!(view.has_next());
    assert!(!view.has_prev());

    assert_eq!(session.set_page(10), 3);
    assert_eq!(session.set_page(0), 1);

    session.set_page(2);
    session.set_search_term("FRA");
    let view = session.view();
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.filtered_len(), 1);
    assert_eq!(view.visible()[0].point.display_name(), "France");

    session.set_search_term("nothing like this");
    assert_eq!(session.view().status(), ViewStatus::NoMatches);
    assert!(session.markers().is_empty());
}

#[test]
fn test_config_drives_session() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    let catalog_path = write_catalog(&dir);

    let mut config = GeopinConfig::load_from(&config_path).unwrap();
    config.set("page_size", "12").unwrap();
    config.set("tie_break", "nearest").unwrap();
    config.set("placeholder_name", "Pin").unwrap();
    config
        .set("catalog_path", &catalog_path.display().to_string())
        .unwrap();
    config.save_to(&config_path).unwrap();

    let config = GeopinConfig::load_from(&config_path).unwrap();
    let options = config.session_options();
    assert_eq!(options.page_size, PageSize::Twelve);
    assert_eq!(options.click.tie_break, TieBreak::Nearest);

    let mut session = Session::new(options);
    let catalog_path = config.catalog_path.clone().unwrap();
    session.load_catalog(&JsonFileSource::new(catalog_path));
    let index = session.click(coord(10.0, 10.0));
    assert_eq!(session.store().get(index).unwrap().display_name(), "Pin");
    assert_eq!(session.catalog().len(), 3);
}

#[test]
fn test_shell_session_script() {
    let (session, _dir) = loaded_session(SessionOptions::default());
    let mut shell = Shell::new(session, true);
    let mut map = RecordingMap::default();

    let script = [
        "click 46.25 2.25",
        "click 0 0",
        "pick Armenia",
        "size 3",
        "list",
        "search custom",
    ];
    for line in script {
        let command = ShellCommand::parse(line).unwrap();
        assert!(matches!(shell.apply(command, &mut map), Ok(Flow::Continue(_))));
    }

    assert_eq!(shell.session().store().len(), 3);
    assert_eq!(shell.session().view_state().surface(), Surface::List);
    assert_eq!(shell.session().view().filtered_len(), 1);
    assert_eq!(map.commands.len(), 1);
    assert_eq!(shell.render(), "Custom point");
}
