//! Session controller
//!
//! Owns every piece of mutable state for one browsing session and sequences
//! the reactions that follow each user action. There is no reactive runtime:
//! each mutating method performs the state change and then explicitly runs
//! whatever must follow it (page reset, camera fly-to).
//!
//! # Workflow
//!
//! ```text
//! Free click ─→ matcher (click tolerance) ─→ Point ─→ append
//!
//! Catalog pick ─→ reference coordinate
//!     ↓
//!   matcher (pick tolerance) ─→ Point ─→ append
//!     ↓
//!   new Selection (generation + 1)
//!     ↓
//!   CameraController ─→ fly-to (once per generation)
//! ```

use crate::camera::{CameraController, MapSurface};
use crate::catalog::{CatalogSource, CountryCatalog};
use crate::geo::Coordinate;
use crate::matcher::{MatchOptions, TieBreak, Tolerance, match_country_with};
use crate::points::{DEFAULT_POINT_NAME, Point, PointStore};
use crate::view::{PageEntry, PageSize, PageView, Surface, ViewState};
use tracing::{debug, info};

/// Identity of the selected point
///
/// Every pick produces a selection with a fresh generation, even when the
/// same country is picked twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    generation: u64,
}

impl Selection {
    #[must_use]
    pub const fn new(index: usize, generation: u64) -> Self {
        Self { index, generation }
    }

    /// Store position of the selected point
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of picking a country from the catalog selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// A point was appended at `index` and selected
    Added { index: usize },
    /// Unknown name or no reference coordinate; nothing changed
    Unavailable,
}

/// Tunables for a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub page_size: PageSize,
    /// Matching used for catalog picks
    pub pick: MatchOptions,
    /// Matching used for free map clicks
    pub click: MatchOptions,
    /// Display name for points that match no country
    pub placeholder: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            pick: MatchOptions::new(Tolerance::PICK, TieBreak::FirstInCatalog),
            click: MatchOptions::new(Tolerance::CLICK, TieBreak::FirstInCatalog),
            placeholder: DEFAULT_POINT_NAME.to_string(),
        }
    }
}

/// One browsing session
#[derive(Debug, Clone)]
pub struct Session {
    catalog: CountryCatalog,
    store: PointStore,
    view: ViewState,
    selection: Option<Selection>,
    generation: u64,
    camera: CameraController,
    options: SessionOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl Session {
    /// Start an empty session with no catalog installed
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self {
            catalog: CountryCatalog::empty(),
            store: PointStore::new(),
            view: ViewState::new(options.page_size),
            selection: None,
            generation: 0,
            camera: CameraController::new(),
            options,
        }
    }

    /// Builder-style catalog installation
    #[must_use]
    pub fn with_catalog(mut self, catalog: CountryCatalog) -> Self {
        self.install_catalog(catalog);
        self
    }

    /// Replace the catalog; existing points keep their copied details
    pub fn install_catalog(&mut self, catalog: CountryCatalog) {
        info!("Installed catalog with {} countries", catalog.len());
        self.catalog = catalog;
    }

    /// Load from a source, falling back to an empty catalog on failure
    pub fn load_catalog(&mut self, source: &dyn CatalogSource) {
        self.install_catalog(CountryCatalog::load_or_empty(source));
    }

    /// Record a free map click
    ///
    /// Always appends exactly one point and leaves the selection untouched.
    /// Returns the new point's store index.
    pub fn click(&mut self, coordinate: Coordinate) -> usize {
        let matched = match_country_with(&coordinate, &self.catalog, self.options.click);
        if matched.is_none() {
            debug!(
                "No country within {} of {coordinate}",
                self.options.click.tolerance.degrees()
            );
        }
        let point = Point::from_match(coordinate, matched, &self.options.placeholder);
        let index = self.store.append(point);
        debug!("Appended point #{index} at {coordinate}");
        index
    }

    /// Pick a country by common name
    ///
    /// Appends a point at the country's reference coordinate, selects it and
    /// flies the camera there.
    pub fn pick_country(&mut self, common_name: &str, map: &mut dyn MapSurface) -> PickOutcome {
        let Some(reference) = self.catalog.get(common_name).and_then(|c| c.reference) else {
            debug!("Country '{common_name}' is not available for picking");
            return PickOutcome::Unavailable;
        };

        let matched = match_country_with(&reference, &self.catalog, self.options.pick);
        let point = Point::from_match(reference, matched, &self.options.placeholder);
        let index = self.store.append(point);
        debug!("Appended picked point #{index} for '{common_name}'");

        self.generation += 1;
        self.selection = Some(Selection::new(index, self.generation));
        self.notify_camera(map);

        PickOutcome::Added { index }
    }

    /// Hand the current selection to the camera
    ///
    /// Safe to call after every derivation: a selection already flown to is
    /// ignored. Returns `true` when a fly-to was emitted.
    pub fn notify_camera(&mut self, map: &mut dyn MapSurface) -> bool {
        self.camera
            .on_selection_change(self.selection.as_ref(), &self.store, map)
    }

    /// Close the detail view without moving the camera
    pub const fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.set_search_term(term);
    }

    pub const fn set_page_size(&mut self, size: PageSize) {
        self.view.set_page_size(size);
    }

    /// Set the page size from an arbitrary number (nearest offered size)
    pub fn request_page_size(&mut self, requested: usize) -> PageSize {
        self.view.request_page_size(requested)
    }

    /// Jump to a page, clamped; returns the page actually selected
    pub fn set_page(&mut self, n: usize) -> usize {
        self.view.set_page(n, self.store.points())
    }

    pub fn next_page(&mut self) -> usize {
        self.view.next_page(self.store.points())
    }

    pub fn prev_page(&mut self) -> usize {
        self.view.prev_page(self.store.points())
    }

    pub const fn set_surface(&mut self, surface: Surface) {
        self.view.set_surface(surface);
    }

    /// Current derived view, shared by both surfaces
    #[must_use]
    pub fn view(&self) -> PageView<'_> {
        self.view.derive(self.store.points())
    }

    /// Points to draw on the map: the visible page, with store indices
    #[must_use]
    pub fn markers(&self) -> Vec<PageEntry<'_>> {
        self.view().visible().to_vec()
    }

    #[must_use]
    pub fn has_points(&self) -> bool {
        !self.store.is_empty()
    }

    #[must_use]
    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }

    #[must_use]
    pub fn selected_point(&self) -> Option<&Point> {
        self.selection.and_then(|s| self.store.get(s.index()))
    }

    #[must_use]
    pub const fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn store(&self) -> &PointStore {
        &self.store
    }

    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }
}
