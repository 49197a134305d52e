//! Camera control for the map surface
//!
//! The camera reacts to *selection changes*, not to renders. Each
//! [`Selection`] carries a generation number and the controller remembers the
//! last generation it flew to, so repeated calls with the same selection
//! (e.g. after every view derivation) emit nothing.

use crate::geo::Coordinate;
use crate::points::PointStore;
use crate::session::Selection;
use tracing::debug;

/// Zoom level used when flying to a selected point
pub const FLY_TO_ZOOM: u8 = 5;

/// Instruction for the map viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyTo {
    pub target: Coordinate,
    pub zoom: u8,
}

impl FlyTo {
    #[must_use]
    pub const fn new(target: Coordinate) -> Self {
        Self {
            target,
            zoom: FLY_TO_ZOOM,
        }
    }
}

/// Map surface collaborator that accepts viewport commands
pub trait MapSurface {
    fn fly_to(&mut self, command: FlyTo);
}

/// Emits at most one fly-to per distinct selection
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    last_generation: Option<u64>,
}

impl CameraController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_generation: None,
        }
    }

    /// Notify the camera of the current selection
    ///
    /// Returns `true` when a fly-to command was sent. No-op when nothing is
    /// selected, when this selection was already handled, or when the
    /// selected index is not in the store.
    pub fn on_selection_change(
        &mut self,
        selection: Option<&Selection>,
        store: &PointStore,
        map: &mut dyn MapSurface,
    ) -> bool {
        let Some(selection) = selection else {
            return false;
        };
        if self.last_generation == Some(selection.generation()) {
            return false;
        }
        let Some(point) = store.get(selection.index()) else {
            return false;
        };

        let command = FlyTo::new(point.coordinate());
        debug!(
            "Flying to {} (zoom {}) for selection #{}",
            command.target,
            command.zoom,
            selection.generation()
        );
        map.fly_to(command);
        self.last_generation = Some(selection.generation());
        true
    }
}
