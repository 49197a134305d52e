//! View module - search and pagination over the point store
//!
//! Both presentation surfaces (map and list) read the same [`PageView`]
//! derived from the same [`ViewState`], so they can never disagree about which
//! points are visible.
//!
//! # Architecture
//!
//! - `state`: The mutable inputs (`ViewState`) and the rules that reset or
//!   clamp paging
//! - `page`: Page sizes, clamping arithmetic, and the derived `PageView`
//! - `error`: Boundary errors for page sizes and surface names

pub mod error;
pub mod page;
pub mod state;

pub use error::ViewError;
pub use page::{PageEntry, PageSize, PageView, ViewStatus, clamp_page, total_pages};
pub use state::ViewState;

use std::str::FromStr;

/// Active presentation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    #[default]
    Map,
    List,
}

impl FromStr for Surface {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "map" => Ok(Self::Map),
            "list" => Ok(Self::List),
            other => Err(ViewError::UnknownSurface(other.to_string())),
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Map => write!(f, "map"),
            Self::List => write!(f, "list"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_from_str() {
        assert_eq!("map".parse::<Surface>(), Ok(Surface::Map));
        assert_eq!(" LIST ".parse::<Surface>(), Ok(Surface::List));
        assert!(matches!(
            "both".parse::<Surface>(),
            Err(ViewError::UnknownSurface(_))
        ));
    }

    #[test]
    fn test_surface_display_round_trips() {
        for surface in [Surface::Map, Surface::List] {
            assert_eq!(surface.to_string().parse::<Surface>(), Ok(surface));
        }
    }
}
