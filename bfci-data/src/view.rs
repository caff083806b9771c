//! Map viewport settings.

use bfci_index::boundary::GeoPoint;
use serde::Serialize;

/// Center of the national view.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint { lat: 12.5, lon: -1.5 };

/// Zoom of the national view.
pub const DEFAULT_ZOOM: f64 = 5.5;

/// Zoom used when a single department is selected.
pub const DEPARTMENT_ZOOM: f64 = 8.0;

/// Fill opacity of department shapes.
pub const OPACITY: f64 = 0.6;

/// Base map tiles.
pub const MAP_STYLE: &str = "carto-positron";

/// Where the map is centered and how far it is zoomed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl MapView {
    /// Whole-country view.
    pub fn national() -> Self {
        MapView {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// View centered on one department.
    pub fn department(center: GeoPoint) -> Self {
        MapView {
            center,
            zoom: DEPARTMENT_ZOOM,
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::national()
    }
}
