use std::time::Duration;

use crate::entities::Coordinate;

pub const DEFAULT_RADIUS_METERS: u32 = 10_000;
pub const DEFAULT_CATEGORY: &str = "restaurant";

/// Zoom level at which a 10 km search radius is legible.
pub const NEIGHBORHOOD_ZOOM: u8 = 12;

pub const INITIAL_ZOOM: u8 = 13;
pub const INITIAL_CENTER: Coordinate = Coordinate::from_lat_lng_deg(33.350_690, -111.822_610);

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq)]
pub struct FinderSettings {
    pub radius_meters: u32,
    pub category: String,
    pub zoom: u8,
    pub initial_center: Coordinate,
    pub initial_zoom: u8,
}

impl Default for FinderSettings {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_RADIUS_METERS,
            category: DEFAULT_CATEGORY.to_string(),
            zoom: NEIGHBORHOOD_ZOOM,
            initial_center: INITIAL_CENTER,
            initial_zoom: INITIAL_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub debounce: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}
