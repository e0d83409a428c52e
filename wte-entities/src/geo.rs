use std::fmt;

/// A geographical position in degrees.
///
/// A coordinate is only *resolved* if both components are finite numbers.
/// Unresolved coordinates must never be used to drive a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const UNRESOLVED: Self = Self {
        lat: f64::NAN,
        lng: f64::NAN,
    };

    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Only accepts finite values within the valid degree ranges.
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self::from_lat_lng_deg(lat, lng);
        pos.is_valid().then_some(pos)
    }

    pub fn is_resolved(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    pub fn is_valid(&self) -> bool {
        self.is_resolved()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        let res = Self::UNRESOLVED;
        debug_assert!(!res.is_resolved());
        res
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_coordinate_is_unresolved() {
        assert!(!Coordinate::default().is_resolved());
    }

    #[test]
    fn coordinate_with_a_single_nan_component_is_unresolved() {
        assert!(!Coordinate::from_lat_lng_deg(f64::NAN, 8.0).is_resolved());
        assert!(!Coordinate::from_lat_lng_deg(48.0, f64::NAN).is_resolved());
        assert!(!Coordinate::from_lat_lng_deg(48.0, f64::INFINITY).is_resolved());
        assert!(Coordinate::from_lat_lng_deg(48.0, 8.0).is_resolved());
    }

    #[test]
    fn try_from_out_of_range_degrees() {
        assert!(Coordinate::try_from_lat_lng_deg(90.1, 0.0).is_none());
        assert!(Coordinate::try_from_lat_lng_deg(0.0, -180.1).is_none());
        assert!(Coordinate::try_from_lat_lng_deg(33.35069, -111.82261).is_some());
    }

    #[test]
    fn display_as_comma_separated_pair() {
        let pos = Coordinate::from_lat_lng_deg(33.35069, -111.82261);
        assert_eq!("33.35069,-111.82261", pos.to_string());
    }
}
