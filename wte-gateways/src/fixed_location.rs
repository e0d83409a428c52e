use wte_core::gateways::geolocation::{GeoLocationError, GeoLocationErrorCode, GeoLocationGateway};
use wte_entities::geo::Coordinate;

/// A device that always reports the same position, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(Option<Coordinate>);

impl FixedLocation {
    pub const fn new(pos: Option<Coordinate>) -> Self {
        Self(pos)
    }
}

impl GeoLocationGateway for FixedLocation {
    async fn current_position(&self) -> Result<Coordinate, GeoLocationError> {
        self.0.ok_or_else(|| {
            GeoLocationError::new(
                GeoLocationErrorCode::POSITION_UNAVAILABLE,
                "No position configured",
            )
        })
    }
}
