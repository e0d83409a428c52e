use super::GatewayError;
use crate::entities::*;

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub pos: Coordinate,
    pub radius_meters: u32,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyResponse {
    pub status: ServiceStatus,
    pub results: Vec<PlaceResult>,
}

pub trait PlacesGateway {
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<NearbyResponse, GatewayError>;
}

impl<T: PlacesGateway> PlacesGateway for &T {
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<NearbyResponse, GatewayError> {
        (**self).nearby_search(query).await
    }
}
