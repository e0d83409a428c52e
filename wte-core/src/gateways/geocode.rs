use super::GatewayError;
use crate::entities::*;

pub trait GeoCodingGateway {
    /// Resolves a free-text address into candidate positions, best match first.
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinate>, GatewayError>;
}

impl<T: GeoCodingGateway> GeoCodingGateway for &T {
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinate>, GatewayError> {
        (**self).geocode(address).await
    }
}
