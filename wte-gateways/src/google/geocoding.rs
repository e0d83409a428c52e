use serde::Deserialize;

use wte_core::gateways::{geocode::GeoCodingGateway, GatewayError};
use wte_entities::{geo::Coordinate, status::ServiceStatus};

use super::{service_error, Error, Geometry, GoogleMaps};

const GEOCODE_PATH: &str = "geocode/json";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

fn into_candidates(response: GeocodeResponse) -> Result<Vec<Coordinate>, Error> {
    let GeocodeResponse {
        status,
        results,
        error_message,
    } = response;
    match ServiceStatus::from_code(&status) {
        ServiceStatus::Ok => Ok(results
            .into_iter()
            .map(|r| r.geometry.location.into())
            .collect()),
        ServiceStatus::ZeroResults => Ok(vec![]),
        status => Err(service_error(status, error_message)),
    }
}

impl GeoCodingGateway for GoogleMaps {
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinate>, GatewayError> {
        let response: GeocodeResponse = self.get_json(GEOCODE_PATH, &[("address", address)]).await?;
        Ok(into_candidates(response)?)
    }
}
