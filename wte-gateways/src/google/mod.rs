//! Google Maps Platform web services.

use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use wte_core::gateways::GatewayError;
use wte_entities::{geo::Coordinate, status::ServiceStatus};

mod autocomplete;
mod geocoding;
mod geolocation;
mod places;

pub const DEFAULT_API_URL: &str = "https://maps.googleapis.com/maps/api";
pub const DEFAULT_GEOLOCATION_API_URL: &str = "https://www.googleapis.com/geolocation/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing API key")]
    MissingApiKey,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Service {
        status: ServiceStatus,
        message: String,
    },
}

impl From<Error> for GatewayError {
    fn from(err: Error) -> Self {
        match err {
            Error::MissingApiKey | Error::Http(_) => Self::Request(err.to_string()),
            Error::Service { .. } => Self::Response(err.to_string()),
        }
    }
}

/// Client for the places, autocomplete, geocoding and geolocation APIs.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    geolocation_api_url: String,
}

impl GoogleMaps {
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_urls(api_key, DEFAULT_API_URL, DEFAULT_GEOLOCATION_API_URL)
    }

    pub fn with_urls(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        geolocation_api_url: impl Into<String>,
    ) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key,
            api_url: api_url.into(),
            geolocation_api_url: geolocation_api_url.into(),
        })
    }

    async fn get_json<T>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.api_url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(LatLng { lat, lng }: LatLng) -> Self {
        Coordinate::from_lat_lng_deg(lat, lng)
    }
}

fn service_error(status: ServiceStatus, message: Option<String>) -> Error {
    Error::Service {
        status,
        message: message.unwrap_or_else(|| "no details".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_an_api_key() {
        assert!(matches!(GoogleMaps::new(""), Err(Error::MissingApiKey)));
        assert!(matches!(GoogleMaps::new("  "), Err(Error::MissingApiKey)));
        assert!(GoogleMaps::new("secret").is_ok());
    }

    #[test]
    fn service_errors_are_response_errors() {
        let err = service_error(ServiceStatus::RequestDenied, Some("Invalid key".into()));
        assert_eq!("REQUEST_DENIED: Invalid key", err.to_string());
        assert!(matches!(GatewayError::from(err), GatewayError::Response(_)));
    }
}
