use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use wte_core::gateways::geolocation::{GeoLocationError, GeoLocationErrorCode, GeoLocationGateway};
use wte_entities::geo::Coordinate;

use super::{GoogleMaps, LatLng};

const GEOLOCATE_PATH: &str = "geolocate";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeolocateRequest {
    consider_ip: bool,
}

#[derive(Debug, Deserialize)]
struct GeolocateResponse {
    location: LatLng,
    accuracy: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    message: String,
}

fn error_code(status: StatusCode) -> GeoLocationErrorCode {
    match status {
        StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
            GeoLocationErrorCode::PERMISSION_DENIED
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => GeoLocationErrorCode::TIMEOUT,
        _ => GeoLocationErrorCode::POSITION_UNAVAILABLE,
    }
}

fn request_error(err: &reqwest::Error) -> GeoLocationError {
    let code = if err.is_timeout() {
        GeoLocationErrorCode::TIMEOUT
    } else {
        GeoLocationErrorCode::POSITION_UNAVAILABLE
    };
    GeoLocationError::new(code, err.to_string())
}

/// Approximates the position of this device by its IP address.
impl GeoLocationGateway for GoogleMaps {
    async fn current_position(&self) -> Result<Coordinate, GeoLocationError> {
        let url = format!("{}/{GEOLOCATE_PATH}", self.geolocation_api_url);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GeolocateRequest { consider_ip: true })
            .send()
            .await
            .map_err(|err| request_error(&err))?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(ErrorResponse { error }) => error.message,
                Err(_) => status.to_string(),
            };
            return Err(GeoLocationError::new(error_code(status), message));
        }
        let GeolocateResponse { location, accuracy } = response
            .json()
            .await
            .map_err(|err| request_error(&err))?;
        log::debug!("Geolocated device with an accuracy of {accuracy:?} meters");
        Ok(location.into())
    }
}
