use std::fmt;

use thiserror::Error;

use crate::entities::*;

/// Error reported by the device geolocation API.
///
/// The codes follow the W3C geolocation API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ERROR({code}): {message}")]
pub struct GeoLocationError {
    pub code: GeoLocationErrorCode,
    pub message: String,
}

impl GeoLocationError {
    pub fn new(code: GeoLocationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoLocationErrorCode(pub u16);

impl GeoLocationErrorCode {
    pub const PERMISSION_DENIED: Self = Self(1);
    pub const POSITION_UNAVAILABLE: Self = Self(2);
    pub const TIMEOUT: Self = Self(3);
}

impl fmt::Display for GeoLocationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait GeoLocationGateway {
    /// Requests a single position fix from the device.
    async fn current_position(&self) -> Result<Coordinate, GeoLocationError>;
}

impl<T: GeoLocationGateway> GeoLocationGateway for &T {
    async fn current_position(&self) -> Result<Coordinate, GeoLocationError> {
        (**self).current_position().await
    }
}
