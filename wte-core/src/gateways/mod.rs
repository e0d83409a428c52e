//! Ports to the external map, places, geocoding and geolocation providers.
//!
//! All provider calls are asynchronous and resolve exactly once,
//! either with a result or with an error. Nothing is streamed.

use thiserror::Error;

pub mod autocomplete;
pub mod geocode;
pub mod geolocation;
pub mod map_view;
pub mod places;
pub mod timer;

/// A provider request failed before a status could be obtained.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Invalid response: {0}")]
    Response(String),
}
