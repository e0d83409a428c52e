use thiserror::Error;

use crate::gateways::geolocation::GeoLocationError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The map has not been loaded yet")]
    MapNotReady,
    #[error("Error loading maps: {0}")]
    MapLoad(String),
    #[error("Unresolved position")]
    UnresolvedPosition,
    #[error("A position fix is already in progress")]
    FixInProgress,
    #[error(transparent)]
    GeoLocation(#[from] GeoLocationError),
}
