use anyhow::{Context, Result};

use wte_core::{
    entities::Coordinate,
    gateways::{
        geocode::GeoCodingGateway,
        geolocation::{GeoLocationError, GeoLocationGateway},
        GatewayError,
    },
};
use wte_gateways::{fixed_location::FixedLocation, google::GoogleMaps, opencage::OpenCage};

use crate::config::{self, Config};

pub struct Gateways {
    pub google: GoogleMaps,
    pub geocoder: GeoCoder,
    pub device: Device,
}

pub fn gateways(cfg: &Config) -> Result<Gateways> {
    let config::Google {
        api_key,
        api_url,
        geolocation_api_url,
    } = &cfg.google;
    let google = GoogleMaps::with_urls(
        api_key.clone().unwrap_or_default(),
        api_url,
        geolocation_api_url,
    )
    .context("Error loading maps: set GOOGLE_MAPS_API_KEY")?;

    let geocoder = match &cfg.geocoding {
        config::GeocodingGateway::Google => GeoCoder::Google(google.clone()),
        config::GeocodingGateway::OpenCage { api_key } => {
            GeoCoder::OpenCage(OpenCage::new(api_key.clone()))
        }
    };

    let device = match &cfg.geolocation {
        config::GeolocationGateway::Google => Device::Google(google.clone()),
        config::GeolocationGateway::FixedLocation { pos } => {
            Device::Fixed(FixedLocation::new(*pos))
        }
    };

    Ok(Gateways {
        google,
        geocoder,
        device,
    })
}

pub enum GeoCoder {
    Google(GoogleMaps),
    OpenCage(OpenCage),
}

impl GeoCodingGateway for GeoCoder {
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinate>, GatewayError> {
        match self {
            Self::Google(gw) => gw.geocode(address).await,
            Self::OpenCage(gw) => gw.geocode(address).await,
        }
    }
}

/// The source of the user's position.
pub enum Device {
    Google(GoogleMaps),
    Fixed(FixedLocation),
}

impl GeoLocationGateway for Device {
    async fn current_position(&self) -> Result<Coordinate, GeoLocationError> {
        match self {
            Self::Google(gw) => gw.current_position().await,
            Self::Fixed(gw) => gw.current_position().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wte_core::settings::{FinderSettings, SearchSettings};

    fn config(api_key: Option<&str>, geolocation: config::GeolocationGateway) -> Config {
        Config {
            finder: FinderSettings::default(),
            search: SearchSettings::default(),
            google: config::Google {
                api_key: api_key.map(ToString::to_string),
                api_url: "http://localhost".into(),
                geolocation_api_url: "http://localhost".into(),
            },
            geocoding: config::GeocodingGateway::OpenCage { api_key: None },
            geolocation,
        }
    }

    #[test]
    fn require_google_api_key() {
        let cfg = config(None, config::GeolocationGateway::Google);
        let err = gateways(&cfg).err().unwrap();
        assert!(err.to_string().starts_with("Error loading maps"));
    }

    #[test]
    fn select_configured_gateways() {
        let pos = Coordinate::from_lat_lng_deg(33.4, -111.8);
        let cfg = config(
            Some("secret"),
            config::GeolocationGateway::FixedLocation { pos: Some(pos) },
        );
        let gws = gateways(&cfg).unwrap();
        assert!(matches!(gws.geocoder, GeoCoder::OpenCage(_)));
        assert!(matches!(gws.device, Device::Fixed(_)));
    }

    #[tokio::test]
    async fn fixed_device_reports_its_position() {
        let pos = Coordinate::from_lat_lng_deg(33.4, -111.8);
        let device = Device::Fixed(FixedLocation::new(Some(pos)));
        assert_eq!(pos, device.current_position().await.unwrap());
    }
}
