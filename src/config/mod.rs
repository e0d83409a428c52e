use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};

use wte_core::{
    entities::Coordinate,
    settings::{FinderSettings, SearchSettings},
};
use wte_gateways::google::{DEFAULT_API_URL, DEFAULT_GEOLOCATION_API_URL};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "where-to-eat.toml";

const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub finder: FinderSettings,
    pub search: SearchSettings,
    pub google: Google,
    pub geocoding: GeocodingGateway,
    pub geolocation: GeolocationGateway,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env();
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Ok(key) = env::var(ENV_NAME_GOOGLE_MAPS_API_KEY) {
            self.google.api_key = Some(key);
        }
        if let GeocodingGateway::OpenCage { api_key } = &mut self.geocoding {
            match env::var(ENV_NAME_OPENCAGE_API_KEY) {
                Ok(key) => {
                    *api_key = Some(key);
                }
                Err(_) => {
                    if api_key.is_none() {
                        log::warn!("No OpenCage API key found");
                    }
                }
            }
        }
    }
}

/// Settings shared by all Google Maps web services.
pub struct Google {
    pub api_key: Option<String>,
    pub api_url: String,
    pub geolocation_api_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    Google,
    OpenCage { api_key: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationGateway {
    Google,
    /// For local testing purposes
    FixedLocation { pos: Option<Coordinate> },
}

fn try_position(raw::Position { lat, lng }: raw::Position) -> Result<Coordinate> {
    Coordinate::try_from_lat_lng_deg(lat, lng).ok_or_else(|| anyhow!("Invalid position {lat},{lng}"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            finder,
            search,
            geocoding,
            geolocation,
            gateway,
        } = from;

        let raw::Finder {
            radius_meters,
            category,
            zoom,
            initial_center,
            initial_zoom,
        } = finder.unwrap_or_default();

        if radius_meters == 0 {
            return Err(anyhow!("The search radius must be positive"));
        }
        if category.trim().is_empty() {
            return Err(anyhow!("No place category defined"));
        }
        let initial_center = try_position(initial_center)?;
        let finder = FinderSettings {
            radius_meters,
            category,
            zoom,
            initial_center,
            initial_zoom,
        };

        let raw::Search { debounce } = search.unwrap_or_default();
        let search = SearchSettings { debounce };

        let gateway = gateway.unwrap_or_default();

        let raw::Google {
            api_key,
            api_url,
            geolocation_api_url,
        } = gateway.google.clone().unwrap_or_default();
        let google = Google {
            api_key,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            geolocation_api_url: geolocation_api_url
                .unwrap_or_else(|| DEFAULT_GEOLOCATION_API_URL.to_string()),
        };

        let geocoding = match geocoding.and_then(|g| g.gateway) {
            None | Some(raw::GeocodingGateway::Google) => GeocodingGateway::Google,
            Some(raw::GeocodingGateway::Opencage) => {
                let raw::OpenCage { api_key } = gateway.opencage.clone().unwrap_or_default();
                log::info!("Use OpenCage geocoding gateway");
                GeocodingGateway::OpenCage { api_key }
            }
        };

        let geolocation = match geolocation.and_then(|g| g.gateway) {
            None | Some(raw::GeolocationGateway::Google) => GeolocationGateway::Google,
            Some(raw::GeolocationGateway::FixedLocation) => {
                let raw::FixedLocation { position } = gateway
                    .fixed_location
                    .ok_or_else(|| anyhow!("Missing 'fixed-location' gateway configuration"))?;
                let pos = position.map(try_position).transpose()?;
                log::info!("Use fixed location gateway");
                GeolocationGateway::FixedLocation { pos }
            }
        };

        Ok(Self {
            finder,
            search,
            google,
            geocoding,
            geolocation,
        })
    }
}
