use geocoding::{Forward, Opencage as Client, Point};

use wte_core::gateways::{geocode::GeoCodingGateway, GatewayError};
use wte_entities::geo::Coordinate;

/// Forward geocoding with the OpenCage API.
#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: Option<String>,
}

impl OpenCage {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

fn normalize_address(address: &str) -> Option<String> {
    let parts: Vec<_> = address
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(","))
    }
}

fn to_coordinate(point: &Point<f64>) -> Coordinate {
    Coordinate::from_lat_lng_deg(point.y(), point.x())
}

impl GeoCodingGateway for OpenCage {
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinate>, GatewayError> {
        let Some(api_key) = self.api_key.clone() else {
            log::warn!("Cannot resolve address without an OpenCage API key");
            return Ok(vec![]);
        };
        let Some(query) = normalize_address(address) else {
            return Ok(vec![]);
        };
        // The client performs blocking requests
        let points = tokio::task::spawn_blocking(move || {
            let res: Result<Vec<Point<f64>>, _> = Client::new(api_key).forward(&query);
            match &res {
                Ok(points) => log::debug!("Resolved address '{query}': {points:?}"),
                Err(err) => log::warn!("Failed to resolve address '{query}': {err}"),
            }
            res.map_err(|err| GatewayError::Response(err.to_string()))
        })
        .await
        .map_err(|err| GatewayError::Request(err.to_string()))??;
        Ok(points.iter().map(to_coordinate).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_address_parts() {
        assert_eq!(
            Some("A street,A city".to_string()),
            normalize_address(" A street ,, A city ")
        );
        assert_eq!(Some("Mesa".to_string()), normalize_address("Mesa"));
        assert_eq!(None, normalize_address(" , "));
        assert_eq!(None, normalize_address(""));
    }

    #[test]
    fn points_are_lng_lat() {
        let point = Point::new(-111.8314724, 33.4151843);
        assert_eq!(
            Coordinate::from_lat_lng_deg(33.4151843, -111.8314724),
            to_coordinate(&point)
        );
    }

    #[tokio::test]
    async fn no_candidates_without_api_key() {
        let gw = OpenCage::new(None);
        assert!(gw.geocode("Mesa, AZ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_candidates_for_blank_address() {
        let gw = OpenCage::new(Some("secret".into()));
        assert!(gw.geocode(" , ").await.unwrap().is_empty());
    }
}
