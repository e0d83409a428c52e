use serde::Deserialize;

use wte_core::gateways::{
    places::{NearbyQuery, NearbyResponse, PlacesGateway},
    GatewayError,
};
use wte_entities::{
    place::{PlaceResult, PriceLevel},
    status::ServiceStatus,
};

use super::{service_error, Geometry, GoogleMaps};

const NEARBY_SEARCH_PATH: &str = "place/nearbysearch/json";

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<Place>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Place {
    place_id: String,
    name: String,
    price_level: Option<i64>,
    geometry: Option<Geometry>,
}

fn into_place_result(place: Place) -> Option<PlaceResult> {
    let Place {
        place_id,
        name,
        price_level,
        geometry,
    } = place;
    let Some(Geometry { location }) = geometry else {
        log::warn!("Ignoring place {place_id} without location");
        return None;
    };
    let price_level = price_level.and_then(|level| {
        PriceLevel::try_from(level)
            .map_err(|err| log::warn!("Ignoring price level of place {place_id}: {err}"))
            .ok()
    });
    Some(PlaceResult {
        id: place_id.into(),
        name,
        price_level,
        pos: location.into(),
    })
}

fn into_nearby_response(response: NearbySearchResponse) -> NearbyResponse {
    let NearbySearchResponse {
        status,
        results,
        error_message,
    } = response;
    let status = ServiceStatus::from_code(&status);
    if let Some(msg) = error_message {
        log::warn!("{}", service_error(status, Some(msg)));
    }
    let results = if status.is_ok() {
        results.into_iter().filter_map(into_place_result).collect()
    } else {
        vec![]
    };
    NearbyResponse { status, results }
}

fn nearby_search_params(query: &NearbyQuery) -> Vec<(&'static str, String)> {
    let NearbyQuery {
        pos,
        radius_meters,
        categories,
    } = query;
    let mut params = vec![
        ("location", pos.to_string()),
        ("radius", radius_meters.to_string()),
    ];
    // The API only supports a single type per request
    if let Some(category) = categories.first() {
        params.push(("type", category.clone()));
    }
    params
}

impl PlacesGateway for GoogleMaps {
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<NearbyResponse, GatewayError> {
        let params = nearby_search_params(query);
        let params: Vec<_> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let response: NearbySearchResponse = self.get_json(NEARBY_SEARCH_PATH, &params).await?;
        Ok(into_nearby_response(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wte_entities::geo::Coordinate;

    const OK_RESPONSE: &str = r#"{
      "html_attributions": [],
      "results": [
        {
          "business_status": "OPERATIONAL",
          "geometry": { "location": { "lat": 33.3528, "lng": -111.789 } },
          "name": "Soup Kitchen",
          "place_id": "ChIJ-1",
          "types": ["restaurant", "food"]
        },
        {
          "geometry": { "location": { "lat": 33.4152, "lng": -111.8315 } },
          "name": "Taco Shop",
          "place_id": "ChIJ-2",
          "price_level": 1
        },
        {
          "geometry": { "location": { "lat": 33.39, "lng": -111.84 } },
          "name": "Steak House",
          "place_id": "ChIJ-3",
          "price_level": 3
        },
        {
          "name": "Nowhere Diner",
          "place_id": "ChIJ-4",
          "price_level": 2
        }
      ],
      "status": "OK"
    }"#;

    #[test]
    fn convert_ok_response() {
        let response = serde_json::from_str(OK_RESPONSE).unwrap();
        let NearbyResponse { status, results } = into_nearby_response(response);
        assert_eq!(ServiceStatus::Ok, status);
        assert_eq!(3, results.len());
        assert_eq!("ChIJ-1", results[0].id.as_str());
        assert_eq!("Soup Kitchen", results[0].name);
        assert_eq!(None, results[0].price_level);
        assert_eq!(Coordinate::from_lat_lng_deg(33.3528, -111.789), results[0].pos);
        assert_eq!(Some(1), results[1].price_level.map(PriceLevel::to_u8));
        assert_eq!(Some(3), results[2].price_level.map(PriceLevel::to_u8));
    }

    #[test]
    fn ignore_invalid_price_levels() {
        let place: Place = serde_json::from_str(
            r#"{
              "geometry": { "location": { "lat": 1.0, "lng": 2.0 } },
              "name": "Caviar Bar",
              "place_id": "x",
              "price_level": 7
            }"#,
        )
        .unwrap();
        let place = into_place_result(place).unwrap();
        assert_eq!(None, place.price_level);
    }

    #[test]
    fn convert_error_response() {
        let response = serde_json::from_str(
            r#"{
              "error_message": "The provided API key is invalid.",
              "html_attributions": [],
              "results": [],
              "status": "REQUEST_DENIED"
            }"#,
        )
        .unwrap();
        let NearbyResponse { status, results } = into_nearby_response(response);
        assert_eq!(ServiceStatus::RequestDenied, status);
        assert!(results.is_empty());
    }

    #[test]
    fn convert_zero_results_without_result_list() {
        let response = serde_json::from_str(r#"{ "status": "ZERO_RESULTS" }"#).unwrap();
        let NearbyResponse { status, results } = into_nearby_response(response);
        assert_eq!(ServiceStatus::ZeroResults, status);
        assert!(results.is_empty());
    }

    #[test]
    fn query_params() {
        let query = NearbyQuery {
            pos: Coordinate::from_lat_lng_deg(33.35069, -111.82261),
            radius_meters: 10_000,
            categories: vec!["restaurant".into()],
        };
        assert_eq!(
            vec![
                ("location", "33.35069,-111.82261".to_string()),
                ("radius", "10000".to_string()),
                ("type", "restaurant".to_string()),
            ],
            nearby_search_params(&query)
        );
    }
}
