use serde::Deserialize;

use wte_core::gateways::{
    autocomplete::{AutocompleteGateway, Suggestions},
    GatewayError,
};
use wte_entities::{status::ServiceStatus, suggestion::SearchSuggestion};

use super::{service_error, GoogleMaps};

const AUTOCOMPLETE_PATH: &str = "place/autocomplete/json";

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<Prediction>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
    structured_formatting: StructuredFormatting,
}

#[derive(Debug, Deserialize)]
struct StructuredFormatting {
    main_text: String,
    #[serde(default)]
    secondary_text: String,
}

impl From<Prediction> for SearchSuggestion {
    fn from(from: Prediction) -> Self {
        let Prediction {
            place_id,
            description,
            structured_formatting:
                StructuredFormatting {
                    main_text,
                    secondary_text,
                },
        } = from;
        Self {
            id: place_id.into(),
            main_text,
            secondary_text,
            description,
        }
    }
}

fn into_suggestions(response: AutocompleteResponse) -> Suggestions {
    let AutocompleteResponse {
        status,
        predictions,
        error_message,
    } = response;
    let status = ServiceStatus::from_code(&status);
    if let Some(msg) = error_message {
        log::warn!("{}", service_error(status, Some(msg)));
    }
    Suggestions {
        status,
        data: predictions.into_iter().map(Into::into).collect(),
    }
}

impl AutocompleteGateway for GoogleMaps {
    async fn predictions(&self, input: &str) -> Result<Suggestions, GatewayError> {
        let response: AutocompleteResponse = self
            .get_json(AUTOCOMPLETE_PATH, &[("input", input)])
            .await?;
        Ok(into_suggestions(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_predictions() {
        let response = serde_json::from_str(
            r#"{
              "predictions": [
                {
                  "description": "Mesa, AZ, USA",
                  "matched_substrings": [{ "length": 4, "offset": 0 }],
                  "place_id": "ChIJ-mesa",
                  "structured_formatting": {
                    "main_text": "Mesa",
                    "secondary_text": "AZ, USA"
                  },
                  "types": ["locality", "political", "geocode"]
                },
                {
                  "description": "Mesa Verde",
                  "place_id": "ChIJ-verde",
                  "structured_formatting": { "main_text": "Mesa Verde" }
                }
              ],
              "status": "OK"
            }"#,
        )
        .unwrap();
        let Suggestions { status, data } = into_suggestions(response);
        assert_eq!(ServiceStatus::Ok, status);
        assert_eq!(2, data.len());
        assert_eq!("ChIJ-mesa", data[0].id.as_str());
        assert_eq!("Mesa", data[0].main_text);
        assert_eq!("AZ, USA", data[0].secondary_text);
        assert_eq!("Mesa, AZ, USA", data[0].description);
        assert_eq!("", data[1].secondary_text);
    }

    #[test]
    fn convert_zero_results() {
        let response =
            serde_json::from_str(r#"{ "predictions": [], "status": "ZERO_RESULTS" }"#).unwrap();
        let Suggestions { status, data } = into_suggestions(response);
        assert_eq!(ServiceStatus::ZeroResults, status);
        assert!(data.is_empty());
    }
}
