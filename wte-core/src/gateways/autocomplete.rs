use super::GatewayError;
use crate::entities::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub status: ServiceStatus,
    pub data: Vec<SearchSuggestion>,
}

pub trait AutocompleteGateway {
    async fn predictions(&self, input: &str) -> Result<Suggestions, GatewayError>;
}

impl<T: AutocompleteGateway> AutocompleteGateway for &T {
    async fn predictions(&self, input: &str) -> Result<Suggestions, GatewayError> {
        (**self).predictions(input).await
    }
}
