use strum::{Display, EnumIter, EnumString};

/// Status code reported by the external places, autocomplete and geocoding services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    NotFound,
    UnknownError,
}

impl ServiceStatus {
    /// Only `OK` responses carry usable results.
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Parses a raw status code and maps anything unknown to [`ServiceStatus::UnknownError`].
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or(Self::UnknownError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parse_provider_codes() {
        assert_eq!(ServiceStatus::Ok, ServiceStatus::from_code("OK"));
        assert_eq!(
            ServiceStatus::ZeroResults,
            ServiceStatus::from_code("ZERO_RESULTS")
        );
        assert_eq!(
            ServiceStatus::OverQueryLimit,
            ServiceStatus::from_code("OVER_QUERY_LIMIT")
        );
        assert_eq!(
            ServiceStatus::UnknownError,
            ServiceStatus::from_code("SOMETHING_NEW")
        );
    }

    #[test]
    fn display_matches_provider_codes() {
        for status in ServiceStatus::iter() {
            assert_eq!(status, ServiceStatus::from_code(&status.to_string()));
        }
    }

    #[test]
    fn only_ok_is_usable() {
        assert_eq!(1, ServiceStatus::iter().filter(|s| s.is_ok()).count());
    }
}
