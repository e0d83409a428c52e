pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{place_builder::*, suggestion_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{geo::*, place::*};

    #[derive(Debug)]
    pub struct PlaceResultBuild {
        place: PlaceResult,
    }

    impl PlaceResultBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn price_level(mut self, level: Option<u8>) -> Self {
            self.place.price_level =
                level.map(|l| PriceLevel::try_from(l).expect("valid price level"));
            self
        }
        pub fn pos(mut self, pos: Coordinate) -> Self {
            self.place.pos = pos;
            self
        }
        pub fn finish(self) -> PlaceResult {
            self.place
        }
    }

    impl Builder for PlaceResult {
        type Build = PlaceResultBuild;
        fn build() -> Self::Build {
            Self::Build {
                place: PlaceResult {
                    id: "".into(),
                    name: "".into(),
                    price_level: None,
                    pos: Coordinate::from_lat_lng_deg(0.0, 0.0),
                },
            }
        }
    }
}

pub mod suggestion_builder {

    use super::*;
    use crate::suggestion::*;

    #[derive(Debug)]
    pub struct SearchSuggestionBuild {
        suggestion: SearchSuggestion,
    }

    impl SearchSuggestionBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.suggestion.id = id.into();
            self
        }
        pub fn main_text(mut self, text: &str) -> Self {
            self.suggestion.main_text = text.into();
            self
        }
        pub fn secondary_text(mut self, text: &str) -> Self {
            self.suggestion.secondary_text = text.into();
            self
        }
        pub fn description(mut self, text: &str) -> Self {
            self.suggestion.description = text.into();
            self
        }
        pub fn finish(self) -> SearchSuggestion {
            self.suggestion
        }
    }

    impl Builder for SearchSuggestion {
        type Build = SearchSuggestionBuild;
        fn build() -> Self::Build {
            Self::Build {
                suggestion: SearchSuggestion {
                    id: "".into(),
                    main_text: "".into(),
                    secondary_text: "".into(),
                    description: "".into(),
                },
            }
        }
    }
}
