//! Address search box with debounced autocompletion.

use std::cell::RefCell;

use crate::{
    entities::*,
    finder::{PlaceFinder, QueryOutcome},
    gateways::{
        autocomplete::{AutocompleteGateway, Suggestions},
        geocode::GeoCodingGateway,
        geolocation::GeoLocationGateway,
        map_view::MapView,
        places::PlacesGateway,
        timer::Timer,
    },
    settings::SearchSettings,
    util::sequence::RequestSequence,
    Result,
};

pub const PLACEHOLDER: &str = "Where are you going?";

#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// Suggestions are available for the current input.
    Suggested(usize),
    /// The provider did not respond with `OK`, no suggestions are shown.
    NoSuggestions(ServiceStatus),
    /// The input was empty and the list has been dismissed.
    Cleared,
    /// The user kept on typing while waiting.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocateOutcome {
    Located {
        pos: Coordinate,
        nearby: QueryOutcome,
    },
    /// The address could not be resolved, nothing has been drawn.
    NotFound,
    Superseded,
}

#[derive(Debug)]
pub struct AddressSearch<A, G, T> {
    autocomplete: A,
    geocoder: G,
    timer: T,
    settings: SearchSettings,
    value: RefCell<String>,
    suggestions: RefCell<Option<Suggestions>>,
    input_sequence: RequestSequence,
}

impl<A, G, T> AddressSearch<A, G, T>
where
    A: AutocompleteGateway,
    G: GeoCodingGateway,
    T: Timer,
{
    pub fn new(autocomplete: A, geocoder: G, timer: T, settings: SearchSettings) -> Self {
        Self {
            autocomplete,
            geocoder,
            timer,
            settings,
            value: RefCell::new(String::new()),
            suggestions: RefCell::new(None),
            input_sequence: RequestSequence::default(),
        }
    }

    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    /// Replaces the input value without requesting suggestions.
    pub fn set_value_without_fetch(&self, value: &str) {
        self.input_sequence.invalidate();
        *self.value.borrow_mut() = value.to_owned();
    }

    /// Suggestions are only listed if the provider responded with `OK`.
    pub fn suggestions(&self) -> Vec<SearchSuggestion> {
        match &*self.suggestions.borrow() {
            Some(Suggestions { status, data }) if status.is_ok() => data.clone(),
            _ => vec![],
        }
    }

    pub fn clear_suggestions(&self) {
        self.suggestions.replace(None);
    }

    /// Handles a keystroke.
    ///
    /// Suggestions are requested after the input has been stable for the debounce period.
    pub async fn input(&self, text: &str) -> InputOutcome {
        *self.value.borrow_mut() = text.to_owned();
        let ticket = self.input_sequence.next();
        if text.trim().is_empty() {
            self.clear_suggestions();
            return InputOutcome::Cleared;
        }
        self.timer.sleep(self.settings.debounce).await;
        if !self.input_sequence.is_latest(ticket) {
            return InputOutcome::Superseded;
        }
        let suggestions = match self.autocomplete.predictions(text).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                log::warn!("Unable to fetch suggestions for '{text}': {err}");
                Suggestions {
                    status: ServiceStatus::UnknownError,
                    data: vec![],
                }
            }
        };
        if !self.input_sequence.is_latest(ticket) {
            log::debug!("Discarding outdated suggestions for '{text}'");
            return InputOutcome::Superseded;
        }
        let outcome = if suggestions.status.is_ok() {
            InputOutcome::Suggested(suggestions.data.len())
        } else {
            InputOutcome::NoSuggestions(suggestions.status)
        };
        self.suggestions.replace(Some(suggestions));
        outcome
    }

    /// Takes over the suggestion and searches for places around it.
    pub async fn select<M, P, L>(
        &self,
        suggestion: &SearchSuggestion,
        finder: &PlaceFinder<M, P, L>,
    ) -> Result<LocateOutcome>
    where
        M: MapView,
        P: PlacesGateway,
        L: GeoLocationGateway,
    {
        self.set_value_without_fetch(&suggestion.description);
        self.clear_suggestions();
        self.locate(&suggestion.description, finder).await
    }

    /// Resolves `address` and searches for places around it.
    ///
    /// Geocoding failures are only logged.
    pub async fn locate<M, P, L>(
        &self,
        address: &str,
        finder: &PlaceFinder<M, P, L>,
    ) -> Result<LocateOutcome>
    where
        M: MapView,
        P: PlacesGateway,
        L: GeoLocationGateway,
    {
        // Supersedes every pending interaction of the finder
        let ticket = finder.begin();
        let candidates = match self.geocoder.geocode(address).await {
            Ok(candidates) => candidates,
            Err(err) => {
                log::warn!("Failed to resolve address location '{address}': {err}");
                return Ok(LocateOutcome::NotFound);
            }
        };
        if !finder.is_current(ticket) {
            log::debug!("Discarding outdated location of '{address}'");
            return Ok(LocateOutcome::Superseded);
        }
        let Some(pos) = candidates.into_iter().next().filter(Coordinate::is_resolved) else {
            log::warn!("Failed to resolve address location '{address}': no result");
            return Ok(LocateOutcome::NotFound);
        };
        log::debug!("Resolved address location '{address}': {pos}");
        finder.recenter_for(ticket, pos);
        let nearby = finder.find_nearby_for(ticket, pos).await?;
        if nearby == QueryOutcome::Superseded {
            return Ok(LocateOutcome::Superseded);
        }
        Ok(LocateOutcome::Located { pos, nearby })
    }
}
