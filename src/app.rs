use std::io;

use anyhow::{anyhow, Result};

use wte_core::{
    entities::SearchSuggestion,
    finder::{ChoiceOutcome, PlaceFinder, QueryOutcome},
    marker::{price_indicator, MarkerEvent},
    search::{AddressSearch, InputOutcome, LocateOutcome},
};
use wte_gateways::{google::GoogleMaps, timer::TokioTimer};

use crate::{
    config::Config,
    gateways::{gateways, Device, GeoCoder, Gateways},
    terminal::TerminalMap,
};

type Finder = PlaceFinder<TerminalMap<io::Stdout>, GoogleMaps, Device>;
type Search = AddressSearch<GoogleMaps, GeoCoder, TokioTimer>;

/// The search box and the map of a single session.
pub struct App {
    finder: Finder,
    search: Search,
}

impl App {
    pub fn new(cfg: Config) -> Result<Self> {
        let Config { finder, search, .. } = &cfg;
        let Gateways {
            google,
            geocoder,
            device,
        } = gateways(&cfg)?;
        let search = AddressSearch::new(google.clone(), geocoder, TokioTimer, search.clone());
        let finder = PlaceFinder::new(google, device, finder.clone());
        finder.attach_map(TerminalMap::stdout());
        Ok(Self { finder, search })
    }

    /// Requests and prints suggestions for `text`.
    pub async fn suggest(&self, text: &str) -> Vec<SearchSuggestion> {
        match self.search.input(text).await {
            InputOutcome::Suggested(_) => {
                let suggestions = self.search.suggestions();
                for (index, suggestion) in suggestions.iter().enumerate() {
                    println!("  ({}) {suggestion}", index + 1);
                }
                suggestions
            }
            InputOutcome::NoSuggestions(status) => {
                println!("No suggestions ({status})");
                vec![]
            }
            InputOutcome::Cleared | InputOutcome::Superseded => vec![],
        }
    }

    /// Takes the best suggestion for `address` or geocodes it as typed.
    pub async fn search(&self, address: &str) -> Result<()> {
        let suggestions = self.suggest(address).await;
        let outcome = match suggestions.first() {
            Some(first) => self.search.select(first, &self.finder).await?,
            None => self.search.locate(address, &self.finder).await?,
        };
        report_location(&outcome);
        Ok(())
    }

    /// Selects one of the currently listed suggestions.
    pub async fn pick(&self, number: usize) -> Result<()> {
        let suggestions = self.search.suggestions();
        let suggestion = number
            .checked_sub(1)
            .and_then(|index| suggestions.get(index))
            .ok_or_else(|| anyhow!("No suggestion ({number}) listed"))?;
        let outcome = self.search.select(suggestion, &self.finder).await?;
        report_location(&outcome);
        Ok(())
    }

    pub async fn choose_for_me(&self) -> Result<()> {
        let outcome = self.finder.choose_for_me().await?;
        report_choice(&outcome);
        Ok(())
    }

    pub fn marker_event(&self, number: usize, event: MarkerEvent) -> Result<()> {
        let markers = self.finder.markers();
        let marker = number
            .checked_sub(1)
            .and_then(|index| markers.get(index))
            .ok_or_else(|| anyhow!("No marker [{number}] shown"))?;
        self.finder.on_marker_event(&marker.id, event);
        Ok(())
    }

    pub fn clear(&self) {
        self.search.set_value_without_fetch("");
        self.search.clear_suggestions();
    }

    pub fn value(&self) -> String {
        self.search.value()
    }
}

fn report_location(outcome: &LocateOutcome) {
    match outcome {
        LocateOutcome::Located { nearby, .. } => report_nearby(nearby),
        LocateOutcome::NotFound => println!("Address not found"),
        LocateOutcome::Superseded => log::debug!("Location has been superseded"),
    }
}

fn report_nearby(outcome: &QueryOutcome) {
    match outcome {
        QueryOutcome::Drawn(count) => println!("{count} places nearby"),
        QueryOutcome::NoResults(status) => println!("No results ({status})"),
        QueryOutcome::Superseded => log::debug!("Nearby search has been superseded"),
    }
}

fn report_choice(outcome: &ChoiceOutcome) {
    match outcome {
        ChoiceOutcome::Chosen(place) => {
            println!(
                "How about {}? {}",
                place.name,
                price_indicator(place.price_level)
            );
        }
        ChoiceOutcome::NoResults(status) => println!("No results ({status})"),
        ChoiceOutcome::Superseded => log::debug!("Choice has been superseded"),
    }
}
