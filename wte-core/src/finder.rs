//! Populates the map with nearby places.

use std::cell::{Cell, RefCell};

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    entities::*,
    gateways::{
        geolocation::GeoLocationGateway,
        map_view::MapView,
        places::{NearbyQuery, PlacesGateway},
    },
    marker::{MarkerBubble, MarkerEvent},
    settings::FinderSettings,
    util::{
        select::pick_one,
        sequence::{RequestSequence, Ticket},
    },
    Error, Result,
};

/// Result of a nearby search that draws every place.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The number of markers that have been drawn.
    Drawn(usize),
    NoResults(ServiceStatus),
    /// A later request has been issued in the meantime.
    Superseded,
}

/// Result of a nearby search that picks a single place.
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceOutcome {
    Chosen(PlaceResult),
    NoResults(ServiceStatus),
    Superseded,
}

/// Progress of the latest "choose for me" interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChooseForMeState {
    #[default]
    Idle,
    AwaitingFix,
    Resolved,
    QueryInFlight,
    Done,
    Failed,
}

#[derive(Debug)]
pub enum MapState<M> {
    Loading,
    Loaded(M),
    Failed(String),
}

/// Session scoped state that outlives single interactions.
#[derive(Debug, Default)]
struct Session {
    user_location: Cell<Option<Coordinate>>,
    fix_in_flight: Cell<bool>,
}

/// Resets the in-flight flag even if the pending fix is dropped.
struct FixGuard<'a>(&'a Cell<bool>);

impl<'a> FixGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self(flag))
    }
}

impl Drop for FixGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[derive(Debug)]
pub struct PlaceFinder<M, P, L> {
    map: RefCell<MapState<M>>,
    places: P,
    geolocation: L,
    settings: FinderSettings,
    session: Session,
    markers: RefCell<Vec<MarkerBubble>>,
    sequence: RequestSequence,
    choose_state: Cell<ChooseForMeState>,
    rng: RefCell<StdRng>,
}

impl<M, P, L> PlaceFinder<M, P, L>
where
    M: MapView,
    P: PlacesGateway,
    L: GeoLocationGateway,
{
    pub fn new(places: P, geolocation: L, settings: FinderSettings) -> Self {
        Self {
            map: RefCell::new(MapState::Loading),
            places,
            geolocation,
            settings,
            session: Session::default(),
            markers: RefCell::new(vec![]),
            sequence: RequestSequence::default(),
            choose_state: Cell::new(ChooseForMeState::default()),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    #[must_use]
    pub fn with_rng(self, rng: StdRng) -> Self {
        self.rng.replace(rng);
        self
    }

    pub const fn settings(&self) -> &FinderSettings {
        &self.settings
    }

    // -- map lifecycle -- //

    /// Must be called as soon as the map has been loaded.
    pub fn attach_map(&self, map: M) {
        log::debug!("Map loaded");
        map.pan_to(self.settings.initial_center);
        map.set_zoom(self.settings.initial_zoom);
        self.map.replace(MapState::Loaded(map));
    }

    pub fn map_load_failed(&self, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("Error loading maps: {reason}");
        self.map.replace(MapState::Failed(reason));
    }

    pub fn is_map_loaded(&self) -> bool {
        matches!(*self.map.borrow(), MapState::Loaded(_))
    }

    fn ensure_map_loaded(&self) -> Result<()> {
        match &*self.map.borrow() {
            MapState::Loaded(_) => Ok(()),
            MapState::Loading => Err(Error::MapNotReady),
            MapState::Failed(reason) => Err(Error::MapLoad(reason.clone())),
        }
    }

    fn with_map<T>(&self, f: impl FnOnce(&M) -> T) -> Option<T> {
        match &*self.map.borrow() {
            MapState::Loaded(map) => Some(f(map)),
            MapState::Loading => {
                log::warn!("No map attached yet");
                None
            }
            MapState::Failed(reason) => {
                log::warn!("Map is not available: {reason}");
                None
            }
        }
    }

    // -- operations -- //

    /// Starts a user interaction that will eventually change the map.
    ///
    /// Only the interaction that has been started last may recenter the map
    /// or draw markers, regardless of the order in which they complete.
    pub fn begin(&self) -> Ticket {
        self.sequence.next()
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.sequence.is_latest(ticket)
    }

    /// Pans the map to `pos` and zooms into the neighborhood.
    pub fn recenter(&self, pos: Coordinate) {
        if !pos.is_resolved() {
            log::warn!("Refusing to recenter on an unresolved position");
            return;
        }
        self.with_map(|map| {
            map.pan_to(pos);
            map.set_zoom(self.settings.zoom);
        });
    }

    /// Recenters the map unless a later interaction has been started.
    pub fn recenter_for(&self, ticket: Ticket, pos: Coordinate) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Not recentering on outdated position {pos}");
            return false;
        }
        self.recenter(pos);
        true
    }

    pub async fn find_nearby(&self, pos: Coordinate) -> Result<QueryOutcome> {
        self.find_nearby_within(pos, self.settings.radius_meters, &self.settings.category)
            .await
    }

    /// Draws a marker for every place of `category` around `pos`.
    pub async fn find_nearby_within(
        &self,
        pos: Coordinate,
        radius_meters: u32,
        category: &str,
    ) -> Result<QueryOutcome> {
        self.ensure_queryable(pos)?;
        let ticket = self.begin();
        self.query_nearby(ticket, pos, radius_meters, category).await
    }

    /// Like [`Self::find_nearby`] as part of an interaction started with [`Self::begin`].
    pub async fn find_nearby_for(&self, ticket: Ticket, pos: Coordinate) -> Result<QueryOutcome> {
        self.ensure_queryable(pos)?;
        self.query_nearby(ticket, pos, self.settings.radius_meters, &self.settings.category)
            .await
    }

    pub async fn choose_nearby_random(&self, pos: Coordinate) -> Result<ChoiceOutcome> {
        self.choose_nearby_random_within(pos, self.settings.radius_meters, &self.settings.category)
            .await
    }

    /// Picks a single random place of `category` around `pos` and centers the map on it.
    pub async fn choose_nearby_random_within(
        &self,
        pos: Coordinate,
        radius_meters: u32,
        category: &str,
    ) -> Result<ChoiceOutcome> {
        self.ensure_queryable(pos)?;
        let ticket = self.begin();
        self.choose_random(ticket, pos, radius_meters, category).await
    }

    /// Returns the cached user location or requests a single position fix.
    pub async fn resolve_user_location(&self) -> Result<Coordinate> {
        if let Some(pos) = self.cached_user_location() {
            return Ok(pos);
        }
        let Some(_guard) = FixGuard::acquire(&self.session.fix_in_flight) else {
            log::info!("Still waiting for a position fix");
            return Err(Error::FixInProgress);
        };
        match self.geolocation.current_position().await {
            Ok(pos) if pos.is_resolved() => {
                log::debug!("Resolved user location: {pos}");
                self.session.user_location.set(Some(pos));
                Ok(pos)
            }
            Ok(_) => {
                log::warn!("Received an unresolved position fix");
                Err(Error::UnresolvedPosition)
            }
            Err(err) => {
                log::warn!("{err}");
                Err(err.into())
            }
        }
    }

    pub fn cached_user_location(&self) -> Option<Coordinate> {
        self.session.user_location.get()
    }

    /// Picks a random place near the user.
    pub async fn choose_for_me(&self) -> Result<ChoiceOutcome> {
        self.ensure_map_loaded()?;
        let cached = self.cached_user_location();
        if cached.is_none() && self.session.fix_in_flight.get() {
            log::info!("Still waiting for a position fix");
            return Err(Error::FixInProgress);
        }
        let ticket = self.begin();
        let pos = if let Some(pos) = cached {
            pos
        } else {
            self.choose_state.set(ChooseForMeState::AwaitingFix);
            match self.resolve_user_location().await {
                Ok(pos) => pos,
                Err(err) => {
                    self.choose_state.set(ChooseForMeState::Failed);
                    return Err(err);
                }
            }
        };
        self.choose_state.set(ChooseForMeState::Resolved);
        self.choose_state.set(ChooseForMeState::QueryInFlight);
        let outcome = self
            .choose_random(ticket, pos, self.settings.radius_meters, &self.settings.category)
            .await;
        self.choose_state.set(if outcome.is_ok() {
            ChooseForMeState::Done
        } else {
            ChooseForMeState::Failed
        });
        outcome
    }

    pub fn choose_for_me_state(&self) -> ChooseForMeState {
        self.choose_state.get()
    }

    /// Opens or closes the bubble of a marker that is currently shown.
    ///
    /// Returns `false` if the marker is unknown.
    pub fn on_marker_event(&self, id: &Id, event: MarkerEvent) -> bool {
        let mut markers = self.markers.borrow_mut();
        let Some(marker) = markers.iter_mut().find(|m| &m.id == id) else {
            log::debug!("Ignoring {event:?} of unknown marker {id}");
            return false;
        };
        let open = event.opens_bubble();
        self.with_map(|map| {
            if open {
                map.open_bubble(id);
            } else {
                map.close_bubble(id);
            }
        });
        marker.is_open = open;
        true
    }

    pub fn markers(&self) -> Vec<MarkerBubble> {
        self.markers.borrow().clone()
    }

    // -- helpers -- //

    fn ensure_queryable(&self, pos: Coordinate) -> Result<()> {
        self.ensure_map_loaded()?;
        if !pos.is_resolved() {
            return Err(Error::UnresolvedPosition);
        }
        Ok(())
    }

    async fn query_nearby(
        &self,
        ticket: Ticket,
        pos: Coordinate,
        radius_meters: u32,
        category: &str,
    ) -> Result<QueryOutcome> {
        if !self.is_current(ticket) {
            return Ok(QueryOutcome::Superseded);
        }
        let (status, places) = self.nearby_search(pos, radius_meters, category).await;
        if !self.is_current(ticket) {
            log::debug!("Discarding outdated nearby search results around {pos}");
            return Ok(QueryOutcome::Superseded);
        }
        if !status.is_ok() {
            self.draw_markers(&[]);
            return Ok(QueryOutcome::NoResults(status));
        }
        let count = self.draw_markers(&places);
        Ok(QueryOutcome::Drawn(count))
    }

    async fn choose_random(
        &self,
        ticket: Ticket,
        pos: Coordinate,
        radius_meters: u32,
        category: &str,
    ) -> Result<ChoiceOutcome> {
        if !self.is_current(ticket) {
            log::debug!("Not choosing around {pos}, a later interaction has been started");
            return Ok(ChoiceOutcome::Superseded);
        }
        let (status, places) = self.nearby_search(pos, radius_meters, category).await;
        if !self.is_current(ticket) {
            log::debug!("Discarding outdated random choice around {pos}");
            return Ok(ChoiceOutcome::Superseded);
        }
        if !status.is_ok() {
            self.draw_markers(&[]);
            return Ok(ChoiceOutcome::NoResults(status));
        }
        let chosen = pick_one(&places, &mut *self.rng.borrow_mut()).cloned();
        let Some(place) = chosen else {
            log::info!("Nothing to choose from around {pos}");
            self.draw_markers(&[]);
            return Ok(ChoiceOutcome::NoResults(ServiceStatus::ZeroResults));
        };
        log::info!("Chose '{}' out of {} places", place.name, places.len());
        self.recenter_for(ticket, place.pos);
        self.draw_markers(std::slice::from_ref(&place));
        Ok(ChoiceOutcome::Chosen(place))
    }

    async fn nearby_search(
        &self,
        pos: Coordinate,
        radius_meters: u32,
        category: &str,
    ) -> (ServiceStatus, Vec<PlaceResult>) {
        let query = NearbyQuery {
            pos,
            radius_meters,
            categories: vec![category.to_string()],
        };
        match self.places.nearby_search(&query).await {
            Ok(res) => {
                if !res.status.is_ok() {
                    log::info!("Nearby search around {pos} returned {}", res.status);
                }
                (res.status, res.results)
            }
            Err(err) => {
                log::warn!("Nearby search around {pos} failed: {err}");
                (ServiceStatus::UnknownError, vec![])
            }
        }
    }

    /// Replaces all shown markers.
    fn draw_markers(&self, places: &[PlaceResult]) -> usize {
        let markers: Vec<_> = places
            .iter()
            .inspect(|place| log::debug!("{place:?}"))
            .map(MarkerBubble::from)
            .collect();
        self.with_map(|map| {
            map.clear_markers();
            for marker in &markers {
                map.add_marker(marker);
            }
        });
        let count = markers.len();
        self.markers.replace(markers);
        count
    }
}
