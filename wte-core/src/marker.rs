//! Markers with their paired info bubbles.

use crate::entities::*;

pub const FREE_INDICATOR: &str = "Free!";

const PRICE_SYMBOL: char = '$';

/// `"Free!"` for unknown or zero price levels, one `$` per level otherwise.
pub fn price_indicator(level: Option<PriceLevel>) -> String {
    match level {
        Some(level) if !level.is_free() => {
            std::iter::repeat(PRICE_SYMBOL)
                .take(usize::from(level.to_u8()))
                .collect()
        }
        _ => FREE_INDICATOR.to_string(),
    }
}

pub fn bubble_text(place: &PlaceResult) -> String {
    format!("{}\n{}", place.name, price_indicator(place.price_level))
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerBubble {
    /// The id of the place this marker represents.
    pub id: Id,
    pub pos: Coordinate,
    pub bubble_text: String,
    pub is_open: bool,
}

impl From<&PlaceResult> for MarkerBubble {
    fn from(place: &PlaceResult) -> Self {
        Self {
            id: place.id.clone(),
            pos: place.pos,
            bubble_text: bubble_text(place),
            is_open: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEvent {
    MouseOver,
    Click,
    MouseOut,
}

impl MarkerEvent {
    pub const fn opens_bubble(self) -> bool {
        match self {
            Self::MouseOver | Self::Click => true,
            Self::MouseOut => false,
        }
    }
}
