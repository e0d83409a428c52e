use thiserror::Error;

use crate::{geo::*, id::*};

/// Relative price of a place as reported by the provider.
///
/// `0` means free of charge, `4` is the most expensive level.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct PriceLevel(u8);

impl PriceLevel {
    pub const FREE: Self = Self(0);

    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(4)
    }

    pub const fn is_free(self) -> bool {
        self.0 == 0
    }

    pub const fn to_u8(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid price level: {0}")]
pub struct InvalidPriceLevel(pub i64);

impl TryFrom<i64> for PriceLevel {
    type Error = InvalidPriceLevel;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::min().0)..=i64::from(Self::max().0)).contains(&from) {
            Ok(Self(from as u8))
        } else {
            Err(InvalidPriceLevel(from))
        }
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = InvalidPriceLevel;
    fn try_from(from: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(from))
    }
}

impl From<PriceLevel> for u8 {
    fn from(from: PriceLevel) -> Self {
        from.0
    }
}

/// A place returned by a nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceResult {
    pub id: Id,
    pub name: String,
    pub price_level: Option<PriceLevel>,
    pub pos: Coordinate,
}
