// The ports are only used with static dispatch on a single thread,
// so the futures returned by the gateway traits don't need to be `Send`.
#![allow(async_fn_in_trait)]

pub mod entities {
    pub use wte_entities::{geo::*, id::*, place::*, status::*, suggestion::*};
}

mod error;

pub mod finder;
pub mod gateways;
pub mod marker;
pub mod search;
pub mod settings;
pub mod util;

pub use self::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
