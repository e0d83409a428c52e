//! Adapters for the external providers used by `wte-core`.

pub mod fixed_location;
pub mod google;
pub mod opencage;
pub mod timer;
