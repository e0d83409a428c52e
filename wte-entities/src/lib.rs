#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # wte-entities
//!
//! Reusable, agnostic domain entities for Where To Eat.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod place;
pub mod status;
pub mod suggestion;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
