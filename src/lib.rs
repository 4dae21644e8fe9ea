//! Facade crate for the Encore concert itinerary planner.
//!
//! This crate re-exports the core domain types and the default
//! [`ItinerarySelector`], so applications can depend on a single crate.

#![forbid(unsafe_code)]

pub use encore_core::{
    Coverage, Event, Itinerary, ItineraryError, ItinerarySelector, Planner, distance,
};

#[cfg(feature = "test-support")]
pub use encore_core::test_support;
