//! Core domain types for the Encore itinerary planner.
//!
//! Encore picks a conflict-free, date-ordered subset of concerts from a pool
//! of candidates: no performer twice, no date twice, and each performer's
//! earliest show preferred. Date ties are broken by proximity to the
//! previously chosen show.
//!
//! The crate exposes the [`Event`] and [`Itinerary`] values, the [`Planner`]
//! trait, and [`ItinerarySelector`], the default planner. [`Coverage`]
//! reports which performers made it into an itinerary.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coverage;
pub mod distance;
pub mod event;
pub mod itinerary;
mod planner;
mod selector;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use coverage::Coverage;
pub use event::Event;
pub use itinerary::{Itinerary, ItineraryError};
pub use planner::Planner;
pub use selector::ItinerarySelector;
