//! Core domain types for the placerank engine.
//!
//! The crate models candidate places, the situational context a request is
//! scored against, and the factor vocabulary shared by the scorer and its
//! callers. Scoring itself lives in `placerank-scorer`; this crate only
//! defines the data and the [`FactorScorer`] seam.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod context;
pub mod factor;
mod keyword;
pub mod place;
pub mod place_traits;
pub mod scored;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod weather;

pub use context::{
    ContextError, ContextSnapshot, Mood, MoodLabel, RecentActivity, TransportMode, UserLocation,
};
pub use factor::{
    BOOST_THRESHOLD, ContextFactor, DAMPING_FLOOR, FactorAccumulator, FactorResult, FactorScorer,
    MAX_MULTIPLIER, MIN_MULTIPLIER, REDUCTION_THRESHOLD, clamp_multiplier,
};
pub use place::{Category, Place, PlaceError};
pub use place_traits::{PlaceTrait, PlaceTraitSet};
pub use scored::{FactorBreakdown, ScoredPlace};
pub use weather::{Weather, WeatherCondition};
