//! Facade crate for the placerank context re-scoring engine.
//!
//! This crate re-exports the domain types from `placerank-core` and the
//! scoring pipeline from `placerank-scorer`, so callers depend on one crate.

#![forbid(unsafe_code)]

pub use placerank_core::{
    BOOST_THRESHOLD, Category, ContextError, ContextFactor, ContextSnapshot, DAMPING_FLOOR,
    FactorBreakdown, FactorResult, FactorScorer, MAX_MULTIPLIER, MIN_MULTIPLIER, Mood, MoodLabel,
    Place, PlaceError, PlaceTrait, PlaceTraitSet, REDUCTION_THRESHOLD, RecentActivity,
    ScoredPlace, TransportMode, UserLocation, Weather, WeatherCondition,
};

pub use placerank_scorer::{
    Explanation, FactorBundle, apply_contextual_factors, compose, composite_score,
    generate_context_explanation, rank,
};

#[cfg(feature = "test-support")]
pub use placerank_core::test_support;
