//! Context-aware re-scoring for placerank candidates.
//!
//! The pipeline runs in four stages:
//! - **Normalisation** turns a [`ContextSnapshot`](placerank_core::ContextSnapshot)
//!   into per-factor multiplier tables ([`FactorBundle`]).
//! - **Scoring** evaluates each table against a place's category and
//!   [`PlaceTraitSet`](placerank_core::PlaceTraitSet) through the
//!   [`FactorScorer`](placerank_core::FactorScorer) trait.
//! - **Composition** multiplies the factor scores, damping weak activity and
//!   location signals, and scales the base match score ([`compose`]).
//! - **Ranking** stably sorts the results by final score ([`rank`]).
//!
//! [`generate_context_explanation`] derives short display sentences from the
//! same tables. Every function is pure: nothing is cached between requests.
//!
//! # Examples
//!
//! ```
//! use placerank_core::{Category, ContextSnapshot, Mood, Place};
//! use placerank_scorer::apply_contextual_factors;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let places = vec![
//!     Place::new("sports bar", Category::Bar, 8.0)?.with_tags(["crowded", "loud"]),
//!     Place::new("tea house", Category::Cafe, 7.0)?.with_tags(["조용한", "아늑한"]),
//! ];
//! let context = ContextSnapshot::new().with_mood(Mood::new("sad", 5)?);
//!
//! let ranked = apply_contextual_factors(&places, Some(&context));
//! assert_eq!(ranked[0].id(), "tea house");
//! assert!(ranked[0].context_score > 1.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod compose;
mod explain;
pub mod normalize;
mod rank;
mod score;

pub use compose::{apply_contextual_factors, compose, compose_place, composite_score};
pub use explain::{Explanation, explain, generate_context_explanation};
pub use normalize::{
    ActivityFactors, DistanceBand, FactorBundle, HourBucket, LocationFactors, MoodFactors,
    MultiplierTable, RegionMatch, TimeFactors, WeatherFactors, decay_factor, max_distance,
    transition_multiplier,
};
pub use rank::rank;
