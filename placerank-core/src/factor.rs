//! Context factors and the multiplier bookkeeping shared by every scorer.
//!
//! Each factor produces one multiplier around the neutral value `1.0`. The
//! multiplier is the clamped product of the table entries that applied to a
//! place; entries that move the score meaningfully are remembered as boost or
//! reduction reasons under the factor's name.

use std::fmt;

use crate::{Place, PlaceTraitSet};

/// Lower bound for every factor multiplier and the composite score.
pub const MIN_MULTIPLIER: f64 = 0.5;
/// Upper bound for every factor multiplier and the composite score.
pub const MAX_MULTIPLIER: f64 = 2.0;
/// Entries above this value are recorded as a boost.
pub const BOOST_THRESHOLD: f64 = 1.05;
/// Entries below this value are recorded as a reduction.
pub const REDUCTION_THRESHOLD: f64 = 0.95;
/// Floor applied to the activity and location multipliers during
/// composition.
pub const DAMPING_FLOOR: f64 = 0.8;

/// One of the five independent context signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ContextFactor {
    /// Hour of day and day of week.
    Time,
    /// Current weather.
    Weather,
    /// The user's mood.
    Mood,
    /// What the user did last.
    ActivitySequence,
    /// Distance and region.
    Location,
}

impl ContextFactor {
    /// All factors in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Time,
        Self::Weather,
        Self::Mood,
        Self::ActivitySequence,
        Self::Location,
    ];

    /// Reason tag used in boost and reduction lists.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Weather => "weather",
            Self::Mood => "mood",
            Self::ActivitySequence => "activity_sequence",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for ContextFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp a multiplier into `[MIN_MULTIPLIER, MAX_MULTIPLIER]`.
///
/// Non-finite input is treated as neutral.
///
/// # Examples
/// ```
/// use placerank_core::clamp_multiplier;
///
/// assert_eq!(clamp_multiplier(3.4), 2.0);
/// assert_eq!(clamp_multiplier(0.1), 0.5);
/// assert_eq!(clamp_multiplier(f64::NAN), 1.0);
/// ```
#[must_use]
pub fn clamp_multiplier(value: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("replacing non-finite multiplier {value} with 1.0");
        return 1.0;
    }
    value.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER)
}

/// The outcome of scoring one place against one factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorResult {
    /// Which factor produced the result.
    pub factor: ContextFactor,
    /// Clamped multiplier.
    pub score: f64,
    /// At least one applied entry exceeded [`BOOST_THRESHOLD`].
    pub boosted: bool,
    /// At least one applied entry fell below [`REDUCTION_THRESHOLD`].
    pub reduced: bool,
}

impl FactorResult {
    /// A neutral result, used when the context lacks this factor's input.
    #[must_use]
    pub const fn neutral(factor: ContextFactor) -> Self {
        Self {
            factor,
            score: 1.0,
            boosted: false,
            reduced: false,
        }
    }
}

/// Running product of the table entries that apply to one place.
///
/// # Examples
/// ```
/// use placerank_core::{ContextFactor, FactorAccumulator};
///
/// let mut acc = FactorAccumulator::new(ContextFactor::Weather);
/// acc.apply(1.3);
/// acc.apply(0.6);
/// let result = acc.finish();
/// assert!(result.boosted && result.reduced);
/// assert!((result.score - 0.78).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FactorAccumulator {
    factor: ContextFactor,
    product: f64,
    boosted: bool,
    reduced: bool,
}

impl FactorAccumulator {
    /// Start a neutral accumulator for `factor`.
    #[must_use]
    pub const fn new(factor: ContextFactor) -> Self {
        Self {
            factor,
            product: 1.0,
            boosted: false,
            reduced: false,
        }
    }

    /// Multiply in one table entry.
    ///
    /// Non-finite entries are skipped with a warning.
    pub fn apply(&mut self, multiplier: f64) {
        if !multiplier.is_finite() {
            log::warn!("skipping non-finite {} multiplier", self.factor);
            return;
        }
        self.product *= multiplier;
        self.boosted |= multiplier > BOOST_THRESHOLD;
        self.reduced |= multiplier < REDUCTION_THRESHOLD;
    }

    /// Multiply in `multiplier` when `applies` holds.
    pub fn apply_if(&mut self, applies: bool, multiplier: f64) {
        if applies {
            self.apply(multiplier);
        }
    }

    /// Current unclamped product.
    #[must_use]
    pub const fn product(&self) -> f64 {
        self.product
    }

    /// Clamp the product and produce the final result.
    #[must_use]
    pub fn finish(self) -> FactorResult {
        FactorResult {
            factor: self.factor,
            score: clamp_multiplier(self.product),
            boosted: self.boosted,
            reduced: self.reduced,
        }
    }
}

/// Score one place against one context factor.
///
/// Implementations are built from a request's context and must be
/// thread-safe (`Send` + `Sync`) so one request's places can be scored in
/// parallel. Scoring is infallible: missing or malformed inputs produce a
/// neutral multiplier.
///
/// # Examples
///
/// ```rust
/// use placerank_core::{
///     Category, ContextFactor, FactorAccumulator, FactorResult, FactorScorer, Place,
///     PlaceTraitSet,
/// };
///
/// struct QuietBonus;
///
/// impl FactorScorer for QuietBonus {
///     fn factor(&self) -> ContextFactor {
///         ContextFactor::Mood
///     }
///
///     fn score(&self, _place: &Place, traits: &PlaceTraitSet) -> FactorResult {
///         let mut acc = FactorAccumulator::new(self.factor());
///         acc.apply_if(traits.contains(placerank_core::PlaceTrait::Quiet), 1.2);
///         acc.finish()
///     }
/// }
///
/// # fn main() -> Result<(), placerank_core::PlaceError> {
/// let place = Place::new("p-1", Category::Cafe, 1.0)?.with_tags(["quiet"]);
/// let traits = PlaceTraitSet::of(&place);
/// assert_eq!(QuietBonus.score(&place, &traits).score, 1.2);
/// # Ok(())
/// # }
/// ```
pub trait FactorScorer: Send + Sync {
    /// The factor this scorer reports under.
    fn factor(&self) -> ContextFactor;

    /// Return the multiplier for `place` given its precomputed `traits`.
    fn score(&self, place: &Place, traits: &PlaceTraitSet) -> FactorResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.3, true, false)]
    #[case(1.05, false, false)]
    #[case(0.95, false, false)]
    #[case(0.7, false, true)]
    fn thresholds_are_strict(#[case] entry: f64, #[case] boosted: bool, #[case] reduced: bool) {
        let mut acc = FactorAccumulator::new(ContextFactor::Time);
        acc.apply(entry);
        let result = acc.finish();
        assert_eq!((result.boosted, result.reduced), (boosted, reduced));
    }

    #[rstest]
    fn product_is_clamped_on_finish() {
        let mut acc = FactorAccumulator::new(ContextFactor::Mood);
        acc.apply(1.5);
        acc.apply(1.5);
        assert!((acc.product() - 2.25).abs() < 1e-9);
        assert_eq!(acc.finish().score, MAX_MULTIPLIER);
    }

    #[rstest]
    fn non_finite_entries_are_skipped() {
        let mut acc = FactorAccumulator::new(ContextFactor::Location);
        acc.apply(f64::NAN);
        acc.apply(f64::INFINITY);
        assert_eq!(acc.finish(), FactorResult::neutral(ContextFactor::Location));
    }

    #[rstest]
    fn apply_if_ignores_false_conditions() {
        let mut acc = FactorAccumulator::new(ContextFactor::Weather);
        acc.apply_if(false, 0.5);
        assert_eq!(acc.finish().score, 1.0);
    }

    #[rstest]
    fn factor_names_match_reason_tags() {
        let names: Vec<_> = ContextFactor::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            ["time", "weather", "mood", "activity_sequence", "location"]
        );
    }
}
