//! Re-scored places as returned to callers.

use crate::{ContextFactor, FactorResult, Place};

/// Per-factor multipliers recorded for one place.
///
/// The values are the clamped factor scores before the damping floor is
/// applied during composition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FactorBreakdown {
    /// Time multiplier.
    pub time_score: f64,
    /// Weather multiplier.
    pub weather_score: f64,
    /// Mood multiplier.
    pub mood_score: f64,
    /// Activity-sequence multiplier.
    pub activity_score: f64,
    /// Location multiplier.
    pub location_score: f64,
}

impl FactorBreakdown {
    /// Every factor neutral.
    pub const NEUTRAL: Self = Self {
        time_score: 1.0,
        weather_score: 1.0,
        mood_score: 1.0,
        activity_score: 1.0,
        location_score: 1.0,
    };

    /// Multiplier recorded for `factor`.
    #[must_use]
    pub const fn get(&self, factor: ContextFactor) -> f64 {
        match factor {
            ContextFactor::Time => self.time_score,
            ContextFactor::Weather => self.weather_score,
            ContextFactor::Mood => self.mood_score,
            ContextFactor::ActivitySequence => self.activity_score,
            ContextFactor::Location => self.location_score,
        }
    }

    /// Record a factor result.
    pub const fn record(&mut self, result: &FactorResult) {
        let slot = match result.factor {
            ContextFactor::Time => &mut self.time_score,
            ContextFactor::Weather => &mut self.weather_score,
            ContextFactor::Mood => &mut self.mood_score,
            ContextFactor::ActivitySequence => &mut self.activity_score,
            ContextFactor::Location => &mut self.location_score,
        };
        *slot = result.score;
    }
}

impl Default for FactorBreakdown {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// A place together with its context-adjusted score.
///
/// Serialises as the original place fields followed by the scoring fields,
/// so JSON consumers see a superset of the input object.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoredPlace {
    /// The input place, unchanged.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub place: Place,
    /// Composite multiplier in `[0.5, 2.0]`.
    pub context_score: f64,
    /// `base_match_score × context_score`.
    pub final_match_score: f64,
    /// Factors that raised the score, without duplicates.
    pub boost_reasons: Vec<ContextFactor>,
    /// Factors that lowered the score, without duplicates.
    pub reduction_reasons: Vec<ContextFactor>,
    /// Per-factor multipliers.
    pub context_factors: FactorBreakdown,
}

impl ScoredPlace {
    /// Wrap a place without applying any context.
    ///
    /// # Examples
    /// ```
    /// use placerank_core::{Category, Place, ScoredPlace};
    ///
    /// # fn main() -> Result<(), placerank_core::PlaceError> {
    /// let scored = ScoredPlace::unscored(Place::new("p-1", Category::Bar, 4.0)?);
    /// assert_eq!(scored.context_score, 1.0);
    /// assert_eq!(scored.final_match_score, 4.0);
    /// assert!(scored.boost_reasons.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn unscored(place: Place) -> Self {
        let final_match_score = place.base_match_score;
        Self {
            place,
            context_score: 1.0,
            final_match_score,
            boost_reasons: Vec::new(),
            reduction_reasons: Vec::new(),
            context_factors: FactorBreakdown::NEUTRAL,
        }
    }

    /// Identifier of the underlying place.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.place.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use rstest::rstest;

    #[rstest]
    fn breakdown_records_by_factor() {
        let mut breakdown = FactorBreakdown::NEUTRAL;
        breakdown.record(&FactorResult {
            factor: ContextFactor::ActivitySequence,
            score: 0.7,
            boosted: false,
            reduced: true,
        });
        assert_eq!(breakdown.get(ContextFactor::ActivitySequence), 0.7);
        assert_eq!(breakdown.get(ContextFactor::Time), 1.0);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_flat_camel_case() {
        let place = Place::new("p-1", Category::Cafe, 10.0)
            .expect("valid place")
            .with_tags(["조용한"]);
        let mut scored = ScoredPlace::unscored(place);
        scored.boost_reasons.push(ContextFactor::ActivitySequence);
        let value = serde_json::to_value(&scored).expect("encode scored place");
        assert_eq!(value["id"], "p-1");
        assert_eq!(value["baseMatchScore"], 10.0);
        assert_eq!(value["finalMatchScore"], 10.0);
        assert_eq!(value["boostReasons"][0], "activity_sequence");
        assert_eq!(value["contextFactors"]["activityScore"], 1.0);
    }
}
