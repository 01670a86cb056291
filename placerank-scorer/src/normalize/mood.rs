//! Mood-to-trait multipliers.

use placerank_core::context::{MAX_INTENSITY, MIN_INTENSITY};
use placerank_core::{Mood, MoodLabel, PlaceTrait};

use super::MultiplierTable;

const NEUTRAL_INTENSITY: f64 = 3.0;

/// Trait multipliers for one mood.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodFactors {
    /// Recognised label, or `None` for free text the engine does not know.
    pub label: Option<MoodLabel>,
    /// `max(1, intensity / 3)`.
    pub intensity_factor: f64,
    /// Intensity-scaled multiplier per trait.
    pub traits: Vec<(PlaceTrait, f64)>,
}

struct MoodProfile {
    positive: &'static [(PlaceTrait, f64)],
    opposing: &'static [(PlaceTrait, f64)],
}

const fn profile(label: MoodLabel) -> MoodProfile {
    use PlaceTrait::{
        Active, Cafe, Comfort, Convenience, Cozy, Crowded, Elegant, Entertainment, Food, Intimate,
        Loud, Natural, Outdoor, Quiet, Restaurant, Scenic, Social, Unique,
    };
    match label {
        MoodLabel::Happy => MoodProfile {
            positive: &[(Social, 1.2), (Active, 1.2), (Entertainment, 1.2), (Outdoor, 1.1)],
            opposing: &[(Quiet, 0.9)],
        },
        MoodLabel::Sad => MoodProfile {
            positive: &[(Quiet, 1.2), (Comfort, 1.3), (Cozy, 1.2), (Food, 1.1)],
            opposing: &[(Loud, 0.8), (Crowded, 0.8)],
        },
        MoodLabel::Stressed => MoodProfile {
            positive: &[(Quiet, 1.3), (Natural, 1.2), (Comfort, 1.2)],
            opposing: &[(Loud, 0.7), (Crowded, 0.7)],
        },
        MoodLabel::Excited => MoodProfile {
            positive: &[(Active, 1.3), (Entertainment, 1.3), (Social, 1.2), (Loud, 1.1)],
            opposing: &[(Quiet, 0.8)],
        },
        MoodLabel::Relaxed => MoodProfile {
            positive: &[(Quiet, 1.2), (Natural, 1.2), (Scenic, 1.2), (Cozy, 1.1)],
            opposing: &[(Crowded, 0.8), (Loud, 0.8)],
        },
        MoodLabel::Bored => MoodProfile {
            positive: &[(Entertainment, 1.3), (Unique, 1.3), (Active, 1.2)],
            opposing: &[(Quiet, 0.9)],
        },
        MoodLabel::Tired => MoodProfile {
            positive: &[(Comfort, 1.3), (Quiet, 1.2), (Convenience, 1.2), (Cafe, 1.1)],
            opposing: &[(Active, 0.7), (Crowded, 0.8)],
        },
        MoodLabel::Hungry => MoodProfile {
            positive: &[(Food, 1.4), (Restaurant, 1.4), (Convenience, 1.1)],
            opposing: &[(Cafe, 0.9)],
        },
        MoodLabel::Romantic => MoodProfile {
            positive: &[(Intimate, 1.3), (Elegant, 1.3), (Scenic, 1.2), (Cozy, 1.1)],
            opposing: &[(Crowded, 0.8), (Loud, 0.7)],
        },
    }
}

impl MoodFactors {
    /// Build the trait multipliers for a mood.
    ///
    /// Intensity outside `1..=5` is clamped. Unknown labels produce no trait
    /// multipliers.
    ///
    /// # Examples
    /// ```
    /// use placerank_core::{Mood, PlaceTrait};
    /// use placerank_scorer::MoodFactors;
    ///
    /// let furious = MoodFactors::new(&Mood::with_default_intensity("furious"));
    /// assert!(furious.label.is_none());
    /// assert_eq!(furious.table().get("neutral"), Some(1.0));
    ///
    /// let tired = MoodFactors::new(&Mood::with_default_intensity("tired"));
    /// assert_eq!(tired.multiplier(PlaceTrait::Comfort), Some(1.3));
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "intensity scales trait multipliers"
    )]
    pub fn new(mood: &Mood) -> Self {
        let Some(label) = mood.known_label() else {
            log::debug!("unrecognised mood {:?}; treating as neutral", mood.label);
            return Self {
                label: None,
                intensity_factor: 1.0,
                traits: Vec::new(),
            };
        };
        let intensity = mood.intensity.clamp(MIN_INTENSITY, MAX_INTENSITY);
        if intensity != mood.intensity {
            log::warn!("clamping mood intensity {} to {intensity}", mood.intensity);
        }
        let intensity_factor = (f64::from(intensity) / NEUTRAL_INTENSITY).max(1.0);
        let MoodProfile { positive, opposing } = profile(label);
        let traits = positive
            .iter()
            .map(|&(place_trait, multiplier)| (place_trait, multiplier * intensity_factor))
            .chain(
                opposing
                    .iter()
                    .map(|&(place_trait, multiplier)| (place_trait, multiplier / intensity_factor)),
            )
            .collect();
        Self {
            label: Some(label),
            intensity_factor,
            traits,
        }
    }

    /// Multiplier for one trait, if the mood cares about it.
    #[must_use]
    pub fn multiplier(&self, place_trait: PlaceTrait) -> Option<f64> {
        self.traits
            .iter()
            .find_map(|&(candidate, multiplier)| (candidate == place_trait).then_some(multiplier))
    }

    /// The traits as a named table; `{neutral: 1.0}` for unknown moods.
    #[must_use]
    pub fn table(&self) -> MultiplierTable {
        if self.label.is_none() {
            return MultiplierTable::neutral();
        }
        self.traits
            .iter()
            .fold(MultiplierTable::new(), |table, &(place_trait, multiplier)| {
                table.with(place_trait.as_str(), multiplier)
            })
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mood(label: &str, intensity: u8) -> Mood {
        Mood::new(label, intensity).expect("valid mood")
    }

    #[rstest]
    #[case(1, 1.0)]
    #[case(3, 1.0)]
    #[case(5, 5.0 / 3.0)]
    fn intensity_factor_never_drops_below_one(#[case] intensity: u8, #[case] expected: f64) {
        let factors = MoodFactors::new(&mood("happy", intensity));
        assert!((factors.intensity_factor - expected).abs() < 1e-9);
    }

    #[rstest]
    fn strong_mood_scales_positive_and_opposing_traits() {
        let factors = MoodFactors::new(&mood("stressed", 5));
        let quiet = factors.multiplier(PlaceTrait::Quiet).expect("quiet entry");
        let loud = factors.multiplier(PlaceTrait::Loud).expect("loud entry");
        assert!((quiet - 1.3 * 5.0 / 3.0).abs() < 1e-9);
        assert!((loud - 0.7 * 3.0 / 5.0).abs() < 1e-9);
    }

    #[rstest]
    #[case("HAPPY")]
    #[case("행복")]
    fn labels_are_case_insensitive_and_localised(#[case] label: &str) {
        let factors = MoodFactors::new(&mood(label, 3));
        assert_eq!(factors.label, Some(MoodLabel::Happy));
        assert_eq!(factors.multiplier(PlaceTrait::Social), Some(1.2));
    }

    #[rstest]
    fn unknown_label_is_neutral() {
        let factors = MoodFactors::new(&mood("furious", 4));
        assert!(factors.traits.is_empty());
        assert_eq!(factors.table(), MultiplierTable::neutral());
    }

    #[rstest]
    fn out_of_range_intensity_is_clamped() {
        let raw = Mood {
            label: "bored".into(),
            intensity: 9,
        };
        let factors = MoodFactors::new(&raw);
        assert!((factors.intensity_factor - 5.0 / 3.0).abs() < 1e-9);
    }

    #[rstest]
    fn table_uses_trait_names() {
        let factors = MoodFactors::new(&mood("hungry", 3));
        let table = factors.table();
        assert_eq!(table.get("food"), Some(1.4));
        assert_eq!(table.get("cafe"), Some(0.9));
    }
}
