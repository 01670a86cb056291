//! Short human-readable reasons a place suits the current context.
//!
//! Explanations use the same normalised tables and trait vocabulary as the
//! scorers but a deliberately small rule set: at most one sentence per
//! factor, only for favourable signals.

use std::fmt;

use placerank_core::{
    BOOST_THRESHOLD, Category, ContextFactor, ContextSnapshot, Place, PlaceTrait, PlaceTraitSet,
    WeatherCondition,
};

use crate::normalize::{
    ActivityFactors, DistanceBand, FactorBundle, HourBucket, LocationFactors, MoodFactors,
    RegionMatch, TimeFactors, WeatherFactors,
};

/// One sentence explaining a favourable factor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explanation {
    /// Factor the sentence is about.
    pub factor: ContextFactor,
    /// Display text.
    pub message: String,
}

impl Explanation {
    fn new(factor: ContextFactor, message: impl Into<String>) -> Self {
        Self {
            factor,
            message: message.into(),
        }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Explain why `place` suits `context`.
///
/// # Examples
/// ```
/// use placerank_core::{Category, ContextFactor, ContextSnapshot, Place, Weather, WeatherCondition};
/// use placerank_scorer::generate_context_explanation;
///
/// # fn main() -> Result<(), placerank_core::PlaceError> {
/// let museum = Place::new("museum", Category::Indoor, 1.0)?;
/// let context = ContextSnapshot::new().with_weather(Weather::new(WeatherCondition::Rainy));
/// let explanations = generate_context_explanation(&museum, &context);
/// assert_eq!(explanations.len(), 1);
/// assert_eq!(explanations[0].factor, ContextFactor::Weather);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn generate_context_explanation(place: &Place, context: &ContextSnapshot) -> Vec<Explanation> {
    explain(place, &FactorBundle::from_context(context))
}

/// Explain `place` against an already normalised bundle.
#[must_use]
pub fn explain(place: &Place, bundle: &FactorBundle) -> Vec<Explanation> {
    let traits = PlaceTraitSet::of(place);
    [
        bundle.time.as_ref().and_then(|f| explain_time(f, place, traits)),
        bundle.weather.as_ref().and_then(|f| explain_weather(f, place, traits)),
        bundle.mood.as_ref().and_then(|f| explain_mood(f, traits)),
        bundle.activity.as_ref().and_then(|f| explain_activity(f, place, traits)),
        bundle.location.as_ref().and_then(|f| explain_location(f, place)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn explain_time(factors: &TimeFactors, place: &Place, traits: PlaceTraitSet) -> Option<Explanation> {
    let message = match (&place.category, factors.bucket) {
        (Category::Restaurant, _) => format!("Right on time for {}", factors.meal_window()?),
        (Category::Cafe, HourBucket::Morning | HourBucket::Afternoon) => {
            format!("A good {} for a coffee break", factors.bucket.as_str())
        }
        (Category::Bar, HourBucket::Evening | HourBucket::Night | HourBucket::LateNight) => {
            "The evening is the right time for a drink".to_owned()
        }
        (Category::Shopping | Category::Tourism, HourBucket::Afternoon) => {
            format!("Afternoons are ideal for {}", place.category)
        }
        _ if traits.contains(PlaceTrait::Outdoor) && factors.is_weekend && factors.is_day_time => {
            "Weekend daytime suits outdoor plans".to_owned()
        }
        _ if traits.contains(PlaceTrait::WorkFriendly)
            && factors.weekday.get("workFriendly").is_some() =>
        {
            "A work-friendly spot during office hours".to_owned()
        }
        _ => return None,
    };
    Some(Explanation::new(ContextFactor::Time, message))
}

fn explain_weather(
    factors: &WeatherFactors,
    place: &Place,
    traits: PlaceTraitSet,
) -> Option<Explanation> {
    let sheltered = traits.contains(PlaceTrait::Indoor) || place.category == Category::Cafe;
    let wet = matches!(
        factors.condition,
        WeatherCondition::Rainy | WeatherCondition::Snowy
    );
    let message = if wet && sheltered {
        format!("Stay dry indoors while it is {}", factors.condition)
    } else if factors.is_good_weather
        && !factors.is_dangerous_weather
        && traits.contains(PlaceTrait::Outdoor)
    {
        "Great weather for being outside".to_owned()
    } else if factors.good_visibility && traits.contains(PlaceTrait::Viewpoint) {
        "Clear skies for the view".to_owned()
    } else {
        return None;
    };
    Some(Explanation::new(ContextFactor::Weather, message))
}

fn explain_mood(factors: &MoodFactors, traits: PlaceTraitSet) -> Option<Explanation> {
    let label = factors.label?;
    let (matched, _) = factors
        .traits
        .iter()
        .find(|&&(place_trait, multiplier)| multiplier > 1.0 && traits.contains(place_trait))?;
    Some(Explanation::new(
        ContextFactor::Mood,
        format!("Suits your {label} mood: {matched}"),
    ))
}

fn explain_activity(
    factors: &ActivityFactors,
    place: &Place,
    traits: PlaceTraitSet,
) -> Option<Explanation> {
    factors
        .entries(&place.category, traits)
        .iter()
        .any(|(_, multiplier)| factors.decayed(multiplier) > BOOST_THRESHOLD)
        .then(|| {
            Explanation::new(
                ContextFactor::ActivitySequence,
                format!("A natural next stop after the {}", factors.previous),
            )
        })
}

fn explain_location(factors: &LocationFactors, place: &Place) -> Option<Explanation> {
    let close = factors
        .band(place)
        .filter(|band| matches!(band, DistanceBand::VeryClose | DistanceBand::Close));
    let message = match (close, factors.region_match(place)) {
        (Some(_), _) => format!(
            "Only {:.0} m away",
            factors.distance_to(place).unwrap_or_default()
        ),
        (None, Some(RegionMatch::SameSubRegion)) => "Right in your neighbourhood".to_owned(),
        (None, Some(RegionMatch::SameRegion)) => "In the same area as you".to_owned(),
        _ => return None,
    };
    Some(Explanation::new(ContextFactor::Location, message))
}
