//! Combine factor multipliers into a final score.

use placerank_core::{
    ContextSnapshot, DAMPING_FLOOR, FactorBreakdown, Place, ScoredPlace, clamp_multiplier,
};

use crate::normalize::FactorBundle;
use crate::rank::rank;

/// Composite multiplier for a breakdown.
///
/// Activity and location are floored at [`DAMPING_FLOOR`] so a single weak
/// signal cannot sink a place; the product is clamped to `[0.5, 2.0]`.
///
/// # Examples
/// ```
/// use placerank_core::FactorBreakdown;
/// use placerank_scorer::composite_score;
///
/// let breakdown = FactorBreakdown {
///     activity_score: 0.7,
///     ..FactorBreakdown::NEUTRAL
/// };
/// assert_eq!(composite_score(&breakdown), 0.8);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "composition multiplies factor scores"
)]
pub fn composite_score(breakdown: &FactorBreakdown) -> f64 {
    clamp_multiplier(
        breakdown.time_score
            * breakdown.weather_score
            * breakdown.mood_score
            * breakdown.activity_score.max(DAMPING_FLOOR)
            * breakdown.location_score.max(DAMPING_FLOOR),
    )
}

/// Score one place against a normalised bundle.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "final score scales the base score"
)]
pub fn compose_place(place: &Place, bundle: &FactorBundle) -> ScoredPlace {
    let mut context_factors = FactorBreakdown::NEUTRAL;
    let mut boost_reasons = Vec::new();
    let mut reduction_reasons = Vec::new();
    for result in bundle.score_place(place) {
        context_factors.record(&result);
        if result.boosted && !boost_reasons.contains(&result.factor) {
            boost_reasons.push(result.factor);
        }
        if result.reduced && !reduction_reasons.contains(&result.factor) {
            reduction_reasons.push(result.factor);
        }
    }
    let context_score = composite_score(&context_factors);
    ScoredPlace {
        place: place.clone(),
        context_score,
        final_match_score: usable_base_score(place) * context_score,
        boost_reasons,
        reduction_reasons,
        context_factors,
    }
}

/// Score every place against `context` without reordering.
#[must_use]
pub fn compose(places: &[Place], context: &ContextSnapshot) -> Vec<ScoredPlace> {
    let bundle = FactorBundle::from_context(context);
    places
        .iter()
        .map(|place| compose_place(place, &bundle))
        .collect()
}

/// Re-score and re-rank `places` for a request.
///
/// Without a context the places are returned in their original order with
/// neutral scores.
///
/// # Examples
/// ```
/// use placerank_core::{Category, ContextSnapshot, Mood, Place};
/// use placerank_scorer::apply_contextual_factors;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let places = vec![
///     Place::new("club", Category::Bar, 5.0)?.with_tags(["club"]),
///     Place::new("library cafe", Category::Cafe, 5.0)?.with_tags(["quiet"]),
/// ];
/// let context = ContextSnapshot::new().with_mood(Mood::new("stressed", 4)?);
///
/// let ranked = apply_contextual_factors(&places, Some(&context));
/// assert_eq!(ranked[0].id(), "library cafe");
///
/// let untouched = apply_contextual_factors(&places, None);
/// assert_eq!(untouched[0].id(), "club");
/// assert_eq!(untouched[0].final_match_score, 5.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn apply_contextual_factors(
    places: &[Place],
    context: Option<&ContextSnapshot>,
) -> Vec<ScoredPlace> {
    match context {
        Some(snapshot) => rank(compose(places, snapshot)),
        None => places.iter().cloned().map(ScoredPlace::unscored).collect(),
    }
}

fn usable_base_score(place: &Place) -> f64 {
    let base = place.base_match_score;
    if base.is_finite() && base >= 0.0 {
        base
    } else {
        log::warn!("treating invalid base score {base} for place {} as 0", place.id);
        0.0
    }
}
