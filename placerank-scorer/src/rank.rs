//! Stable ordering of scored places.

use placerank_core::ScoredPlace;

/// Sort by `final_match_score`, highest first.
///
/// The sort is stable: places with equal scores keep their input order,
/// which may already encode an upstream tie-break.
///
/// # Examples
/// ```
/// use placerank_core::{Category, Place, ScoredPlace};
/// use placerank_scorer::rank;
///
/// # fn main() -> Result<(), placerank_core::PlaceError> {
/// let scored = ["a", "b", "c"]
///     .into_iter()
///     .zip([1.0, 3.0, 1.0])
///     .map(|(id, base)| Place::new(id, Category::Cafe, base).map(ScoredPlace::unscored))
///     .collect::<Result<Vec<_>, _>>()?;
/// let ids: Vec<_> = rank(scored).iter().map(|s| s.id().to_owned()).collect();
/// assert_eq!(ids, ["b", "a", "c"]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn rank(mut scored: Vec<ScoredPlace>) -> Vec<ScoredPlace> {
    scored.sort_by(|left, right| right.final_match_score.total_cmp(&left.final_match_score));
    scored
}
