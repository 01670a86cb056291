//! Sequencing after the user's previous stop.

use placerank_core::{Category, PlaceTrait, PlaceTraitSet, RecentActivity};

use super::MultiplierTable;

/// Weight of the previous visit as a step function of elapsed minutes.
///
/// # Examples
/// ```
/// use placerank_scorer::decay_factor;
///
/// assert_eq!(decay_factor(5), 1.0);
/// assert_eq!(decay_factor(90), 0.7);
/// assert_eq!(decay_factor(600), 0.3);
/// ```
#[must_use]
pub const fn decay_factor(elapsed_minutes: u32) -> f64 {
    match elapsed_minutes {
        0..=30 => 1.0,
        31..=60 => 0.9,
        61..=120 => 0.7,
        121..=300 => 0.5,
        _ => 0.3,
    }
}

/// Base multiplier for moving from `previous` to `next`.
#[must_use]
pub const fn transition_multiplier(previous: &Category, next: &Category) -> f64 {
    use Category::{Bar, Cafe, Indoor, Outdoor, Restaurant, Shopping, Tourism};
    match (previous, next) {
        (Restaurant, Cafe | Bar)
        | (Outdoor, Cafe | Restaurant)
        | (Shopping, Cafe | Restaurant)
        | (Tourism, Restaurant) => 1.2,
        (Restaurant, Outdoor | Shopping)
        | (Cafe, Restaurant | Shopping | Outdoor | Tourism)
        | (Bar, Restaurant)
        | (Outdoor, Indoor)
        | (Indoor, Outdoor | Cafe | Restaurant)
        | (Tourism, Cafe) => 1.1,
        (Restaurant, Restaurant) | (Outdoor, Outdoor) | (Shopping, Shopping) => 0.8,
        (Cafe, Cafe) | (Bar, Bar) => 0.7,
        (Indoor, Indoor) | (Tourism, Tourism) => 0.9,
        _ => 1.0,
    }
}

/// What the user did last and how long ago.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityFactors {
    /// Category of the previous stop.
    pub previous: Category,
    /// Traits of the previous stop.
    pub previous_traits: PlaceTraitSet,
    /// Minutes since leaving it.
    pub elapsed_minutes: u32,
    /// [`decay_factor`] for the elapsed time.
    pub time_factor: f64,
}

impl ActivityFactors {
    /// Capture the previous stop.
    #[must_use]
    pub fn new(activity: &RecentActivity) -> Self {
        Self {
            previous: activity.category.clone(),
            previous_traits: PlaceTraitSet::derive(
                &activity.category,
                None,
                activity.tags.iter().map(String::as_str),
            ),
            elapsed_minutes: activity.elapsed_minutes,
            time_factor: decay_factor(activity.elapsed_minutes),
        }
    }

    /// Undecayed entries for a candidate: the category transition plus any
    /// tag-based follow-up rules that fire.
    #[must_use]
    pub fn entries(&self, next: &Category, next_traits: PlaceTraitSet) -> MultiplierTable {
        let previous = self.previous_traits;
        MultiplierTable::new()
            .with("transition", transition_multiplier(&self.previous, next))
            .with_if(
                previous.contains(PlaceTrait::Food)
                    && next_traits.contains_any(&[PlaceTrait::Dessert, PlaceTrait::Coffee]),
                "foodToDessert",
                1.2,
            )
            .with_if(
                previous.contains(PlaceTrait::Active) && next_traits.contains(PlaceTrait::Relaxing),
                "activeToRelaxing",
                1.2,
            )
            .with_if(
                previous.contains(PlaceTrait::Relaxing) && next_traits.contains(PlaceTrait::Active),
                "relaxingToActive",
                1.1,
            )
    }

    /// Pull `multiplier` towards neutral by the elapsed-time weight.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "decay interpolates between neutral and the table entry"
    )]
    pub fn decayed(&self, multiplier: f64) -> f64 {
        (multiplier - 1.0).mul_add(self.time_factor, 1.0)
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

    #[rstest]
    #[case(0, 1.0)]
    #[case(30, 1.0)]
    #[case(31, 0.9)]
    #[case(60, 0.9)]
    #[case(120, 0.7)]
    #[case(300, 0.5)]
    #[case(301, 0.3)]
    fn decay_steps(#[case] minutes: u32, #[case] expected: f64) {
        assert_eq!(decay_factor(minutes), expected);
    }

    #[rstest]
    #[case(Category::Restaurant, Category::Cafe, 1.2)]
    #[case(Category::Restaurant, Category::Bar, 1.2)]
    #[case(Category::Cafe, Category::Cafe, 0.7)]
    #[case(Category::Bar, Category::Bar, 0.7)]
    #[case(Category::Restaurant, Category::Restaurant, 0.8)]
    #[case(Category::Tourism, Category::Tourism, 0.9)]
    #[case(Category::Bar, Category::Cafe, 1.0)]
    #[case(Category::Other("spa".into()), Category::Cafe, 1.0)]
    fn transitions(#[case] previous: Category, #[case] next: Category, #[case] expected: f64) {
        assert_eq!(transition_multiplier(&previous, &next), expected);
    }

    #[rstest]
    fn meal_then_dessert_adds_follow_up() {
        let activity = RecentActivity::new(Category::Restaurant, 10);
        let factors = ActivityFactors::new(&activity);
        let dessert = PlaceTraitSet::derive(&Category::Cafe, Some("dessert cafe"), ["케이크"]);
        let entries = factors.entries(&Category::Cafe, dessert);
        assert_eq!(entries.get("transition"), Some(1.2));
        assert_eq!(entries.get("foodToDessert"), Some(1.2));
    }

    #[rstest]
    fn active_then_relaxing_adds_follow_up() {
        let activity = RecentActivity::new(Category::Outdoor, 10).with_tags(["클라이밍"]);
        let factors = ActivityFactors::new(&activity);
        let spa = PlaceTraitSet::derive(&Category::Indoor, None, ["사우나"]);
        let entries = factors.entries(&Category::Indoor, spa);
        assert_eq!(entries.get("activeToRelaxing"), Some(1.2));
        assert!(entries.get("relaxingToActive").is_none());
    }

    #[rstest]
    #[case(5, 0.7)]
    #[case(90, 0.79)]
    #[case(600, 0.91)]
    fn decay_pulls_towards_neutral(#[case] minutes: u32, #[case] expected: f64) {
        let factors = ActivityFactors::new(&RecentActivity::new(Category::Cafe, minutes));
        assert!((factors.decayed(0.7) - expected).abs() < 1e-9);
    }
}
