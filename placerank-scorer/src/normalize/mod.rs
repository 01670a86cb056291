//! Turn a raw [`ContextSnapshot`] into per-factor multiplier tables.
//!
//! Each part of the snapshot is normalised independently. A part that is
//! absent, or that lacks the data its tables need, yields `None` and the
//! corresponding factor scores neutral.

mod activity;
mod location;
mod mood;
mod table;
mod time;
mod weather;

pub use activity::{ActivityFactors, decay_factor, transition_multiplier};
pub use location::{DistanceBand, LocationFactors, RegionMatch, max_distance};
pub use mood::MoodFactors;
pub use table::MultiplierTable;
pub use time::{HourBucket, TimeFactors};
pub use weather::WeatherFactors;

use placerank_core::ContextSnapshot;

/// Normalised tables for every factor present in a request's context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorBundle {
    /// Time tables; `None` without a timestamp.
    pub time: Option<TimeFactors>,
    /// Weather tables.
    pub weather: Option<WeatherFactors>,
    /// Mood trait multipliers.
    pub mood: Option<MoodFactors>,
    /// Previous-stop sequencing.
    pub activity: Option<ActivityFactors>,
    /// Proximity and region.
    pub location: Option<LocationFactors>,
}

impl FactorBundle {
    /// Normalise a snapshot.
    ///
    /// # Examples
    /// ```
    /// use placerank_core::{ContextSnapshot, Mood};
    /// use placerank_scorer::FactorBundle;
    ///
    /// let context = ContextSnapshot::new()
    ///     .with_day_index(6)
    ///     .map(|context| context.with_mood(Mood::with_default_intensity("relaxed")));
    /// let bundle = FactorBundle::from_context(&context.unwrap_or_default());
    /// // A day without a clock time is not enough to pick time tables.
    /// assert!(bundle.time.is_none());
    /// assert!(bundle.mood.is_some());
    /// ```
    #[must_use]
    pub fn from_context(context: &ContextSnapshot) -> Self {
        let weather = context.weather.as_ref().map(WeatherFactors::new);
        let is_bad_weather = weather
            .as_ref()
            .is_some_and(|factors| !factors.is_good_weather);
        Self {
            time: context
                .time
                .zip(context.day_index())
                .map(|(time, day)| TimeFactors::new(time, day).with_bad_weather(is_bad_weather)),
            weather,
            mood: context.mood.as_ref().map(MoodFactors::new),
            activity: context.recent_activity.as_ref().map(ActivityFactors::new),
            location: context.location.as_ref().map(LocationFactors::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placerank_core::test_support::saturday_at;
    use placerank_core::{Category, RecentActivity, Weather, WeatherCondition};
    use rstest::rstest;

    #[rstest]
    fn empty_context_normalises_to_nothing() {
        assert_eq!(
            FactorBundle::from_context(&ContextSnapshot::new()),
            FactorBundle::default()
        );
    }

    #[rstest]
    fn time_without_day_derives_the_weekday() {
        let bundle = FactorBundle::from_context(&ContextSnapshot::new().with_time(saturday_at(15)));
        let time = bundle.time.expect("time factors");
        assert_eq!(time.day, 6);
        assert!(time.is_weekend);
    }

    #[rstest]
    #[case(WeatherCondition::Rainy, Some(1.2))]
    #[case(WeatherCondition::Sunny, None)]
    fn weather_reading_reaches_indoor_time_table(
        #[case] condition: WeatherCondition,
        #[case] expected: Option<f64>,
    ) {
        let context = ContextSnapshot::new()
            .with_time(saturday_at(12))
            .with_weather(Weather::new(condition).with_temperature(20.0));
        let time = FactorBundle::from_context(&context).time.expect("time factors");
        assert_eq!(time.indoor.get("badWeather"), expected);
    }

    #[rstest]
    fn time_without_weather_has_no_bad_weather_entry() {
        let bundle = FactorBundle::from_context(&ContextSnapshot::new().with_time(saturday_at(12)));
        let time = bundle.time.expect("time factors");
        assert!(!time.is_bad_weather);
        assert!(time.indoor.get("badWeather").is_none());
    }

    #[rstest]
    fn each_part_is_normalised_independently() {
        let context = ContextSnapshot::new()
            .with_weather(Weather::new(WeatherCondition::Snowy))
            .with_recent_activity(RecentActivity::new(Category::Bar, 45));
        let bundle = FactorBundle::from_context(&context);
        assert!(bundle.time.is_none());
        assert!(bundle.mood.is_none());
        assert!(bundle.location.is_none());
        assert_eq!(
            bundle.weather.map(|weather| weather.condition),
            Some(WeatherCondition::Snowy)
        );
        assert_eq!(bundle.activity.map(|activity| activity.time_factor), Some(0.9));
    }
}
