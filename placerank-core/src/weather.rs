//! Weather readings and the closed condition vocabulary.
//!
//! Weather providers describe conditions in free text ("맑음", "light rain",
//! "Overcast clouds"). [`WeatherCondition::classify`] folds that text into a
//! closed enum at the boundary so scoring code never inspects strings.

use std::fmt;

use crate::keyword;

/// Normalised sky condition.
///
/// # Examples
/// ```
/// use placerank_core::WeatherCondition;
///
/// assert_eq!(WeatherCondition::classify("맑음"), WeatherCondition::Sunny);
/// assert_eq!(WeatherCondition::classify("Light RAIN"), WeatherCondition::Rainy);
/// assert_eq!(WeatherCondition::classify("volcanic ash"), WeatherCondition::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum WeatherCondition {
    /// Clear or sunny skies.
    Sunny,
    /// Cloud cover without precipitation.
    Cloudy,
    /// Rain, showers or thunderstorms.
    Rainy,
    /// Snow or sleet.
    Snowy,
    /// Fog, mist or haze.
    Foggy,
    /// The description matched no known keyword.
    #[default]
    Unknown,
}

// Checked in order: precipitation wins over sky cover for mixed descriptions
// such as "cloudy with rain". The second list holds single-syllable Korean
// keywords that only count as a whole token.
const KEYWORDS: [(WeatherCondition, &[&str], &[&str]); 5] = [
    (
        WeatherCondition::Snowy,
        &["snow", "sleet", "blizzard", "진눈깨비", "눈이", "눈발", "폭설", "함박눈"],
        &["눈"],
    ),
    (
        WeatherCondition::Rainy,
        &[
            "rain", "shower", "drizzle", "thunder", "storm", "비가", "소나기", "뇌우", "장마", "폭우",
            "호우", "빗",
        ],
        &["비"],
    ),
    (WeatherCondition::Foggy, &["fog", "mist", "haze", "안개", "연무", "박무"], &[]),
    (
        WeatherCondition::Cloudy,
        &["cloud", "overcast", "흐림", "흐린", "구름"],
        &[],
    ),
    (WeatherCondition::Sunny, &["sun", "clear", "fair", "맑", "화창"], &[]),
];

impl WeatherCondition {
    /// Fold a free-text description into a condition.
    #[must_use]
    pub fn classify(description: &str) -> Self {
        let lowered = description.trim().to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, substrings, tokens)| keyword::matches(&lowered, substrings, tokens))
            .map_or(Self::Unknown, |(condition, _, _)| *condition)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Foggy => "foggy",
            Self::Unknown => "unknown",
        }
    }

    /// Precipitation or poor visibility.
    #[must_use]
    pub const fn is_inclement(self) -> bool {
        matches!(self, Self::Rainy | Self::Snowy | Self::Foggy)
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for WeatherCondition {
    fn from(description: String) -> Self {
        Self::classify(&description)
    }
}

impl From<WeatherCondition> for String {
    fn from(condition: WeatherCondition) -> Self {
        condition.as_str().to_owned()
    }
}

/// A weather reading at the user's position.
///
/// Units: temperature in °C, rain probability and humidity in percent
/// (`0..=100`), wind speed in metres per second. Every measurement is
/// optional; a missing one simply contributes nothing.
///
/// # Examples
/// ```
/// use placerank_core::{Weather, WeatherCondition};
///
/// let weather = Weather::new(WeatherCondition::Sunny).with_temperature(21.5);
/// assert_eq!(weather.temperature, Some(21.5));
/// assert!(weather.rain_probability.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Weather {
    /// Normalised sky condition.
    pub condition: WeatherCondition,
    /// Air temperature in °C.
    pub temperature: Option<f64>,
    /// Chance of precipitation in percent.
    pub rain_probability: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<f64>,
    /// Wind speed in metres per second.
    pub wind_speed: Option<f64>,
}

impl Weather {
    /// Construct a reading with only a condition.
    #[must_use]
    pub const fn new(condition: WeatherCondition) -> Self {
        Self {
            condition,
            temperature: None,
            rain_probability: None,
            humidity: None,
            wind_speed: None,
        }
    }

    /// Set the temperature in °C.
    #[must_use]
    pub const fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Set the rain probability in percent.
    #[must_use]
    pub const fn with_rain_probability(mut self, percent: f64) -> Self {
        self.rain_probability = Some(percent);
        self
    }

    /// Set the relative humidity in percent.
    #[must_use]
    pub const fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }

    /// Set the wind speed in metres per second.
    #[must_use]
    pub const fn with_wind_speed(mut self, metres_per_second: f64) -> Self {
        self.wind_speed = Some(metres_per_second);
        self
    }
}
