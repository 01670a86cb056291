//! Weather suitability tables.

use placerank_core::{Weather, WeatherCondition};

use super::MultiplierTable;

const MILD_LOW_CELSIUS: f64 = 15.0;
const MILD_HIGH_CELSIUS: f64 = 30.0;
const FREEZING_CELSIUS: f64 = 0.0;
const SCORCHING_CELSIUS: f64 = 35.0;
const HOT_CELSIUS: f64 = 28.0;
const HEAVY_RAIN_PERCENT: f64 = 80.0;
const GALE_METRES_PER_SECOND: f64 = 20.0;
const HAZY_HUMIDITY_PERCENT: f64 = 80.0;

/// Weather flags and the per-venue-group tables derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherFactors {
    /// Normalised condition.
    pub condition: WeatherCondition,
    /// Temperature in °C, if it was a usable number.
    pub temperature: Option<f64>,
    /// Dry and, when known, mild.
    pub is_good_weather: bool,
    /// Heavy rain, gale or extreme temperature.
    pub is_dangerous_weather: bool,
    /// Clear enough for views.
    pub good_visibility: bool,
    /// Places with outdoor traits.
    pub outdoor: MultiplierTable,
    /// Places with indoor traits.
    pub indoor: MultiplierTable,
    /// Cafes.
    pub cafe: MultiplierTable,
    /// Restaurants.
    pub restaurant: MultiplierTable,
    /// Places with viewpoint traits.
    pub viewpoint: MultiplierTable,
}

impl WeatherFactors {
    /// Derive flags and tables from a reading.
    ///
    /// Non-finite measurements are ignored with a warning.
    ///
    /// # Examples
    /// ```
    /// use placerank_core::{Weather, WeatherCondition};
    /// use placerank_scorer::WeatherFactors;
    ///
    /// let rainy = WeatherFactors::new(&Weather::new(WeatherCondition::Rainy));
    /// assert_eq!(rainy.indoor.get("rainy"), Some(1.2));
    /// assert_eq!(rainy.outdoor.get("rainy"), Some(0.6));
    /// assert!(!rainy.is_good_weather);
    /// ```
    #[must_use]
    pub fn new(weather: &Weather) -> Self {
        let condition = weather.condition;
        let temperature = finite("temperature", weather.temperature);
        let rain_probability = finite("rain probability", weather.rain_probability);
        let humidity = finite("humidity", weather.humidity);
        let wind_speed = finite("wind speed", weather.wind_speed);

        let is_good_weather = !condition.is_inclement()
            && temperature.is_none_or(|t| t > MILD_LOW_CELSIUS && t < MILD_HIGH_CELSIUS);
        let is_dangerous_weather = rain_probability.is_some_and(|p| p > HEAVY_RAIN_PERCENT)
            || wind_speed.is_some_and(|w| w > GALE_METRES_PER_SECOND)
            || temperature.is_some_and(|t| !(FREEZING_CELSIUS..=SCORCHING_CELSIUS).contains(&t));
        let good_visibility = matches!(condition, WeatherCondition::Sunny | WeatherCondition::Cloudy)
            && humidity.is_none_or(|h| h < HAZY_HUMIDITY_PERCENT);

        let sunny = condition == WeatherCondition::Sunny;
        let rainy = condition == WeatherCondition::Rainy;
        let snowy = condition == WeatherCondition::Snowy;
        let foggy = condition == WeatherCondition::Foggy;

        Self {
            condition,
            temperature,
            is_good_weather,
            is_dangerous_weather,
            good_visibility,
            outdoor: MultiplierTable::new()
                .with_if(
                    sunny && temperature.is_none_or(|t| t <= MILD_HIGH_CELSIUS),
                    "sunny",
                    1.3,
                )
                .with_if(rainy, "rainy", 0.6)
                .with_if(snowy, "snowy", 0.7)
                .with_if(foggy, "foggy", 0.8)
                .with_if(is_good_weather, "goodWeather", 1.2)
                .with_if(is_dangerous_weather, "dangerousWeather", 0.5),
            indoor: MultiplierTable::new()
                .with_if(rainy, "rainy", 1.2)
                .with_if(snowy, "snowy", 1.2)
                .with_if(!is_good_weather, "badWeather", 1.1),
            cafe: MultiplierTable::new()
                .with_if(rainy, "rainy", 1.2)
                .with_if(temperature.is_some_and(|t| t > HOT_CELSIUS), "hot", 1.1),
            restaurant: MultiplierTable::neutral(),
            viewpoint: MultiplierTable::new()
                .with_if(sunny, "sunny", 1.3)
                .with_if(foggy, "foggy", 0.6)
                .with_if(rainy, "rainy", 0.7)
                .with_if(good_visibility, "goodVisibility", 1.1),
        }
    }
}

fn finite(name: &str, value: Option<f64>) -> Option<f64> {
    value.filter(|v| {
        let usable = v.is_finite();
        if !usable {
            log::warn!("ignoring non-finite weather {name} {v}");
        }
        usable
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sunny_mild_day_favours_outdoors() {
        let factors = WeatherFactors::new(&Weather::new(WeatherCondition::Sunny).with_temperature(20.0));
        assert!(factors.is_good_weather);
        assert!(!factors.is_dangerous_weather);
        assert_eq!(factors.outdoor.get("sunny"), Some(1.3));
        assert_eq!(factors.outdoor.get("goodWeather"), Some(1.2));
        assert!(factors.cafe.is_empty());
        assert!(factors.indoor.is_empty());
    }

    #[rstest]
    fn sunny_boost_is_withheld_above_thirty_degrees() {
        let factors = WeatherFactors::new(&Weather::new(WeatherCondition::Sunny).with_temperature(33.0));
        assert!(factors.outdoor.get("sunny").is_none());
        assert!(!factors.is_good_weather);
        assert_eq!(factors.indoor.get("badWeather"), Some(1.1));
        assert_eq!(factors.cafe.get("hot"), Some(1.1));
    }

    #[rstest]
    #[case(Weather::new(WeatherCondition::Cloudy).with_rain_probability(90.0))]
    #[case(Weather::new(WeatherCondition::Cloudy).with_wind_speed(25.0))]
    #[case(Weather::new(WeatherCondition::Snowy).with_temperature(-3.0))]
    #[case(Weather::new(WeatherCondition::Sunny).with_temperature(38.0))]
    fn flags_dangerous_weather(#[case] weather: Weather) {
        let factors = WeatherFactors::new(&weather);
        assert!(factors.is_dangerous_weather);
        assert_eq!(factors.outdoor.get("dangerousWeather"), Some(0.5));
    }

    #[rstest]
    fn nan_temperature_is_ignored() {
        let factors = WeatherFactors::new(&Weather::new(WeatherCondition::Sunny).with_temperature(f64::NAN));
        assert!(factors.temperature.is_none());
        assert!(factors.is_good_weather);
        assert!(!factors.is_dangerous_weather);
    }

    #[rstest]
    fn humid_skies_reduce_visibility() {
        let clear = WeatherFactors::new(&Weather::new(WeatherCondition::Cloudy).with_humidity(40.0));
        let humid = WeatherFactors::new(&Weather::new(WeatherCondition::Cloudy).with_humidity(85.0));
        assert_eq!(clear.viewpoint.get("goodVisibility"), Some(1.1));
        assert!(humid.viewpoint.get("goodVisibility").is_none());
    }

    #[rstest]
    fn restaurants_ignore_weather() {
        let factors = WeatherFactors::new(&Weather::new(WeatherCondition::Rainy));
        assert_eq!(factors.restaurant, MultiplierTable::neutral());
    }
}
