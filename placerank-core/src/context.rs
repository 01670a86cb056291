//! Situational context a request is scored against.
//!
//! A [`ContextSnapshot`] is assembled fresh by the caller for every request
//! from the device clock, a weather client, the user's current mood, a
//! recent-visit tracker and a geolocation provider. Every part is optional:
//! the scorer treats a missing part as neutral.

use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use geo::Coord;
use thiserror::Error;

use crate::{Category, Weather, place::Tags};

/// Errors returned by the validating context constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// Mood intensity must lie in `1..=5`.
    #[error("mood intensity {0} must be between 1 and 5")]
    IntensityOutOfRange(u8),
    /// Day index must lie in `0..=6` with Sunday as `0`.
    #[error("day of week {0} must be between 0 (Sunday) and 6 (Saturday)")]
    DayOutOfRange(u8),
}

/// Lowest accepted mood intensity.
pub const MIN_INTENSITY: u8 = 1;
/// Highest accepted mood intensity.
pub const MAX_INTENSITY: u8 = 5;
const DEFAULT_INTENSITY: u8 = 3;

/// The nine mood labels the engine has trait tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodLabel {
    /// Cheerful.
    Happy,
    /// Low.
    Sad,
    /// Under pressure.
    Stressed,
    /// Energetic.
    Excited,
    /// At ease.
    Relaxed,
    /// Looking for novelty.
    Bored,
    /// Low on energy.
    Tired,
    /// Looking for food.
    Hungry,
    /// On a date.
    Romantic,
}

impl MoodLabel {
    /// Parse a label case-insensitively, accepting Korean aliases.
    ///
    /// Returns `None` for labels outside the known vocabulary.
    ///
    /// # Examples
    /// ```
    /// use placerank_core::MoodLabel;
    ///
    /// assert_eq!(MoodLabel::parse("Stressed"), Some(MoodLabel::Stressed));
    /// assert_eq!(MoodLabel::parse("피곤"), Some(MoodLabel::Tired));
    /// assert_eq!(MoodLabel::parse("furious"), None);
    /// ```
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let label = match label.trim().to_lowercase().as_str() {
            "happy" | "행복" | "기쁨" => Self::Happy,
            "sad" | "슬픔" | "우울" => Self::Sad,
            "stressed" | "스트레스" => Self::Stressed,
            "excited" | "신남" | "설렘" => Self::Excited,
            "relaxed" | "편안" | "여유" => Self::Relaxed,
            "bored" | "지루" | "심심" => Self::Bored,
            "tired" | "피곤" | "지침" => Self::Tired,
            "hungry" | "배고픔" => Self::Hungry,
            "romantic" | "로맨틱" => Self::Romantic,
            _ => return None,
        };
        Some(label)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
            Self::Excited => "excited",
            Self::Relaxed => "relaxed",
            Self::Bored => "bored",
            Self::Tired => "tired",
            Self::Hungry => "hungry",
            Self::Romantic => "romantic",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's self-reported mood.
///
/// The label is kept as free text; unknown labels are tolerated and score
/// as neutral.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mood {
    /// Free-text mood label.
    pub label: String,
    /// Strength of the mood in `1..=5`.
    #[cfg_attr(feature = "serde", serde(default = "default_intensity"))]
    pub intensity: u8,
}

#[cfg(feature = "serde")]
const fn default_intensity() -> u8 {
    DEFAULT_INTENSITY
}

impl Mood {
    /// Validate and construct a [`Mood`].
    ///
    /// # Errors
    /// Returns [`ContextError::IntensityOutOfRange`] unless
    /// `1 <= intensity <= 5`.
    ///
    /// # Examples
    /// ```
    /// use placerank_core::Mood;
    ///
    /// assert!(Mood::new("happy", 4).is_ok());
    /// assert!(Mood::new("happy", 9).is_err());
    /// ```
    pub fn new(label: impl Into<String>, intensity: u8) -> Result<Self, ContextError> {
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
            return Err(ContextError::IntensityOutOfRange(intensity));
        }
        Ok(Self {
            label: label.into(),
            intensity,
        })
    }

    /// Construct a mood with the default intensity of 3.
    #[must_use]
    pub fn with_default_intensity(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            intensity: DEFAULT_INTENSITY,
        }
    }

    /// The recognised label, if any.
    #[must_use]
    pub fn known_label(&self) -> Option<MoodLabel> {
        MoodLabel::parse(&self.label)
    }
}

/// The place the user visited most recently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RecentActivity {
    /// Category of the previous place.
    pub category: Category,
    /// Minutes since the user left it.
    pub elapsed_minutes: u32,
    /// Tags of the previous place.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Tags,
}

impl RecentActivity {
    /// Construct an activity record without tags.
    #[must_use]
    pub fn new(category: Category, elapsed_minutes: u32) -> Self {
        Self {
            category,
            elapsed_minutes,
            tags: Tags::new(),
        }
    }

    /// Replace the tag set.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// How the user is getting around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum TransportMode {
    /// On foot.
    Walking,
    /// By bicycle.
    Bicycle,
    /// Bus, subway or other public transport.
    Public,
    /// By car or taxi.
    Car,
    /// Not reported or not recognised.
    #[default]
    Unspecified,
}

impl TransportMode {
    /// Parse a transport mode, falling back to [`TransportMode::Unspecified`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "walking" | "walk" | "foot" | "도보" => Self::Walking,
            "bicycle" | "bike" | "cycling" | "자전거" => Self::Bicycle,
            "public" | "transit" | "bus" | "subway" | "대중교통" => Self::Public,
            "car" | "drive" | "driving" | "taxi" | "자동차" | "차" => Self::Car,
            _ => Self::Unspecified,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Bicycle => "bicycle",
            Self::Public => "public",
            Self::Car => "car",
            Self::Unspecified => "unspecified",
        }
    }
}

impl From<String> for TransportMode {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<TransportMode> for String {
    fn from(mode: TransportMode) -> Self {
        mode.as_str().to_owned()
    }
}

/// Where the user is and how they travel.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct UserLocation {
    /// Current position (`x = longitude`, `y = latitude`).
    pub coordinates: Option<Coord<f64>>,
    /// Administrative region, such as a city.
    pub region: Option<String>,
    /// Administrative sub-region, such as a district.
    pub sub_region: Option<String>,
    /// Reported transport mode.
    pub transport_mode: TransportMode,
}

impl UserLocation {
    /// Construct a location with only a transport mode.
    #[must_use]
    pub const fn travelling_by(transport_mode: TransportMode) -> Self {
        Self {
            coordinates: None,
            region: None,
            sub_region: None,
            transport_mode,
        }
    }

    /// Set the current position.
    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: Coord<f64>) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Set region and optional sub-region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>, sub_region: Option<String>) -> Self {
        self.region = Some(region.into());
        self.sub_region = sub_region;
        self
    }
}

/// Everything known about the user's situation for one request.
///
/// `time` is the user's local wall-clock time. `day_of_week` uses `0` for
/// Sunday through `6` for Saturday; when absent it is derived from `time`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use placerank_core::{ContextSnapshot, Mood};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let saturday_afternoon = NaiveDate::from_ymd_opt(2026, 10, 17)
///     .and_then(|day| day.and_hms_opt(15, 0, 0))
///     .ok_or("invalid timestamp")?;
/// let context = ContextSnapshot::new()
///     .with_time(saturday_afternoon)
///     .with_mood(Mood::new("stressed", 5)?);
/// assert_eq!(context.day_index(), Some(6));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ContextSnapshot {
    /// Local wall-clock time of the request.
    pub time: Option<NaiveDateTime>,
    /// Day index, Sunday = 0.
    pub day_of_week: Option<u8>,
    /// Current weather.
    pub weather: Option<Weather>,
    /// Current mood.
    pub mood: Option<Mood>,
    /// Most recent visit.
    pub recent_activity: Option<RecentActivity>,
    /// Position and transport mode.
    pub location: Option<UserLocation>,
}

impl ContextSnapshot {
    /// An empty snapshot; every factor scores neutral.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the local time.
    #[must_use]
    pub const fn with_time(mut self, time: NaiveDateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the day of the week explicitly.
    ///
    /// # Errors
    /// Returns [`ContextError::DayOutOfRange`] when `day > 6`.
    pub fn with_day_index(mut self, day: u8) -> Result<Self, ContextError> {
        if day > 6 {
            return Err(ContextError::DayOutOfRange(day));
        }
        self.day_of_week = Some(day);
        Ok(self)
    }

    /// Set the weather reading.
    #[must_use]
    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    /// Set the mood.
    #[must_use]
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Set the most recent visit.
    #[must_use]
    pub fn with_recent_activity(mut self, activity: RecentActivity) -> Self {
        self.recent_activity = Some(activity);
        self
    }

    /// Set the user's location.
    #[must_use]
    pub fn with_location(mut self, location: UserLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Effective day index (Sunday = 0).
    ///
    /// An explicit, valid `day_of_week` wins; otherwise the day is derived
    /// from `time`. Out-of-range explicit values are ignored.
    #[must_use]
    pub fn day_index(&self) -> Option<u8> {
        let derived = || {
            self.time
                .and_then(|time| u8::try_from(time.weekday().num_days_from_sunday()).ok())
        };
        match self.day_of_week {
            Some(day) if day <= 6 => Some(day),
            Some(day) => {
                log::warn!("ignoring out-of-range day of week {day}");
                derived()
            }
            None => derived(),
        }
    }
}
