//! Hour-of-day and day-of-week tables.

use chrono::{NaiveDateTime, Timelike};
use placerank_core::Category;

use super::MultiplierTable;

/// Coarse part of the day an hour falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourBucket {
    /// 05:00 to 10:59.
    Morning,
    /// 11:00 to 13:59.
    Lunch,
    /// 14:00 to 16:59.
    Afternoon,
    /// 17:00 to 20:59.
    Evening,
    /// 21:00 to 00:59.
    Night,
    /// 01:00 to 04:59.
    LateNight,
}

impl HourBucket {
    /// Bucket for an hour in `0..24`.
    #[must_use]
    pub const fn of_hour(hour: u32) -> Self {
        match hour {
            5..=10 => Self::Morning,
            11..=13 => Self::Lunch,
            14..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            1..=4 => Self::LateNight,
            _ => Self::Night,
        }
    }

    /// Canonical snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Lunch => "lunch",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
            Self::LateNight => "late_night",
        }
    }

    const fn is_night(self) -> bool {
        matches!(self, Self::Night | Self::LateNight)
    }
}

/// Time-of-week multipliers for every category.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFactors {
    /// Local hour in `0..24`.
    pub hour: u32,
    /// Day index, Sunday = 0.
    pub day: u8,
    /// Hour bucket.
    pub bucket: HourBucket,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// 07:00 to 18:59.
    pub is_day_time: bool,
    /// Lunch or dinner rush.
    pub is_peak_hour: bool,
    /// Current weather is not good; `false` without a weather reading.
    pub is_bad_weather: bool,
    /// Restaurant table; also used for unrecognised categories.
    pub restaurant: MultiplierTable,
    /// Cafe table.
    pub cafe: MultiplierTable,
    /// Bar table.
    pub bar: MultiplierTable,
    /// Outdoor activity table.
    pub outdoor: MultiplierTable,
    /// Indoor activity table.
    pub indoor: MultiplierTable,
    /// Shopping table.
    pub shopping: MultiplierTable,
    /// Tourism table.
    pub tourism: MultiplierTable,
    /// Weekday modifiers gated by traits at scoring time.
    pub weekday: MultiplierTable,
}

impl TimeFactors {
    /// Build the tables for a local time and day index (Sunday = 0).
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use placerank_scorer::TimeFactors;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let time = NaiveDate::from_ymd_opt(2026, 10, 17)
    ///     .and_then(|day| day.and_hms_opt(15, 0, 0))
    ///     .ok_or("invalid timestamp")?;
    /// let factors = TimeFactors::new(time, 6);
    /// assert_eq!(factors.cafe.get("afternoon"), Some(1.2));
    /// assert_eq!(factors.cafe.get("weekend"), Some(1.1));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn new(time: NaiveDateTime, day: u8) -> Self {
        let hour = time.hour();
        let bucket = HourBucket::of_hour(hour);
        let is_weekend = day == 0 || day == 6;
        let is_day_time = (7..19).contains(&hour);
        let is_peak_hour = (11..14).contains(&hour) || (18..21).contains(&hour);
        let weekend = |table: MultiplierTable, multiplier: f64| {
            table.with_if(is_weekend, "weekend", multiplier)
        };

        Self {
            hour,
            day,
            bucket,
            is_weekend,
            is_day_time,
            is_peak_hour,
            is_bad_weather: false,
            restaurant: weekend(restaurant_table(hour), 1.1),
            cafe: weekend(cafe_table(bucket), 1.1),
            bar: weekend(bar_table(bucket, is_day_time), 1.2),
            outdoor: weekend(outdoor_table(bucket), 1.2),
            indoor: indoor_table(bucket, false),
            shopping: weekend(shopping_table(bucket), 1.1),
            tourism: weekend(tourism_table(bucket), 1.2),
            weekday: weekday_table(hour, is_weekend),
        }
    }

    /// Mark the weather as bad, which favours indoor activities.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use placerank_scorer::TimeFactors;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let time = NaiveDate::from_ymd_opt(2026, 10, 14)
    ///     .and_then(|day| day.and_hms_opt(12, 0, 0))
    ///     .ok_or("invalid timestamp")?;
    /// let factors = TimeFactors::new(time, 3).with_bad_weather(true);
    /// assert_eq!(factors.indoor.get("badWeather"), Some(1.2));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn with_bad_weather(mut self, is_bad_weather: bool) -> Self {
        self.is_bad_weather = is_bad_weather;
        self.indoor = indoor_table(self.bucket, is_bad_weather);
        self
    }

    /// Table for a category.
    ///
    /// Categories without a dedicated table use the restaurant table.
    #[must_use]
    pub fn table_for(&self, category: &Category) -> &MultiplierTable {
        match category {
            Category::Restaurant => &self.restaurant,
            Category::Cafe => &self.cafe,
            Category::Bar => &self.bar,
            Category::Outdoor => &self.outdoor,
            Category::Indoor => &self.indoor,
            Category::Shopping => &self.shopping,
            Category::Tourism => &self.tourism,
            Category::Other(label) => {
                log::debug!("no time table for category {label}; using restaurant table");
                &self.restaurant
            }
        }
    }

    /// Meal window name for the hour, if any.
    #[must_use]
    pub fn meal_window(&self) -> Option<&'static str> {
        meal_window(self.hour)
    }
}

fn meal_window(hour: u32) -> Option<&'static str> {
    match hour {
        7..=9 => Some("breakfast"),
        11..=13 => Some("lunch"),
        17..=20 => Some("dinner"),
        _ => None,
    }
}

fn restaurant_table(hour: u32) -> MultiplierTable {
    meal_window(hour).map_or_else(
        || MultiplierTable::new().with("offPeak", 0.7),
        |window| MultiplierTable::new().with(window, 1.3),
    )
}

fn cafe_table(bucket: HourBucket) -> MultiplierTable {
    let table = MultiplierTable::new();
    match bucket {
        HourBucket::Morning => table.with("morning", 1.2),
        HourBucket::Afternoon => table.with("afternoon", 1.2),
        HourBucket::Evening => table.with("evening", 1.0),
        HourBucket::Night | HourBucket::LateNight => table.with("lateNight", 0.8),
        HourBucket::Lunch => table,
    }
}

fn bar_table(bucket: HourBucket, is_day_time: bool) -> MultiplierTable {
    MultiplierTable::new()
        .with_if(
            is_day_time && bucket != HourBucket::Evening,
            "daytime",
            0.8,
        )
        .with_if(bucket == HourBucket::Evening, "evening", 1.2)
        .with_if(bucket.is_night(), "night", 1.3)
}

fn outdoor_table(bucket: HourBucket) -> MultiplierTable {
    let table = MultiplierTable::new();
    match bucket {
        HourBucket::Morning => table.with("morning", 1.2),
        HourBucket::Afternoon => table.with("afternoon", 1.1),
        HourBucket::Evening => table.with("evening", 0.9),
        HourBucket::Night | HourBucket::LateNight => table.with("night", 0.6),
        HourBucket::Lunch => table,
    }
}

fn indoor_table(bucket: HourBucket, is_bad_weather: bool) -> MultiplierTable {
    MultiplierTable::new()
        .with("anytime", 1.0)
        .with_if(is_bad_weather, "badWeather", 1.2)
        .with_if(bucket.is_night(), "night", 1.1)
}

fn shopping_table(bucket: HourBucket) -> MultiplierTable {
    let table = MultiplierTable::new();
    match bucket {
        HourBucket::Morning => table.with("morning", 0.9),
        HourBucket::Afternoon => table.with("afternoon", 1.2),
        HourBucket::Evening => table.with("evening", 1.1),
        HourBucket::Night | HourBucket::LateNight => table.with("night", 0.7),
        HourBucket::Lunch => table,
    }
}

fn tourism_table(bucket: HourBucket) -> MultiplierTable {
    let table = MultiplierTable::new();
    match bucket {
        HourBucket::Morning => table.with("morning", 1.1),
        HourBucket::Afternoon => table.with("afternoon", 1.2),
        HourBucket::Evening => table.with("evening", 0.9),
        HourBucket::Night | HourBucket::LateNight => table.with("night", 0.7),
        HourBucket::Lunch => table,
    }
}

fn weekday_table(hour: u32, is_weekend: bool) -> MultiplierTable {
    if is_weekend {
        return MultiplierTable::new();
    }
    MultiplierTable::new()
        .with_if((9..18).contains(&hour), "workFriendly", 1.2)
        .with_if((11..14).contains(&hour), "quickLunch", 1.2)
        .with_if((18..21).contains(&hour), "afterWork", 1.2)
}
