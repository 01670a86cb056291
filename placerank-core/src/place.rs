//! Candidate places and their categories.

use std::collections::BTreeSet;
use std::fmt;

use geo::Coord;
use thiserror::Error;

/// Free-form descriptive tags attached to a place (for example `"조용한"` or
/// `"rooftop"`).
pub type Tags = BTreeSet<String>;

/// Broad kind of venue.
///
/// Parsing accepts English and Korean aliases; anything else is preserved in
/// [`Category::Other`] so callers never lose the original label.
///
/// # Examples
/// ```
/// use placerank_core::Category;
///
/// assert_eq!(Category::parse("카페"), Category::Cafe);
/// assert_eq!(Category::parse("Outdoor-Activity"), Category::Outdoor);
/// assert_eq!(Category::parse("spa").as_str(), "spa");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Category {
    /// Restaurants and other sit-down meals.
    Restaurant,
    /// Cafes, coffee shops and dessert cafes.
    Cafe,
    /// Bars, pubs and other drinking venues.
    Bar,
    /// Parks, trails and other open-air activities.
    Outdoor,
    /// Museums, galleries, cinemas and other indoor activities.
    Indoor,
    /// Malls, markets and shopping streets.
    Shopping,
    /// Landmarks and tourist attractions.
    Tourism,
    /// A category the engine has no dedicated tables for.
    Other(String),
}

fn from_alias(normalised: &str) -> Option<Category> {
    let category = match normalised {
        "restaurant" | "food" | "식당" | "음식점" | "맛집" | "레스토랑" => Category::Restaurant,
        "cafe" | "café" | "coffee" | "coffee_shop" | "카페" | "커피" => Category::Cafe,
        "bar" | "pub" | "술집" | "바" | "이자카야" => Category::Bar,
        "outdoor" | "outdoor_activity" | "outdooractivity" | "park" | "공원" | "야외" => {
            Category::Outdoor
        }
        "indoor" | "indoor_activity" | "indooractivity" | "실내" | "museum" | "박물관"
        | "gallery" | "미술관" | "cinema" | "영화관" => Category::Indoor,
        "shopping" | "mall" | "market" | "쇼핑" | "쇼핑몰" | "시장" => Category::Shopping,
        "tourism" | "attraction" | "tourist_attraction" | "landmark" | "관광" | "관광지" => {
            Category::Tourism
        }
        _ => return None,
    };
    Some(category)
}

impl Category {
    /// Parse a category label, falling back to [`Category::Other`].
    ///
    /// Matching ignores case, surrounding whitespace, and treats spaces and
    /// hyphens as underscores.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let normalised = label.trim().to_lowercase().replace([' ', '-'], "_");
        from_alias(&normalised).unwrap_or(Self::Other(normalised))
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::Bar => "bar",
            Self::Outdoor => "outdoor",
            Self::Indoor => "indoor",
            Self::Shopping => "shopping",
            Self::Tourism => "tourism",
            Self::Other(label) => label,
        }
    }

    /// Whether the engine has dedicated tables for this category.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_owned()
    }
}

/// A candidate place carrying its pre-context match score.
///
/// `distance` is measured in metres and is normally precomputed by the
/// caller; `coordinates` uses WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use placerank_core::{Category, Place};
///
/// # fn main() -> Result<(), placerank_core::PlaceError> {
/// let place = Place::new("p-1", Category::Cafe, 10.0)?
///     .with_tags(["조용한", "wifi"])
///     .with_distance(350.0)?;
/// assert!(place.tags.contains("wifi"));
/// assert_eq!(place.distance, Some(350.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Place {
    /// Caller-assigned identifier.
    pub id: String,
    /// Venue category.
    pub category: Category,
    /// Finer-grained category label, such as `"dessert cafe"`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sub_category: Option<String>,
    /// Descriptive tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Tags,
    /// Suitability score computed before any context is applied.
    pub base_match_score: f64,
    /// Geographic position.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "location", skip_serializing_if = "Option::is_none")
    )]
    pub coordinates: Option<Coord<f64>>,
    /// Administrative region, such as a city.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub region: Option<String>,
    /// Administrative sub-region, such as a district.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sub_region: Option<String>,
    /// Distance from the user in metres.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub distance: Option<f64>,
}

/// Errors returned by the validating [`Place`] constructors.
#[derive(Debug, Error, PartialEq)]
pub enum PlaceError {
    /// The identifier was empty or whitespace.
    #[error("place id must not be empty")]
    EmptyId,
    /// The base match score was negative or not finite.
    #[error("base match score {0} must be finite and non-negative")]
    InvalidBaseScore(f64),
    /// The distance was negative or not finite.
    #[error("distance {0} must be finite and non-negative")]
    InvalidDistance(f64),
}

impl Place {
    /// Validate and construct a [`Place`] without optional attributes.
    ///
    /// # Errors
    /// Returns [`PlaceError::EmptyId`] for a blank id and
    /// [`PlaceError::InvalidBaseScore`] for a negative or non-finite score.
    pub fn new(
        id: impl Into<String>,
        category: Category,
        base_match_score: f64,
    ) -> Result<Self, PlaceError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PlaceError::EmptyId);
        }
        if !is_non_negative(base_match_score) {
            return Err(PlaceError::InvalidBaseScore(base_match_score));
        }
        Ok(Self {
            id,
            category,
            sub_category: None,
            tags: Tags::new(),
            base_match_score,
            coordinates: None,
            region: None,
            sub_region: None,
            distance: None,
        })
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

    /// Set the sub-category label.
    #[must_use]
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    /// Set the geographic position.
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

    /// Set the precomputed distance in metres.
    ///
    /// # Errors
    /// Returns [`PlaceError::InvalidDistance`] for a negative or non-finite
    /// distance.
    pub fn with_distance(mut self, metres: f64) -> Result<Self, PlaceError> {
        if !is_non_negative(metres) {
            return Err(PlaceError::InvalidDistance(metres));
        }
        self.distance = Some(metres);
        Ok(self)
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
