//! Proximity and region tables.

use geo::{Coord, Distance, Haversine, Point};
use placerank_core::{Place, TransportMode, UserLocation};

const WALKING_METRES: f64 = 1_500.0;
const BICYCLE_METRES: f64 = 5_000.0;
const PUBLIC_METRES: f64 = 8_000.0;
const CAR_METRES: f64 = 15_000.0;
const DEFAULT_METRES: f64 = 3_000.0;

/// Comfortable travel range for a transport mode, in metres.
#[must_use]
pub const fn max_distance(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Walking => WALKING_METRES,
        TransportMode::Bicycle => BICYCLE_METRES,
        TransportMode::Public => PUBLIC_METRES,
        TransportMode::Car => CAR_METRES,
        TransportMode::Unspecified => DEFAULT_METRES,
    }
}

/// Distance band relative to the comfortable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceBand {
    /// Within 20% of the range.
    VeryClose,
    /// Within 50%.
    Close,
    /// Within 80%.
    Medium,
    /// Within range but unremarkable.
    InRange,
    /// Beyond the range.
    Far,
    /// Beyond 150% of the range.
    VeryFar,
}

impl DistanceBand {
    /// Band for `ratio = distance / max_distance`.
    #[must_use]
    pub const fn of_ratio(ratio: f64) -> Self {
        if ratio <= 0.2 {
            Self::VeryClose
        } else if ratio <= 0.5 {
            Self::Close
        } else if ratio <= 0.8 {
            Self::Medium
        } else if ratio <= 1.0 {
            Self::InRange
        } else if ratio <= 1.5 {
            Self::Far
        } else {
            Self::VeryFar
        }
    }

    /// Named multiplier for the band, `None` when neutral.
    #[must_use]
    pub const fn entry(self) -> Option<(&'static str, f64)> {
        match self {
            Self::VeryClose => Some(("veryClose", 1.3)),
            Self::Close => Some(("close", 1.2)),
            Self::Medium => Some(("medium", 1.1)),
            Self::InRange => None,
            Self::Far => Some(("far", 0.8)),
            Self::VeryFar => Some(("veryFar", 0.6)),
        }
    }
}

/// How a place's region relates to the user's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionMatch {
    /// Same sub-region.
    SameSubRegion,
    /// Same region, sub-region unknown or different.
    SameRegion,
    /// Both regions known and different.
    DifferentRegion,
}

impl RegionMatch {
    /// Named multiplier for the match.
    #[must_use]
    pub const fn entry(self) -> (&'static str, f64) {
        match self {
            Self::SameSubRegion => ("sameSubRegion", 1.3),
            Self::SameRegion => ("sameRegion", 1.2),
            Self::DifferentRegion => ("differentRegion", 0.9),
        }
    }
}

/// The user's position, range and region.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFactors {
    /// Reported transport mode.
    pub transport_mode: TransportMode,
    /// [`max_distance`] for the mode.
    pub max_distance: f64,
    /// User position.
    pub coordinates: Option<Coord<f64>>,
    /// User region, normalised for comparison.
    pub region: Option<String>,
    /// User sub-region, normalised for comparison.
    pub sub_region: Option<String>,
}

impl LocationFactors {
    /// Capture the user's location.
    #[must_use]
    pub fn new(location: &UserLocation) -> Self {
        Self {
            transport_mode: location.transport_mode,
            max_distance: max_distance(location.transport_mode),
            coordinates: location.coordinates,
            region: normalise_region(location.region.as_deref()),
            sub_region: normalise_region(location.sub_region.as_deref()),
        }
    }

    /// Distance to `place` in metres.
    ///
    /// Uses the precomputed distance when present, otherwise the haversine
    /// distance between both positions. Negative or non-finite distances are
    /// discarded with a warning.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use placerank_core::{Category, Place, TransportMode, UserLocation};
    /// use placerank_scorer::LocationFactors;
    ///
    /// # fn main() -> Result<(), placerank_core::PlaceError> {
    /// let user = UserLocation::travelling_by(TransportMode::Walking)
    ///     .with_coordinates(Coord { x: 126.9780, y: 37.5665 });
    /// let place = Place::new("p-1", Category::Cafe, 1.0)?
    ///     .with_coordinates(Coord { x: 126.9780, y: 37.5710 });
    /// let metres = LocationFactors::new(&user).distance_to(&place).unwrap_or_default();
    /// assert!((metres - 500.0).abs() < 5.0);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn distance_to(&self, place: &Place) -> Option<f64> {
        let metres = place.distance.or_else(|| {
            let (from, to) = self.coordinates.zip(place.coordinates)?;
            Some(Haversine.distance(Point::from(from), Point::from(to)))
        })?;
        if metres.is_finite() && metres >= 0.0 {
            Some(metres)
        } else {
            log::warn!("ignoring invalid distance {metres} for place {}", place.id);
            None
        }
    }

    /// Band for `place`, if its distance is known.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "bands compare distance as a fraction of the travel range"
    )]
    pub fn band(&self, place: &Place) -> Option<DistanceBand> {
        self.distance_to(place)
            .map(|metres| DistanceBand::of_ratio(metres / self.max_distance))
    }

    /// Region relation for `place`, if both sides carry enough data.
    #[must_use]
    pub fn region_match(&self, place: &Place) -> Option<RegionMatch> {
        let place_region = normalise_region(place.region.as_deref());
        let place_sub_region = normalise_region(place.sub_region.as_deref());
        let regions_conflict = matches!(
            (&self.region, &place_region),
            (Some(user), Some(other)) if user != other
        );
        let same_sub_region = matches!(
            (&self.sub_region, &place_sub_region),
            (Some(user), Some(other)) if user == other
        );
        if same_sub_region && !regions_conflict {
            return Some(RegionMatch::SameSubRegion);
        }
        match (&self.region, &place_region) {
            (Some(user), Some(other)) if user == other => Some(RegionMatch::SameRegion),
            (Some(_), Some(_)) => Some(RegionMatch::DifferentRegion),
            _ => None,
        }
    }
}

fn normalise_region(region: Option<&str>) -> Option<String> {
    region
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
}
