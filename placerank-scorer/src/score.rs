//! Factor scorers over normalised tables.
//!
//! Each normalised factor type implements [`FactorScorer`]: it selects the
//! tables that apply to a place from its category and traits and multiplies
//! their entries together.

use placerank_core::{
    Category, ContextFactor, FactorAccumulator, FactorResult, FactorScorer, Place, PlaceTrait,
    PlaceTraitSet,
};

use crate::normalize::{
    ActivityFactors, FactorBundle, LocationFactors, MoodFactors, TimeFactors, WeatherFactors,
};

impl FactorScorer for TimeFactors {
    fn factor(&self) -> ContextFactor {
        ContextFactor::Time
    }

    fn score(&self, place: &Place, traits: &PlaceTraitSet) -> FactorResult {
        let mut acc = FactorAccumulator::new(self.factor());
        self.table_for(&place.category).apply_to(&mut acc);
        for (modifier, multiplier) in self.weekday.iter() {
            let applies = match modifier {
                "workFriendly" => traits.contains(PlaceTrait::WorkFriendly),
                "quickLunch" => place.category == Category::Restaurant,
                "afterWork" => {
                    matches!(place.category, Category::Bar | Category::Restaurant)
                        || traits.contains(PlaceTrait::AfterWork)
                }
                _ => false,
            };
            acc.apply_if(applies, multiplier);
        }
        acc.finish()
    }
}

impl FactorScorer for WeatherFactors {
    fn factor(&self) -> ContextFactor {
        ContextFactor::Weather
    }

    fn score(&self, place: &Place, traits: &PlaceTraitSet) -> FactorResult {
        let mut acc = FactorAccumulator::new(self.factor());
        let tables = [
            (traits.contains(PlaceTrait::Outdoor), &self.outdoor),
            (traits.contains(PlaceTrait::Indoor), &self.indoor),
            (place.category == Category::Cafe, &self.cafe),
            (place.category == Category::Restaurant, &self.restaurant),
            (traits.contains(PlaceTrait::Viewpoint), &self.viewpoint),
        ];
        for (_, table) in tables.iter().filter(|(selected, _)| *selected) {
            table.apply_to(&mut acc);
        }
        acc.finish()
    }
}

impl FactorScorer for MoodFactors {
    fn factor(&self) -> ContextFactor {
        ContextFactor::Mood
    }

    fn score(&self, _place: &Place, traits: &PlaceTraitSet) -> FactorResult {
        let mut acc = FactorAccumulator::new(self.factor());
        for &(place_trait, multiplier) in &self.traits {
            acc.apply_if(traits.contains(place_trait), multiplier);
        }
        acc.finish()
    }
}

impl FactorScorer for ActivityFactors {
    fn factor(&self) -> ContextFactor {
        ContextFactor::ActivitySequence
    }

    fn score(&self, place: &Place, traits: &PlaceTraitSet) -> FactorResult {
        let mut acc = FactorAccumulator::new(self.factor());
        for (_, multiplier) in self.entries(&place.category, *traits).iter() {
            acc.apply(self.decayed(multiplier));
        }
        acc.finish()
    }
}

impl FactorScorer for LocationFactors {
    fn factor(&self) -> ContextFactor {
        ContextFactor::Location
    }

    fn score(&self, place: &Place, _traits: &PlaceTraitSet) -> FactorResult {
        let mut acc = FactorAccumulator::new(self.factor());
        if let Some((_, multiplier)) = self.band(place).and_then(|band| band.entry()) {
            acc.apply(multiplier);
        }
        if let Some((_, multiplier)) = self.region_match(place).map(|region| region.entry()) {
            acc.apply(multiplier);
        }
        acc.finish()
    }
}

impl FactorBundle {
    /// Scorers for the factors present in the bundle, in reporting order.
    pub fn scorers(&self) -> impl Iterator<Item = &dyn FactorScorer> + '_ {
        [
            self.time.as_ref().map(|f| f as &dyn FactorScorer),
            self.weather.as_ref().map(|f| f as &dyn FactorScorer),
            self.mood.as_ref().map(|f| f as &dyn FactorScorer),
            self.activity.as_ref().map(|f| f as &dyn FactorScorer),
            self.location.as_ref().map(|f| f as &dyn FactorScorer),
        ]
        .into_iter()
        .flatten()
    }

    /// Score `place` against every present factor.
    #[must_use]
    pub fn score_place(&self, place: &Place) -> Vec<FactorResult> {
        let traits = PlaceTraitSet::of(place);
        self.scorers()
            .map(|scorer| scorer.score(place, &traits))
            .collect()
    }
}
