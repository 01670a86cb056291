#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for context-aware re-ranking.

use std::cell::RefCell;

use placerank_core::test_support::{place, place_at_distance, saturday_at, wednesday_at};
use placerank_core::{
    Category, ContextFactor, ContextSnapshot, Mood, Place, RecentActivity, ScoredPlace,
    TransportMode, UserLocation, Weather, WeatherCondition,
};
use placerank_scorer::{apply_contextual_factors, generate_context_explanation};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    places: RefCell<Vec<Place>>,
    snapshot: RefCell<Option<ContextSnapshot>>,
    ranked: RefCell<Vec<ScoredPlace>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        places: RefCell::new(Vec::new()),
        snapshot: RefCell::new(None),
        ranked: RefCell::new(Vec::new()),
    }
}

#[given("a quiet cafe with a base score of 10")]
fn quiet_cafe(context: &TestContext) {
    context
        .places
        .borrow_mut()
        .push(place("quiet-cafe", "cafe", 10.0, &["조용한"]));
}

#[given("a restaurant 500 metres away")]
fn nearby_restaurant(context: &TestContext) {
    context
        .places
        .borrow_mut()
        .push(place_at_distance("bistro", "restaurant", 5.0, 500.0));
}

#[given("three places with mixed base scores")]
fn mixed_places(context: &TestContext) {
    context.places.borrow_mut().extend([
        place("low", "bar", 1.0, &[]),
        place("high", "cafe", 9.0, &[]),
        place("mid", "outdoor", 5.0, &[]),
    ]);
}

#[given("a park and a museum with equal base scores")]
fn park_and_museum(context: &TestContext) {
    context.places.borrow_mut().extend([
        place("park", "outdoor", 5.0, &["공원"]),
        place("museum", "indoor", 5.0, &["박물관"]),
    ]);
}

#[given("a Saturday afternoon context with mild sunshine and a very stressed mood")]
fn stressed_weekend(context: &TestContext) {
    set_snapshot(
        context,
        ContextSnapshot::new()
            .with_time(saturday_at(15))
            .with_weather(Weather::new(WeatherCondition::Sunny).with_temperature(20.0))
            .with_mood(Mood::new("stressed", 5).expect("valid mood")),
    );
}

#[given("a context where the user left a cafe five minutes ago")]
fn just_left_cafe(context: &TestContext) {
    set_snapshot(
        context,
        ContextSnapshot::new().with_recent_activity(RecentActivity::new(Category::Cafe, 5)),
    );
}

#[given("a context with an unrecognised mood")]
fn unrecognised_mood(context: &TestContext) {
    set_snapshot(
        context,
        ContextSnapshot::new().with_mood(Mood::new("furious", 3).expect("valid mood")),
    );
}

#[given("a context where the user is walking")]
fn walking_user(context: &TestContext) {
    set_snapshot(
        context,
        ContextSnapshot::new().with_location(UserLocation::travelling_by(TransportMode::Walking)),
    );
}

#[given("a rainy weekday context")]
fn rainy_weekday(context: &TestContext) {
    set_snapshot(
        context,
        ContextSnapshot::new()
            .with_time(wednesday_at(14))
            .with_weather(Weather::new(WeatherCondition::classify("heavy rain"))),
    );
}

#[when("the places are re-ranked")]
fn rerank(context: &TestContext) {
    let snapshot = context
        .snapshot
        .borrow()
        .clone()
        .expect("context must be initialised");
    let ranked = apply_contextual_factors(&context.places.borrow(), Some(&snapshot));
    *context.ranked.borrow_mut() = ranked;
}

#[when("the places are re-ranked without context")]
fn rerank_without_context(context: &TestContext) {
    let ranked = apply_contextual_factors(&context.places.borrow(), None);
    *context.ranked.borrow_mut() = ranked;
}

#[then("the cafe's weather score is neutral")]
fn weather_neutral(context: &TestContext) {
    let cafe = first(context);
    assert_eq!(cafe.context_factors.weather_score, 1.0);
    assert!(!cafe.boost_reasons.contains(&ContextFactor::Weather));
}

#[then("the cafe's mood score is boosted")]
fn mood_boosted(context: &TestContext) {
    let cafe = first(context);
    assert!(cafe.context_factors.mood_score > 1.0);
    assert!(cafe.boost_reasons.contains(&ContextFactor::Mood));
}

#[then("the cafe's final score exceeds its base score")]
fn final_exceeds_base(context: &TestContext) {
    let cafe = first(context);
    assert!(cafe.final_match_score > cafe.place.base_match_score);
    assert!(cafe.context_score <= 2.0);
}

#[then("the raw activity score is 0.7")]
fn raw_activity(context: &TestContext) {
    assert_near(first(context).context_factors.activity_score, 0.7);
}

#[then("the composite score is held at the damping floor")]
fn damped_composite(context: &TestContext) {
    assert_near(first(context).context_score, 0.8);
}

#[then("the cafe keeps its base score")]
fn keeps_base(context: &TestContext) {
    let cafe = first(context);
    assert_eq!(cafe.context_score, 1.0);
    assert_eq!(cafe.final_match_score, cafe.place.base_match_score);
}

#[then("the location score is at least 1.2")]
fn location_boost(context: &TestContext) {
    assert!(first(context).context_factors.location_score >= 1.2);
}

#[then("the places keep their input order and scores")]
fn identity_order(context: &TestContext) {
    let ranked = context.ranked.borrow();
    let places = context.places.borrow();
    assert_eq!(ranked.len(), places.len());
    for (scored, original) in ranked.iter().zip(places.iter()) {
        assert_eq!(&scored.place, original);
        assert_eq!(scored.final_match_score, original.base_match_score);
        assert!(scored.boost_reasons.is_empty());
    }
}

#[then("the museum ranks above the park")]
fn museum_first(context: &TestContext) {
    let ids: Vec<String> = context
        .ranked
        .borrow()
        .iter()
        .map(|scored| scored.id().to_owned())
        .collect();
    assert_eq!(ids, ["museum", "park"]);
}

#[then("the museum explanation mentions staying dry")]
fn museum_explained(context: &TestContext) {
    let museum = first(context);
    let snapshot = context
        .snapshot
        .borrow()
        .clone()
        .expect("context must be initialised");
    let explanations = generate_context_explanation(&museum.place, &snapshot);
    assert!(
        explanations
            .iter()
            .any(|explanation| explanation.factor == ContextFactor::Weather
                && explanation.message.contains("dry")),
        "unexpected explanations: {explanations:?}"
    );
}

fn set_snapshot(context: &TestContext, snapshot: ContextSnapshot) {
    *context.snapshot.borrow_mut() = Some(snapshot);
}

fn first(context: &TestContext) -> ScoredPlace {
    context
        .ranked
        .borrow()
        .first()
        .cloned()
        .expect("at least one ranked place")
}

#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]
fn assert_near(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected approximately {expected}, got {actual}"
    );
}

#[scenario(path = "tests/features/context_ranking.feature", index = 0)]
fn stressed_user_prefers_quiet_cafe(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/context_ranking.feature", index = 1)]
fn repeat_cafe_is_damped(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/context_ranking.feature", index = 2)]
fn unknown_mood_is_neutral(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/context_ranking.feature", index = 3)]
fn nearby_restaurant_is_boosted(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/context_ranking.feature", index = 4)]
fn missing_context_is_identity(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/context_ranking.feature", index = 5)]
fn rain_favours_sheltered_places(context: TestContext) {
    let _ = context;
}
