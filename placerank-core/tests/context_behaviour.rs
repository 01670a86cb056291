//! Behavioural coverage for decoding request payloads.
#![cfg(feature = "serde")]

use std::cell::RefCell;

use placerank_core::{
    Category, ContextSnapshot, MoodLabel, Place, PlaceTrait, PlaceTraitSet, WeatherCondition,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    payload: RefCell<String>,
    snapshot: RefCell<Option<ContextSnapshot>>,
    place: RefCell<Option<Place>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        payload: RefCell::new(String::new()),
        snapshot: RefCell::new(None),
        place: RefCell::new(None),
    }
}

fn set_payload(context: &TestContext, payload: &str) {
    payload.clone_into(&mut context.payload.borrow_mut());
}

fn decoded_snapshot(context: &TestContext) -> ContextSnapshot {
    context
        .snapshot
        .borrow()
        .clone()
        .expect("context payload should be decoded")
}

#[given("a context payload with Korean weather and mood labels")]
fn korean_context(context: &TestContext) {
    set_payload(
        context,
        r#"{"weather": {"condition": "비"}, "mood": {"label": "스트레스", "intensity": 4}}"#,
    );
}

#[given("a context payload sent on a Saturday without a day of week")]
fn saturday_context(context: &TestContext) {
    set_payload(context, r#"{"time": "2026-10-17T15:00:00"}"#);
}

#[given("a context payload sent on a Saturday with day of week 9")]
fn invalid_day_context(context: &TestContext) {
    set_payload(context, r#"{"time": "2026-10-17T15:00:00", "dayOfWeek": 9}"#);
}

#[given("a place payload for a quiet cafe described in Korean")]
fn korean_place(context: &TestContext) {
    set_payload(
        context,
        r#"{"id": "tea-house", "category": "카페", "tags": ["조용한"], "baseMatchScore": 7.5}"#,
    );
}

#[when("the context payload is decoded")]
fn decode_context(context: &TestContext) {
    let snapshot: ContextSnapshot =
        serde_json::from_str(&context.payload.borrow()).expect("decode context");
    context.snapshot.replace(Some(snapshot));
}

#[when("the place payload is decoded")]
fn decode_place(context: &TestContext) {
    let place: Place = serde_json::from_str(&context.payload.borrow()).expect("decode place");
    context.place.replace(Some(place));
}

#[then("the weather condition is rainy")]
fn weather_is_rainy(context: &TestContext) {
    let snapshot = decoded_snapshot(context);
    let weather = snapshot.weather.expect("weather decoded");
    assert_eq!(weather.condition, WeatherCondition::Rainy);
}

#[then("the mood is recognised as stressed")]
fn mood_is_stressed(context: &TestContext) {
    let snapshot = decoded_snapshot(context);
    let mood = snapshot.mood.expect("mood decoded");
    assert_eq!(mood.known_label(), Some(MoodLabel::Stressed));
    assert_eq!(mood.intensity, 4);
}

#[then("the effective day index is 6")]
fn day_is_saturday(context: &TestContext) {
    assert_eq!(decoded_snapshot(context).day_index(), Some(6));
}

#[then("the place is a cafe with the quiet trait")]
fn place_is_quiet_cafe(context: &TestContext) {
    let place = context.place.borrow().clone().expect("place decoded");
    assert_eq!(place.category, Category::Cafe);
    assert!(PlaceTraitSet::of(&place).contains(PlaceTrait::Quiet));
}

#[scenario(path = "tests/features/context_decoding.feature", index = 0)]
fn free_text_fields_are_normalised(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/context_decoding.feature", index = 1)]
fn weekday_is_derived(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/context_decoding.feature", index = 2)]
fn out_of_range_day_falls_back(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/context_decoding.feature", index = 3)]
fn place_traits_from_korean_tags(context: TestContext) {
    let _ = context;
}
