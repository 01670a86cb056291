//! Behaviour-driven step definitions driving the rank CLI scenarios.

use super::helpers::{PLACES_JSON, SAD_CONTEXT_JSON, Workspace};
use super::*;
use crate::rank::run_rank_with;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

struct RankWorld {
    workspace: Workspace,
    places_path: Utf8PathBuf,
    include_places: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RankWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let places_path = workspace.path("places.json");
        Self {
            workspace,
            places_path,
            include_places: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["placerank".to_owned(), "rank".to_owned()];
        if *self.include_places.borrow() {
            argv.extend([format!("--{ARG_PLACES}"), self.places_path.to_string()]);
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn output(&self) -> Vec<Value> {
        let value: Value =
            serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON");
        value.as_array().cloned().expect("output should be an array")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RankWorld {
    RankWorld::new()
}

#[given("a places file with a sports bar and a tea house")]
fn places_file_exists(#[from(world)] world: &RankWorld) {
    world.workspace.write("places.json", PLACES_JSON);
}

#[given("a context file describing a sad mood")]
fn context_file_exists(#[from(world)] world: &RankWorld) {
    let path = world.workspace.write("context.json", SAD_CONTEXT_JSON);
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_CONTEXT}"), path.to_string()]);
}

#[given("I ask for explanations of the top 1 place")]
fn ask_for_explanations(#[from(world)] world: &RankWorld) {
    world.cli_args.borrow_mut().extend([
        format!("--{ARG_EXPLAIN}"),
        format!("--{ARG_LIMIT}"),
        "1".to_owned(),
    ]);
}

#[given("the places file contains invalid JSON")]
fn places_file_is_invalid(#[from(world)] world: &RankWorld) {
    world.workspace.write("places.json", "[{ not valid json");
}

#[given("I omit the places path")]
fn omit_places_path(#[from(world)] world: &RankWorld) {
    *world.include_places.borrow_mut() = false;
}

#[when("I run the rank command")]
fn run_rank_command(#[from(world)] world: &RankWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Rank(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_rank_with(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &RankWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

fn first_id(world: &RankWorld) -> String {
    world
        .output()
        .first()
        .and_then(|entry| entry["id"].as_str())
        .map(str::to_owned)
        .expect("at least one ranked place")
}

#[then("the tea house is ranked first")]
fn tea_house_first(#[from(world)] world: &RankWorld) {
    assert_eq!(first_id(world), "tea-house");
}

#[then("the sports bar is ranked first")]
fn sports_bar_first(#[from(world)] world: &RankWorld) {
    assert_eq!(first_id(world), "sports-bar");
}

#[then("exactly 1 place is printed with a mood explanation")]
fn one_place_with_explanation(#[from(world)] world: &RankWorld) {
    let output = world.output();
    let [entry] = output.as_slice() else {
        panic!("expected one ranked place, found {output:?}");
    };
    let explanations = entry["explanations"]
        .as_array()
        .expect("explanations attached");
    assert!(
        explanations
            .iter()
            .any(|explanation| explanation["factor"] == "mood"),
        "expected a mood explanation in {explanations:?}"
    );
}

#[then("the command fails because the places JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::ParseInput { field, .. } => assert_eq!(*field, ARG_PLACES),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[then("the command fails because the places path is missing")]
fn command_fails_missing_places(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PLACES),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[scenario(path = "tests/features/rank.feature", name = "Context reorders places")]
fn context_reorders_places(#[from(world)] world: RankWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/rank.feature",
    name = "Missing context keeps input order"
)]
fn missing_context_keeps_order(#[from(world)] world: RankWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/rank.feature",
    name = "Explanations and limit are applied"
)]
fn explanations_and_limit(#[from(world)] world: RankWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/rank.feature",
    name = "Invalid places JSON is reported"
)]
fn invalid_places_json(#[from(world)] world: RankWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/rank.feature", name = "Places path is required")]
fn places_path_required(#[from(world)] world: RankWorld) {
    let _ = world;
}
