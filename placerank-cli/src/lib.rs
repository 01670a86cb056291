//! Command-line interface for context-aware place ranking.
//!
//! `placerank rank` reads candidate places and an optional context snapshot
//! from JSON files, re-scores them and prints the ranked list as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod rank;

pub use error::CliError;

use rank::{RankArgs, run_rank};

pub(crate) const ARG_PLACES: &str = "places";
pub(crate) const ARG_CONTEXT: &str = "context";
pub(crate) const ARG_EXPLAIN: &str = "explain";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ENV_PLACES: &str = "PLACERANK_CMDS_RANK_PLACES";

/// Run the placerank CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when the ranked output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "placerank",
    about = "Re-rank candidate places for the situation they will be visited in",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply context factors to a list of places and print them ranked.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
