//! Rank command implementation for the placerank CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placerank_core::{ContextSnapshot, Place, ScoredPlace};
use placerank_scorer::{Explanation, apply_contextual_factors, generate_context_explanation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_CONTEXT, ARG_EXPLAIN, ARG_LIMIT, ARG_PLACES, CliError, ENV_PLACES};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Re-score a JSON array of places against a JSON context \
                 snapshot and print them ranked by final match score. \
                 Without a context the places are printed unchanged and in \
                 input order.",
    about = "Rank places for the current context"
)]
#[ortho_config(prefix = "PLACERANK")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing an array of places.
    #[arg(long = ARG_PLACES, value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Path to a JSON file containing a context snapshot.
    #[arg(long = ARG_CONTEXT, value_name = "path")]
    #[serde(default)]
    pub(crate) context: Option<Utf8PathBuf>,
    /// Attach explanation sentences to each ranked place.
    #[arg(long = ARG_EXPLAIN)]
    #[serde(default)]
    pub(crate) explain: bool,
    /// Print at most this many places.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the JSON places file.
    pub(crate) places: Utf8PathBuf,
    /// Path to the JSON context file, if any.
    pub(crate) context: Option<Utf8PathBuf>,
    /// Whether to attach explanations.
    pub(crate) explain: bool,
    /// Maximum number of places to print.
    pub(crate) limit: Option<usize>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.places, ARG_PLACES)?;
        if let Some(context) = &self.context {
            Self::require_existing(context, ARG_CONTEXT)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_PLACES,
        })?;
        Ok(Self {
            places,
            context: args.context,
            explain: args.explain,
            limit: args.limit,
        })
    }
}

/// One entry of the printed ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RankedPlace {
    #[serde(flatten)]
    pub(crate) scored: ScoredPlace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) explanations: Option<Vec<Explanation>>,
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let ranked = execute_rank(args)?;
    write_ranking(writer, &ranked)
}

fn execute_rank(args: RankArgs) -> Result<Vec<RankedPlace>, CliError> {
    let config = resolve_rank_config(args)?;
    let places = load_places(&config.places)?;
    let context: Option<ContextSnapshot> = config
        .context
        .as_deref()
        .map(|path| load_json(path, ARG_CONTEXT))
        .transpose()?;
    info!(
        "ranking {} places ({})",
        places.len(),
        if context.is_some() {
            "with context"
        } else {
            "without context"
        }
    );
    Ok(rank_places(&places, context.as_ref(), &config))
}

pub(crate) fn rank_places(
    places: &[Place],
    context: Option<&ContextSnapshot>,
    config: &RankConfig,
) -> Vec<RankedPlace> {
    let mut scored = apply_contextual_factors(places, context);
    if let Some(limit) = config.limit {
        debug!("truncating ranking to {limit} places");
        scored.truncate(limit);
    }
    scored
        .into_iter()
        .map(|entry| {
            let explanations = config.explain.then(|| {
                context.map_or_else(Vec::new, |snapshot| {
                    generate_context_explanation(&entry.place, snapshot)
                })
            });
            RankedPlace {
                scored: entry,
                explanations,
            }
        })
        .collect()
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads the places file.
///
/// A well-formed document that is not an array holds no places.
pub(super) fn load_places(path: &Utf8Path) -> Result<Vec<Place>, CliError> {
    let document: serde_json::Value = load_json(path, ARG_PLACES)?;
    if !document.is_array() {
        warn!("{path} does not hold a JSON array; ranking no places");
        return Ok(Vec::new());
    }
    serde_json::from_value(document).map_err(|source| CliError::ParseInput {
        field: ARG_PLACES,
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON document from disk.
pub(super) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_ranking(writer: &mut dyn Write, ranked: &[RankedPlace]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranked).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
