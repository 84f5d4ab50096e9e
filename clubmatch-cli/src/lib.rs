//! Command-line interface for running club recommendations offline.
#![forbid(unsafe_code)]

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use clubmatch_core::{InterestQuery, QueryError};
use clubmatch_scorer::{KeywordScorer, RecommendationReport, recommend};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const ARG_RECOMMEND_QUERY: &str = "query";
const ARG_RECOMMEND_CATALOG_DIR: &str = "catalog-dir";
const ARG_RECOMMEND_CLUBS: &str = "clubs";
const ARG_RECOMMEND_ACTIVITIES: &str = "activities";
const ARG_RECOMMEND_OUTPUT: &str = "output";
const ENV_RECOMMEND_QUERY: &str = "CLUBMATCH_CMDS_RECOMMEND_QUERY";

/// Run the clubmatch CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging,
/// catalogue loading, or report writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = config.execute()?;
    config.write_report(&report)
}

#[derive(Debug, Parser)]
#[command(
    name = "clubmatch",
    about = "Offline club recommendation utilities for the clubmatch engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank clubs against a free-text interest query.
    Recommend(RecommendArgs),
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the club catalogue against an interest query. Catalogue \
                 paths can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Rank clubs against an interest query"
)]
#[ortho_config(prefix = "CLUBMATCH")]
struct RecommendArgs {
    /// Free-text interest query.
    #[arg(value_name = "query")]
    #[serde(default)]
    query: Option<String>,
    /// Directory containing the default catalogue filenames.
    #[arg(long = ARG_RECOMMEND_CATALOG_DIR, value_name = "dir")]
    #[serde(default)]
    catalog_dir: Option<Utf8PathBuf>,
    /// Override the path to the club catalogue (`clubs.json`).
    #[arg(long = ARG_RECOMMEND_CLUBS, value_name = "path")]
    #[serde(default)]
    clubs: Option<Utf8PathBuf>,
    /// Override the path to the activity catalogue (`activities.json`).
    #[arg(long = ARG_RECOMMEND_ACTIVITIES, value_name = "path")]
    #[serde(default)]
    activities: Option<Utf8PathBuf>,
    /// Write the JSON report here instead of stdout.
    #[arg(long = ARG_RECOMMEND_OUTPUT, value_name = "path")]
    #[serde(default)]
    output: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RecommendConfig {
    /// The interest query to rank against.
    query: String,
    /// Path to `clubs.json`.
    clubs: Utf8PathBuf,
    /// Path to `activities.json`.
    activities: Utf8PathBuf,
    /// Optional report destination; stdout when absent.
    output: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.clubs, ARG_RECOMMEND_CLUBS)?;
        Self::require_existing(&self.activities, ARG_RECOMMEND_ACTIVITIES)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match clubmatch_data::file_is_file(path) {
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

    fn execute(&self) -> Result<RecommendationReport, CliError> {
        let catalog = clubmatch_data::load_catalog(&self.clubs, &self.activities)?;
        let query = InterestQuery::new(self.query.as_str())?;
        Ok(recommend(
            &KeywordScorer::new(),
            &catalog.clubs,
            &catalog.activities,
            &query,
        ))
    }

    fn write_report(&self, report: &RecommendationReport) -> Result<(), CliError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|source| CliError::Serialise { source })?;
        match &self.output {
            Some(path) => std::fs::write(path.as_std_path(), json).map_err(|source| {
                CliError::WriteOutput {
                    path: path.to_path_buf(),
                    source,
                }
            }),
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_QUERY,
            env: ENV_RECOMMEND_QUERY,
        })?;

        let catalog_dir = args.catalog_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let clubs = args
            .clubs
            .unwrap_or_else(|| catalog_dir.join("clubs.json"));
        let activities = args
            .activities
            .unwrap_or_else(|| catalog_dir.join("activities.json"));

        Ok(Self {
            query,
            clubs,
            activities,
            output: args.output,
        })
    }
}

/// Errors emitted by the clubmatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing flag.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced catalogue path does not exist on disk.
    #[error("{field} path {path} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced catalogue path exists but is not a regular file.
    #[error("{field} path {path} is not a regular file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// Inspecting a catalogue path failed for another reason.
    #[error("failed to inspect {field} path {path}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Loading or validating a catalogue failed.
    #[error(transparent)]
    Catalog(#[from] clubmatch_data::CatalogError),
    /// The merged query was empty.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// Serialising the report failed.
    #[error("failed to serialise report")]
    Serialise {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing the report to the output path failed.
    #[error("failed to write report to {path}")]
    WriteOutput {
        /// The requested output path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
