//! Plan command implementation for the Encore CLI.

use std::io::{BufReader, Write};
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use encore_core::{Coverage, Event, Itinerary, ItinerarySelector, Planner};
use encore_fs::open_utf8_file;
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PLAN_EVENTS, ARG_PLAN_FORMAT, ARG_PLAN_OUTPUT, ARG_PLAN_PERFORMERS, CliError,
    ENV_PLAN_EVENTS,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a concert itinerary from a JSON array of candidate \
                 events. Each performer is booked at most once, preferring \
                 their earliest show, and no two shows share a date. The \
                 events path and options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Plan a concert itinerary"
)]
#[ortho_config(prefix = "ENCORE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing candidate events.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) events: Option<Utf8PathBuf>,
    /// Comma-separated performers to report coverage for.
    #[arg(long = ARG_PLAN_PERFORMERS, value_name = "list")]
    #[serde(default)]
    pub(crate) performers: Option<String>,
    /// Output format, `json` (default) or `text`.
    #[arg(long = ARG_PLAN_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// Write the itinerary to this file instead of standard output.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// How the itinerary is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON holding the itinerary and its coverage.
    #[default]
    Json,
    /// One line per show followed by coverage summaries.
    Text,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(CliError::UnknownFormat {
                value: value.to_owned(),
            }),
        }
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON events file.
    pub(crate) events: Utf8PathBuf,
    /// Performers the visitor asked for, in request order.
    pub(crate) performers: Vec<String>,
    /// Output rendering.
    pub(crate) format: OutputFormat,
    /// Destination file; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.events, ARG_PLAN_EVENTS)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match encore_fs::file_is_file(path) {
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

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let events = args.events.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_EVENTS,
            env: ENV_PLAN_EVENTS,
        })?;
        let format = args
            .format
            .as_deref()
            .map_or(Ok(OutputFormat::default()), OutputFormat::from_str)?;

        Ok(Self {
            events,
            performers: parse_performers(args.performers.as_deref()),
            format,
            output: args.output,
        })
    }
}

/// Split a comma-separated performer list, dropping empty segments.
fn parse_performers(list: Option<&str>) -> Vec<String> {
    list.map_or_else(Vec::new, |raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    })
}

#[derive(Serialize)]
struct PlanReport<'a> {
    itinerary: &'a Itinerary,
    coverage: &'a Coverage,
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &ItinerarySelector, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    planner: &dyn Planner,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    execute_plan(&config, planner, writer)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_plan(
    config: &PlanConfig,
    planner: &dyn Planner,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let events = load_events(&config.events)?;
    for event in events.iter().filter(|event| !event.has_calendar_date()) {
        warn!(
            "{} has a non-calendar date {:?}; it is ordered as plain text",
            event.performer(),
            event.date()
        );
    }

    let itinerary = planner.plan(&events);
    let coverage = Coverage::new(&config.performers, &events, &itinerary);
    info!(
        "planned {} show(s) from {} candidate event(s)",
        itinerary.len(),
        events.len()
    );

    let rendered = render(config.format, &itinerary, &coverage)?;
    match &config.output {
        Some(path) => write_output_file(path, &rendered),
        None => writer
            .write_all(rendered.as_bytes())
            .map_err(CliError::WriteOutput),
    }
}

/// Loads a JSON array of [`Event`] records from disk.
pub(super) fn load_events(path: &Utf8Path) -> Result<Vec<Event>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenEvents {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseEvents {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn render(
    format: OutputFormat,
    itinerary: &Itinerary,
    coverage: &Coverage,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            let report = PlanReport {
                itinerary,
                coverage,
            };
            let payload =
                serde_json::to_string_pretty(&report).map_err(CliError::SerializeItinerary)?;
            Ok(format!("{payload}\n"))
        }
        OutputFormat::Text => Ok(render_text(itinerary, coverage)),
    }
}

fn render_text(itinerary: &Itinerary, coverage: &Coverage) -> String {
    let mut lines: Vec<String> = itinerary
        .events()
        .iter()
        .map(|event| {
            format!(
                "{}  {}  @ {}",
                event.date(),
                event.performer(),
                event.location()
            )
        })
        .collect();
    if itinerary.is_empty() {
        lines.push("no shows scheduled".to_owned());
    }
    if !coverage.displaced.is_empty() {
        lines.push(format!("displaced: {}", coverage.displaced.join(", ")));
    }
    if !coverage.absent.is_empty() {
        lines.push(format!("absent: {}", coverage.absent.join(", ")));
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn write_output_file(path: &Utf8Path, rendered: &str) -> Result<(), CliError> {
    let create_failed = |source: std::io::Error| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    };
    encore_fs::ensure_parent_dir(path).map_err(create_failed)?;
    let mut file = encore_fs::create_utf8_file(path).map_err(create_failed)?;
    file.write_all(rendered.as_bytes())
        .map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
