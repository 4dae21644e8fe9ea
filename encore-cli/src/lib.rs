//! Command-line interface for planning concert itineraries.
//!
//! The `plan` subcommand reads candidate events from a JSON file, selects an
//! itinerary with [`encore_core::ItinerarySelector`], and reports it as JSON
//! or plain text together with performer coverage.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

const ARG_PLAN_EVENTS: &str = "events";
const ARG_PLAN_PERFORMERS: &str = "performers";
const ARG_PLAN_FORMAT: &str = "format";
const ARG_PLAN_OUTPUT: &str = "output";
const ENV_PLAN_EVENTS: &str = "ENCORE_CMDS_PLAN_EVENTS";

/// Environment variable holding the log filter for the `encore` binary.
pub const LOG_ENV: &str = "ENCORE_LOG";

/// Run the Encore CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration cannot be
/// merged, the events file is missing or malformed, or output cannot be
/// written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "encore",
    about = "Plan concert itineraries from candidate events",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Select at most one show per performer without double-booking a date.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
