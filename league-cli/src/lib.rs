//! Command-line interface for loading match results and writing league
//! tables.
#![forbid(unsafe_code)]

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use log::info;

mod error;
mod input;
mod leaderboard;
mod store;

pub use error::CliError;
use input::{InputArgs, run_input};
use leaderboard::{LeaderboardArgs, run_leaderboard};

const ARG_FILENAME: &str = "filename";
const ARG_COMPETITION_ID: &str = "competition_id";
const ARG_HOST: &str = "host";
const ARG_PORT: &str = "port";
const ARG_USER: &str = "user";
const ARG_PASSWORD: &str = "password";
const ARG_DBNAME: &str = "dbname";
const ENV_INPUT_FILENAME: &str = "LEAGUE_CMDS_INPUT_FILENAME";
const ENV_LEADERBOARD_COMPETITION_ID: &str = "LEAGUE_CMDS_LEADERBOARD_COMPETITION_ID";
const ENV_LEADERBOARD_FILENAME: &str = "LEAGUE_CMDS_LEADERBOARD_FILENAME";
const USAGE_INPUT: &str = "league input <filename>";
const USAGE_LEADERBOARD: &str = "league leaderboard <competition_id> <filename>";

/// Run the league CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    run_from(std::env::args_os())
}

/// Run the league CLI with explicit arguments; the first is the binary name.
pub fn run_from<I, T>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Input(args) => {
            let outcome = run_input(args)?;
            info!(
                "stored {} match results in {}",
                outcome.results, outcome.dbname
            );
        }
        Command::Leaderboard(args) => {
            let outcome = run_leaderboard(args)?;
            info!(
                "wrote standings for {:?} ({} teams) to {}",
                outcome.competition_id, outcome.teams, outcome.filename
            );
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "league",
    about = "Load match results and publish competition standings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load match results from a CSV file into the match store.
    Input(InputArgs),
    /// Write the standings of one competition to a CSV file.
    Leaderboard(LeaderboardArgs),
}

#[cfg(test)]
mod tests;
