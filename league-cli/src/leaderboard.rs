//! `leaderboard` command: rank one competition and write the table.

use camino::Utf8PathBuf;
use clap::Parser;
use league_core::{MatchStore, Standings, compute_standings};
use league_data::write_standings_file;
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::store::{StoreConfig, StoreOptions};
use crate::{
    ARG_COMPETITION_ID, ARG_DBNAME, ARG_FILENAME, ARG_HOST, ARG_PASSWORD, ARG_PORT, ARG_USER,
    CliError, ENV_LEADERBOARD_COMPETITION_ID, ENV_LEADERBOARD_FILENAME, USAGE_LEADERBOARD,
};

/// CLI arguments for the `leaderboard` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "leaderboard",
    long_about = "Rank every team of one competition by points, games played \
                 and name, then write the table as a comma-separated file. \
                 An existing output file is overwritten.",
    about = "Write the standings of a competition to a CSV file"
)]
#[ortho_config(prefix = "LEAGUE")]
pub(crate) struct LeaderboardArgs {
    /// Competition whose standings are written.
    #[arg(value_name = ARG_COMPETITION_ID)]
    #[serde(default)]
    pub(crate) competition_id: Option<String>,
    /// Destination of the standings CSV file.
    #[arg(value_name = ARG_FILENAME)]
    #[serde(default)]
    pub(crate) filename: Option<Utf8PathBuf>,
    /// Database server host; has no effect on the embedded SQLite store.
    #[arg(long = ARG_HOST, value_name = "host")]
    #[serde(default)]
    pub(crate) host: Option<String>,
    /// Database server port; has no effect on the embedded SQLite store.
    #[arg(long = ARG_PORT, value_name = "port")]
    #[serde(default)]
    pub(crate) port: Option<u16>,
    /// Database user; has no effect on the embedded SQLite store.
    #[arg(long = ARG_USER, value_name = "user")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Database password; has no effect on the embedded SQLite store.
    #[arg(long = ARG_PASSWORD, value_name = "password")]
    #[serde(default)]
    pub(crate) password: Option<String>,
    /// Database file holding the match results.
    #[arg(long = ARG_DBNAME, value_name = "path")]
    #[serde(default)]
    pub(crate) dbname: Option<Utf8PathBuf>,
}

impl LeaderboardArgs {
    fn into_config(self) -> Result<LeaderboardConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        LeaderboardConfig::try_from(merged)
    }
}

/// Resolved `leaderboard` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeaderboardConfig {
    pub(crate) competition_id: String,
    pub(crate) filename: Utf8PathBuf,
    pub(crate) store: StoreConfig,
}

impl TryFrom<LeaderboardArgs> for LeaderboardConfig {
    type Error = CliError;

    fn try_from(args: LeaderboardArgs) -> Result<Self, Self::Error> {
        let competition_id = args.competition_id.ok_or(CliError::MissingArgument {
            field: ARG_COMPETITION_ID,
            env: ENV_LEADERBOARD_COMPETITION_ID,
            usage: USAGE_LEADERBOARD,
        })?;
        let filename = args.filename.ok_or(CliError::MissingArgument {
            field: ARG_FILENAME,
            env: ENV_LEADERBOARD_FILENAME,
            usage: USAGE_LEADERBOARD,
        })?;
        let store = StoreConfig::from(StoreOptions {
            host: args.host,
            port: args.port,
            user: args.user,
            password: args.password,
            dbname: args.dbname,
        });
        Ok(Self {
            competition_id,
            filename,
            store,
        })
    }
}

/// What a `leaderboard` run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeaderboardOutcome {
    pub(crate) competition_id: String,
    pub(crate) teams: usize,
    pub(crate) filename: Utf8PathBuf,
}

pub(crate) fn run_leaderboard(args: LeaderboardArgs) -> Result<LeaderboardOutcome, CliError> {
    let config = args.into_config()?;
    let store = config.store.open()?;
    let standings = load_standings(&store, &config.competition_id).map_err(|source| {
        CliError::LoadResults {
            competition_id: config.competition_id.clone(),
            source,
        }
    })?;
    drop(store);

    if standings.is_empty() {
        warn!(
            "competition {:?} has no stored results; writing an empty table",
            config.competition_id
        );
    }
    write_standings_file(&config.filename, &standings).map_err(|source| {
        CliError::WriteStandings {
            path: config.filename.clone(),
            source,
        }
    })?;
    Ok(LeaderboardOutcome {
        competition_id: config.competition_id,
        teams: standings.len(),
        filename: config.filename,
    })
}

/// Read one competition from `store` and rank it.
pub(crate) fn load_standings<S: MatchStore>(
    store: &S,
    competition_id: &str,
) -> Result<Standings, S::Error> {
    let results = store.results_for_competition(competition_id)?;
    Ok(compute_standings(&results))
}
