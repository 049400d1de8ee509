//! `input` command: validate a match file and persist its results.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use league_core::MatchStore;
use league_data::{fs::file_is_file, read_match_file};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::store::{StoreConfig, StoreOptions};
use crate::{
    ARG_DBNAME, ARG_FILENAME, ARG_HOST, ARG_PASSWORD, ARG_PORT, ARG_USER, CliError,
    ENV_INPUT_FILENAME, USAGE_INPUT,
};

/// CLI arguments for the `input` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "input",
    long_about = "Read a comma-separated match file, validate every row and \
                 store the results. Nothing is stored when any row is \
                 invalid. Options can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Load match results from a CSV file"
)]
#[ortho_config(prefix = "LEAGUE")]
pub(crate) struct InputArgs {
    /// Path to the match-result CSV file.
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

impl InputArgs {
    fn into_config(self) -> Result<InputConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        InputConfig::try_from(merged)
    }
}

/// Resolved `input` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputConfig {
    pub(crate) filename: Utf8PathBuf,
    pub(crate) store: StoreConfig,
}

impl InputConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.filename, ARG_FILENAME)
    }
}

impl TryFrom<InputArgs> for InputConfig {
    type Error = CliError;

    fn try_from(args: InputArgs) -> Result<Self, Self::Error> {
        let filename = args.filename.ok_or(CliError::MissingArgument {
            field: ARG_FILENAME,
            env: ENV_INPUT_FILENAME,
            usage: USAGE_INPUT,
        })?;
        let store = StoreConfig::from(StoreOptions {
            host: args.host,
            port: args.port,
            user: args.user,
            password: args.password,
            dbname: args.dbname,
        });
        Ok(Self { filename, store })
    }
}

/// What an `input` run stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputOutcome {
    pub(crate) results: usize,
    pub(crate) dbname: Utf8PathBuf,
}

pub(crate) fn resolve_input_config(args: InputArgs) -> Result<InputConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn run_input(args: InputArgs) -> Result<InputOutcome, CliError> {
    let config = resolve_input_config(args)?;
    let results = read_match_file(&config.filename).map_err(|source| CliError::Ingest {
        path: config.filename.clone(),
        source,
    })?;

    let mut store = config.store.open()?;
    let stored = store
        .insert_results(&results)
        .map_err(|source| CliError::PersistResults {
            path: config.store.dbname.clone(),
            source,
        })?;
    Ok(InputOutcome {
        results: stored,
        dbname: config.store.dbname,
    })
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
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
