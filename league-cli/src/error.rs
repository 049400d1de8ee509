//! Error types emitted by the league CLI.
//!
//! Messages describe only their own layer; `main` appends the source chain.

use std::sync::Arc;

use camino::Utf8PathBuf;
use league_core::SqliteMatchStoreError;
use league_data::{IngestError, ReportError};
use thiserror::Error;

/// Errors emitted by the league CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required argument is missing after configuration merging.
    #[error("missing <{field}> (pass it on the command line or set {env})\n\nUsage: {usage}")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
        usage: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening or initialising the match store failed.
    #[error("failed to open match store")]
    OpenStore(#[source] SqliteMatchStoreError),
    /// Reading the match file failed.
    #[error("failed to read match results from {path:?}")]
    Ingest {
        path: Utf8PathBuf,
        #[source]
        source: IngestError,
    },
    /// Writing validated results to the store failed.
    #[error("failed to persist match results into {path:?}")]
    PersistResults {
        path: Utf8PathBuf,
        #[source]
        source: SqliteMatchStoreError,
    },
    /// Loading the results of a competition failed.
    #[error("failed to load results for competition {competition_id:?}")]
    LoadResults {
        competition_id: String,
        #[source]
        source: SqliteMatchStoreError,
    },
    /// Writing the standings file failed.
    #[error("failed to write standings to {path:?}")]
    WriteStandings {
        path: Utf8PathBuf,
        #[source]
        source: ReportError,
    },
}
