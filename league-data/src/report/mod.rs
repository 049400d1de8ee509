//! Writing standings tables as comma-separated files.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use csv::WriterBuilder;
use league_core::Standings;
use log::info;
use thiserror::Error;

use crate::fs::{create_utf8_file, ensure_parent_dir};

/// Column names written as the first line of every standings file.
pub const HEADER: [&str; 6] = ["team", "play", "win", "draw", "lose", "points"];

/// Errors returned when writing a standings table.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The parent directory of the output file could not be created.
    #[error("failed to create output directory for {path:?}")]
    CreateDirectory {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The output file could not be created or truncated.
    #[error("failed to create standings file {path:?}")]
    Create {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Encoding or writing a row failed.
    #[error("failed to write standings row")]
    Write {
        /// Source error produced by `csv`.
        #[source]
        source: csv::Error,
    },
    /// Flushing buffered output failed.
    #[error("failed to flush standings output")]
    Flush {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Write `standings` to `writer`: the header line, then one line per team in
/// ranked order.
///
/// An empty table still produces the header.
///
/// # Examples
/// ```
/// use league_core::compute_standings;
/// use league_data::write_standings;
///
/// let standings = compute_standings(std::iter::empty::<&league_core::MatchResult>());
/// let mut out = Vec::new();
/// write_standings(&mut out, &standings).expect("write to memory");
/// assert_eq!(out, b"team,play,win,draw,lose,points\n");
/// ```
pub fn write_standings<W: Write>(writer: W, standings: &Standings) -> Result<(), ReportError> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer
        .write_record(HEADER)
        .map_err(|source| ReportError::Write { source })?;
    for row in standings.rows() {
        csv_writer
            .serialize(row)
            .map_err(|source| ReportError::Write { source })?;
    }
    csv_writer
        .flush()
        .map_err(|source| ReportError::Flush { source })
}

/// Create (or overwrite) the file at `path` and write `standings` to it.
///
/// Missing parent directories are created.
pub fn write_standings_file(path: &Utf8Path, standings: &Standings) -> Result<(), ReportError> {
    ensure_parent_dir(path).map_err(|source| ReportError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    let file = create_utf8_file(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_standings(file, standings)?;
    info!("wrote {} standings rows to {path}", standings.len());
    Ok(())
}
