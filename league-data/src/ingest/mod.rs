//! Reading match results from comma-separated files.
//!
//! The first row is a header and is skipped without inspection. Each later
//! row must carry `competition_id, date, team_1, team_1_score, team_2,
//! team_2_score`; trailing fields are ignored. The whole input is validated
//! before anything is returned, so a caller that persists the output never
//! sees a partially valid file.

use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use csv::{Position, ReaderBuilder};
use league_core::MatchResult;
use log::{info, warn};
use thiserror::Error;

use crate::fs::open_utf8_file;
use trim::TrimLeadingSpace;

mod row;
mod trim;

pub use row::{DATE_FORMAT, MIN_FIELDS, RowError, parse_row};

/// Errors returned when reading a match-result file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input file could not be opened.
    #[error("failed to open match file {path:?}")]
    Open {
        /// Requested input path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The input was empty; not even a header row was present.
    #[error("match file has no header row")]
    MissingHeader,
    /// The CSV reader could not decode a row.
    #[error("failed to read row on line {line}")]
    Malformed {
        /// One-based line number reported by the reader.
        line: u64,
        /// Source error produced by `csv`.
        #[source]
        source: csv::Error,
    },
    /// A row decoded but failed validation.
    #[error("invalid row on line {line}")]
    InvalidRow {
        /// One-based line number of the row.
        line: u64,
        /// Reason the row was rejected.
        #[source]
        source: RowError,
    },
}

/// Read and validate every match result in the file at `path`.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use league_data::read_match_file;
///
/// # fn main() -> Result<(), league_data::IngestError> {
/// let results = read_match_file(Utf8Path::new("matches.csv"))?;
/// println!("Read {} results", results.len());
/// # Ok(())
/// # }
/// ```
pub fn read_match_file(path: &Utf8Path) -> Result<Vec<MatchResult>, IngestError> {
    let file = open_utf8_file(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let results = read_match_results(BufReader::new(file))?;
    info!("read {} match results from {path}", results.len());
    Ok(results)
}

/// Read and validate every match result from `reader`.
///
/// Blanks opening a field are dropped before parsing, so a quoted field may
/// follow `, `. Fails on the first malformed row; nothing after it is
/// examined.
pub fn read_match_results<R: Read>(reader: R) -> Result<Vec<MatchResult>, IngestError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(TrimLeadingSpace::new(reader));

    let header = csv_reader
        .headers()
        .map_err(|source| IngestError::Malformed {
            line: error_line(&source),
            source,
        })?;
    if header.is_empty() {
        return Err(IngestError::MissingHeader);
    }

    let mut results = Vec::new();
    for entry in csv_reader.records() {
        let record = entry.map_err(|source| IngestError::Malformed {
            line: error_line(&source),
            source,
        })?;
        let line = record.position().map_or(0, Position::line);
        let result = parse_row(&record).map_err(|source| IngestError::InvalidRow { line, source })?;
        results.push(result);
    }

    if results.is_empty() {
        warn!("match file contains a header but no results");
    }
    Ok(results)
}

fn error_line(error: &csv::Error) -> u64 {
    error.position().map_or(0, Position::line)
}
