//! File formats for the league table tools.
//!
//! Responsibilities:
//! - Read match results from comma-separated files and validate each row.
//! - Render a ranked standings table as a comma-separated file.
//! - Provide capability-based file helpers shared with the CLI.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `league-core`).
//! - Do not talk to the match store; callers persist what ingestion returns.

#![forbid(unsafe_code)]

pub mod fs;
pub mod ingest;
pub mod report;
#[cfg(test)]
mod test_support;

pub use ingest::{IngestError, RowError, read_match_file, read_match_results};
pub use report::{ReportError, write_standings, write_standings_file};
