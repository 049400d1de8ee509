//! Core domain types for league tables.
//!
//! The crate owns the [`MatchResult`] record, the standings engine that folds
//! results into a ranked table, and the [`MatchStore`] seam used to persist
//! and query results. File formats and command dispatch live in the data and
//! CLI crates.
//!
//! Invariants:
//! - A [`MatchResult`] is immutable once constructed.
//! - Standings are a pure function of the supplied results; no global state.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod match_result;
pub mod standings;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
#[cfg(test)]
mod tests;

pub use match_result::MatchResult;
pub use standings::{Standings, StandingsRow, TeamStats, compute_standings};
pub use store::MatchStore;
#[cfg(feature = "store-sqlite")]
pub use store::{SqliteMatchStore, SqliteMatchStoreError};
