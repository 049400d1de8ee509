//! Facade crate for the league table tools.
//!
//! This crate re-exports the core domain types and exposes the SQLite match
//! store behind the `store-sqlite` feature.

#![forbid(unsafe_code)]

pub use league_core::{
    MatchResult, MatchStore, Standings, StandingsRow, TeamStats, compute_standings,
};

#[cfg(feature = "store-sqlite")]
pub use league_core::{SqliteMatchStore, SqliteMatchStoreError};
