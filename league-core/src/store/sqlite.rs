//! SQLite-backed `MatchStore` implementation.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use rusqlite::{Connection, Row, Transaction};
use thiserror::Error;

use super::MatchStore;
use crate::MatchResult;

const IN_MEMORY: &str = ":memory:";

/// Errors raised while opening, writing or querying the SQLite match store.
#[derive(Debug, Error)]
pub enum SqliteMatchStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}")]
    Open {
        /// Location of the SQLite database.
        path: Utf8PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Creating the `match_results` table failed.
    #[error("failed to create match_results table")]
    CreateSchema {
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Beginning the insert transaction failed.
    #[error("failed to begin match result transaction")]
    BeginTransaction {
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing the insert statement failed.
    #[error("failed to prepare match result insert statement")]
    PrepareInsert {
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Writing a single result row failed.
    #[error("failed to persist result {index} ({team_1} vs {team_2})")]
    Insert {
        /// Zero-based position of the result in the batch.
        index: usize,
        /// First-listed team of the failing result.
        team_1: String,
        /// Second-listed team of the failing result.
        team_2: String,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Committing the insert transaction failed.
    #[error("failed to commit match result transaction")]
    Commit {
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Selecting the results of a competition failed.
    #[error("failed to query results for competition {competition_id:?}")]
    Query {
        /// Competition whose results were requested.
        competition_id: String,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
}

/// Match store backed by a single `match_results` SQLite table.
///
/// The handle owns its connection; dropping the store closes it.
pub struct SqliteMatchStore {
    connection: Connection,
    location: Utf8PathBuf,
}

impl fmt::Debug for SqliteMatchStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteMatchStore")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl SqliteMatchStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: &Utf8Path) -> Result<Self, SqliteMatchStoreError> {
        let connection =
            Connection::open(path.as_std_path()).map_err(|source| SqliteMatchStoreError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Self::with_connection(connection, path.to_path_buf())
    }

    /// Open a private, transient in-memory database.
    pub fn open_in_memory() -> Result<Self, SqliteMatchStoreError> {
        let connection =
            Connection::open_in_memory().map_err(|source| SqliteMatchStoreError::Open {
                path: Utf8PathBuf::from(IN_MEMORY),
                source,
            })?;
        Self::with_connection(connection, Utf8PathBuf::from(IN_MEMORY))
    }

    fn with_connection(
        connection: Connection,
        location: Utf8PathBuf,
    ) -> Result<Self, SqliteMatchStoreError> {
        create_schema(&connection)?;
        debug!("opened match store at {location}");
        Ok(Self {
            connection,
            location,
        })
    }

    /// Where the database lives (`:memory:` for transient stores).
    #[must_use]
    pub fn location(&self) -> &Utf8Path {
        &self.location
    }
}

impl Drop for SqliteMatchStore {
    fn drop(&mut self) {
        debug!("closing match store at {}", self.location);
    }
}

impl MatchStore for SqliteMatchStore {
    type Error = SqliteMatchStoreError;

    /// Insert every result inside one transaction.
    ///
    /// A failure on any row rolls back the rows already written in this call.
    fn insert_results(&mut self, results: &[MatchResult]) -> Result<usize, Self::Error> {
        if results.is_empty() {
            return Ok(0);
        }

        let transaction = self
            .connection
            .transaction()
            .map_err(|source| SqliteMatchStoreError::BeginTransaction { source })?;
        persist_rows(&transaction, results)?;
        transaction
            .commit()
            .map_err(|source| SqliteMatchStoreError::Commit { source })?;
        Ok(results.len())
    }

    fn results_for_competition(
        &self,
        competition_id: &str,
    ) -> Result<Vec<MatchResult>, Self::Error> {
        let query_error = |source: rusqlite::Error| SqliteMatchStoreError::Query {
            competition_id: competition_id.to_owned(),
            source,
        };
        let mut statement = self
            .connection
            .prepare(
                "SELECT competition_id, date, team_1, team_1_score, team_2, team_2_score
                 FROM match_results
                 WHERE competition_id = ?1",
            )
            .map_err(query_error)?;
        let rows = statement
            .query_map([competition_id], read_row)
            .map_err(query_error)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(query_error)
    }
}

fn create_schema(connection: &Connection) -> Result<(), SqliteMatchStoreError> {
    connection
        .execute_batch(
            "CREATE TABLE IF NOT EXISTS match_results (
                competition_id TEXT NOT NULL,
                date TEXT NOT NULL,
                team_1 TEXT NOT NULL,
                team_1_score INTEGER NOT NULL,
                team_2 TEXT NOT NULL,
                team_2_score INTEGER NOT NULL
            );
            CREATE INDEX IF NOT EXISTS match_results_competition
                ON match_results (competition_id);",
        )
        .map_err(|source| SqliteMatchStoreError::CreateSchema { source })
}

fn persist_rows(
    transaction: &Transaction<'_>,
    results: &[MatchResult],
) -> Result<(), SqliteMatchStoreError> {
    let mut statement = transaction
        .prepare(
            "INSERT INTO match_results (
                competition_id, date, team_1, team_1_score, team_2, team_2_score
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .map_err(|source| SqliteMatchStoreError::PrepareInsert { source })?;

    for (index, result) in results.iter().enumerate() {
        statement
            .execute((
                result.competition_id(),
                result.date(),
                result.team_1(),
                result.team_1_score(),
                result.team_2(),
                result.team_2_score(),
            ))
            .map_err(|source| SqliteMatchStoreError::Insert {
                index,
                team_1: result.team_1().to_owned(),
                team_2: result.team_2().to_owned(),
                source,
            })?;
    }

    Ok(())
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<MatchResult> {
    Ok(MatchResult::new(
        row.get::<_, String>(0)?,
        row.get(1)?,
        row.get::<_, String>(2)?,
        row.get(3)?,
        row.get::<_, String>(4)?,
        row.get(5)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, reference_results};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    fn db_path(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join("league.db")).expect("utf-8 path")
    }

    fn sorted(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
        results.sort_by(|a, b| {
            (a.date(), a.team_1(), a.team_2()).cmp(&(b.date(), b.team_1(), b.team_2()))
        });
        results
    }

    #[rstest]
    fn round_trips_results_by_competition() {
        let mut store = SqliteMatchStore::open_in_memory().expect("open store");
        let c1 = reference_results("C1");
        let c2 = reference_results("C2");

        assert_eq!(store.insert_results(&c1).expect("insert C1"), 6);
        assert_eq!(store.insert_results(&c2[..3]).expect("insert C2"), 3);

        let found = store.results_for_competition("C1").expect("query C1");
        assert_eq!(sorted(found), sorted(c1));
        assert_eq!(
            store.results_for_competition("C2").expect("query C2").len(),
            3
        );
    }

    #[rstest]
    fn unknown_competition_yields_no_rows() {
        let mut store = SqliteMatchStore::open_in_memory().expect("open store");
        store
            .insert_results(&reference_results("C1"))
            .expect("insert results");

        let found = store.results_for_competition("c1").expect("query");
        assert!(found.is_empty(), "competition ids are case-sensitive");
    }

    #[rstest]
    fn preserves_wide_scores_and_dates() {
        let mut store = SqliteMatchStore::open_in_memory().expect("open store");
        let result = MatchResult::new("C9", date(2024, 2, 29), "Home", -3, "Away", 3_000_000_000);
        store
            .insert_results(std::slice::from_ref(&result))
            .expect("insert result");

        let found = store.results_for_competition("C9").expect("query");
        assert_eq!(found, vec![result]);
    }

    #[rstest]
    fn empty_batch_writes_nothing() {
        let mut store = SqliteMatchStore::open_in_memory().expect("open store");
        assert_eq!(store.insert_results(&[]).expect("insert nothing"), 0);
    }

    #[rstest]
    fn reopening_file_keeps_rows(temp_dir: TempDir) {
        let path = db_path(&temp_dir);
        {
            let mut store = SqliteMatchStore::open(&path).expect("open store");
            store
                .insert_results(&reference_results("C1"))
                .expect("insert results");
            assert_eq!(store.location(), path.as_path());
        }

        let reopened = SqliteMatchStore::open(&path).expect("reopen store");
        let found = reopened.results_for_competition("C1").expect("query");
        assert_eq!(found.len(), 6);
    }

    #[rstest]
    fn failed_insert_rolls_back_batch(temp_dir: TempDir) {
        let path = db_path(&temp_dir);
        let mut store = SqliteMatchStore::open(&path).expect("open store");
        {
            let blocker = Connection::open(path.as_std_path()).expect("open second handle");
            blocker
                .execute_batch(
                    "CREATE TRIGGER reject_team_d BEFORE INSERT ON match_results
                     WHEN NEW.team_2 = 'Team D'
                     BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
                )
                .expect("install trigger");
        }

        let err = store
            .insert_results(&reference_results("C1"))
            .expect_err("third row should be rejected");
        assert!(matches!(err, SqliteMatchStoreError::Insert { index: 2, .. }));
        assert!(
            store
                .results_for_competition("C1")
                .expect("query")
                .is_empty(),
            "rows before the failure should be rolled back"
        );
    }

    #[cfg(unix)]
    #[rstest]
    fn opening_missing_directory_reports_open_error(temp_dir: TempDir) {
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("absent/league.db"))
            .expect("utf-8 path");
        let err = SqliteMatchStore::open(&path).expect_err("missing parent should fail");
        assert!(matches!(err, SqliteMatchStoreError::Open { .. }));
    }
}
