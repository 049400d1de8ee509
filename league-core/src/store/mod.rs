//! Persistence seam for match results.
//!
//! The `MatchStore` trait models the single relational table the system
//! writes to and reads from. Ingestion inserts validated results; reporting
//! selects every result of one competition.

use crate::MatchResult;

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteMatchStore, SqliteMatchStoreError};

/// Insert-and-read access to persisted match results.
///
/// There is no update or delete path: results are immutable once stored.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use league_core::{MatchResult, MatchStore};
///
/// #[derive(Default)]
/// struct VecStore(Vec<MatchResult>);
///
/// impl MatchStore for VecStore {
///     type Error = Infallible;
///
///     fn insert_results(&mut self, results: &[MatchResult]) -> Result<usize, Infallible> {
///         self.0.extend_from_slice(results);
///         Ok(results.len())
///     }
///
///     fn results_for_competition(&self, id: &str) -> Result<Vec<MatchResult>, Infallible> {
///         Ok(self.0.iter().filter(|r| r.competition_id() == id).cloned().collect())
///     }
/// }
///
/// let store = VecStore::default();
/// assert!(matches!(store.results_for_competition("C1"), Ok(found) if found.is_empty()));
/// ```
pub trait MatchStore {
    /// Error raised by the backing store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist `results`, issuing one row insert per record.
    ///
    /// Returns the number of rows written.
    fn insert_results(&mut self, results: &[MatchResult]) -> Result<usize, Self::Error>;

    /// Return every stored result whose competition id equals
    /// `competition_id`, in no particular order.
    fn results_for_competition(
        &self,
        competition_id: &str,
    ) -> Result<Vec<MatchResult>, Self::Error>;
}
