//! Test-only fixtures and an in-memory `MatchStore` used by unit and
//! behaviour tests.

use std::convert::Infallible;

use chrono::NaiveDate;

use crate::{MatchResult, MatchStore};

/// Build a calendar date, panicking on impossible input.
///
/// # Panics
///
/// Panics when the components do not form a valid date.
#[expect(clippy::expect_used, reason = "test fixtures fail fast on typos")]
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date should be valid")
}

/// Six fixtures between four teams used as the reference standings table.
///
/// The fold yields `Team A 4/3/1/0/10`, `Team B 4/1/1/2/4`,
/// `Team C 2/1/0/1/3` and `Team D 2/0/0/2/0`.
#[must_use]
pub fn reference_results(competition_id: &str) -> Vec<MatchResult> {
    vec![
        MatchResult::new(competition_id, date(2023, 11, 11), "Team A", 1, "Team B", 0),
        MatchResult::new(competition_id, date(2023, 11, 11), "Team B", 1, "Team C", 0),
        MatchResult::new(competition_id, date(2023, 11, 11), "Team A", 1, "Team D", 0),
        MatchResult::new(competition_id, date(2023, 11, 12), "Team B", 2, "Team A", 2),
        MatchResult::new(competition_id, date(2023, 11, 12), "Team C", 2, "Team D", 1),
        MatchResult::new(competition_id, date(2023, 11, 12), "Team A", 2, "Team B", 1),
    ]
}

/// In-memory `MatchStore` implementation used in tests.
///
/// Results are kept in insertion order and filtered with a linear scan.
#[derive(Debug, Default)]
pub struct MemoryMatchStore {
    results: Vec<MatchResult>,
}

impl MemoryMatchStore {
    /// Create a store pre-populated with `results`.
    pub fn with_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = MatchResult>,
    {
        Self {
            results: results.into_iter().collect(),
        }
    }

    /// Every stored result, across all competitions.
    #[must_use]
    pub fn all(&self) -> &[MatchResult] {
        &self.results
    }
}

impl MatchStore for MemoryMatchStore {
    type Error = Infallible;

    fn insert_results(&mut self, results: &[MatchResult]) -> Result<usize, Self::Error> {
        self.results.extend_from_slice(results);
        Ok(results.len())
    }

    fn results_for_competition(
        &self,
        competition_id: &str,
    ) -> Result<Vec<MatchResult>, Self::Error> {
        Ok(self
            .results
            .iter()
            .filter(|result| result.competition_id() == competition_id)
            .cloned()
            .collect())
    }
}
