//! The played-fixture record shared by ingestion, storage and reporting.

use chrono::NaiveDate;

/// One played fixture between two teams.
///
/// Fields are private: a result is created once, by ingestion or by a store
/// read, and never updated afterwards.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use league_core::MatchResult;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let date = NaiveDate::from_ymd_opt(2023, 11, 11).ok_or("invalid date")?;
/// let result = MatchResult::new("C1", date, "Team A", 2, "Team B", 1);
/// assert_eq!(result.team_1(), "Team A");
/// assert_eq!(result.team_2_score(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchResult {
    competition_id: String,
    date: NaiveDate,
    team_1: String,
    team_1_score: i64,
    team_2: String,
    team_2_score: i64,
}

impl MatchResult {
    /// Construct a result from already-validated parts.
    ///
    /// Scores are not range-checked; negative values compare normally.
    #[must_use]
    pub fn new(
        competition_id: impl Into<String>,
        date: NaiveDate,
        team_1: impl Into<String>,
        team_1_score: i64,
        team_2: impl Into<String>,
        team_2_score: i64,
    ) -> Self {
        Self {
            competition_id: competition_id.into(),
            date,
            team_1: team_1.into(),
            team_1_score,
            team_2: team_2.into(),
            team_2_score,
        }
    }

    /// Grouping key scoping this result to one standings table.
    #[must_use]
    pub const fn competition_id(&self) -> &str {
        self.competition_id.as_str()
    }

    /// Calendar date the fixture was played on.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Name of the first-listed (home) team.
    #[must_use]
    pub const fn team_1(&self) -> &str {
        self.team_1.as_str()
    }

    /// Goals scored by the first-listed team.
    #[must_use]
    pub const fn team_1_score(&self) -> i64 {
        self.team_1_score
    }

    /// Name of the second-listed (away) team.
    #[must_use]
    pub const fn team_2(&self) -> &str {
        self.team_2.as_str()
    }

    /// Goals scored by the second-listed team.
    #[must_use]
    pub const fn team_2_score(&self) -> i64 {
        self.team_2_score
    }

    /// Both participants as `(team, own score, opponent score)`.
    ///
    /// The standings fold applies the same update rule to each entry, which
    /// keeps home and away symmetric.
    #[must_use]
    pub fn sides(&self) -> [(&str, i64, i64); 2] {
        [
            (self.team_1(), self.team_1_score, self.team_2_score),
            (self.team_2(), self.team_2_score, self.team_1_score),
        ]
    }
}
