//! Standings engine: fold match results into per-team counters and rank them.
//!
//! Ranking applies three keys in strict priority:
//! 1. points, descending;
//! 2. games played, descending;
//! 3. team name, ascending (byte-wise, case-sensitive).
//!
//! Team names are unique within one table, so the third key leaves no ties.

use std::{cmp::Ordering, collections::HashMap};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::MatchResult;

/// Points awarded for a win.
pub const POINTS_FOR_WIN: u32 = 3;
/// Points awarded for a draw.
pub const POINTS_FOR_DRAW: u32 = 1;

/// Per-team counters accumulated while folding one competition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamStats {
    /// Games played.
    pub played: u32,
    /// Games won.
    pub won: u32,
    /// Games drawn.
    pub drawn: u32,
    /// Games lost.
    pub lost: u32,
}

impl TeamStats {
    /// Apply one fixture from this team's point of view.
    pub const fn record(&mut self, own_score: i64, opponent_score: i64) {
        self.played += 1;
        if own_score > opponent_score {
            self.won += 1;
        } else if own_score == opponent_score {
            self.drawn += 1;
        } else {
            self.lost += 1;
        }
    }

    /// League points, always `3 * won + drawn`.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.won
            .saturating_mul(POINTS_FOR_WIN)
            .saturating_add(self.drawn.saturating_mul(POINTS_FOR_DRAW))
    }
}

/// One ranked line of a standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StandingsRow {
    /// Team name as it appeared in the results.
    pub team: String,
    /// Games played.
    pub play: u32,
    /// Games won.
    pub win: u32,
    /// Games drawn.
    pub draw: u32,
    /// Games lost.
    pub lose: u32,
    /// League points.
    pub points: u32,
}

impl StandingsRow {
    fn from_stats(team: &str, stats: TeamStats) -> Self {
        Self {
            team: team.to_owned(),
            play: stats.played,
            win: stats.won,
            draw: stats.drawn,
            lose: stats.lost,
            points: stats.points(),
        }
    }

    /// Compare two rows by the three ranking keys.
    ///
    /// `Ordering::Less` means `self` ranks above `other`.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| other.play.cmp(&self.play))
            .then_with(|| self.team.cmp(&other.team))
    }
}

/// A ranked standings table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    rows: Vec<StandingsRow>,
}

impl Standings {
    /// Rows in ranked order, leader first.
    #[must_use]
    pub fn rows(&self) -> &[StandingsRow] {
        &self.rows
    }

    /// Consume the table, yielding its rows in ranked order.
    #[must_use]
    pub fn into_rows(self) -> Vec<StandingsRow> {
        self.rows
    }

    /// Number of teams in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no team has played a match.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a team's row by exact name.
    #[must_use]
    pub fn team(&self, name: &str) -> Option<&StandingsRow> {
        self.rows.iter().find(|row| row.team == name)
    }
}

/// Fold results for one competition into a ranked table.
///
/// The caller filters `results` to a single competition; this function does
/// not look at `competition_id`. Teams without results never appear.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use league_core::{MatchResult, compute_standings};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let date = NaiveDate::from_ymd_opt(2023, 11, 11).ok_or("invalid date")?;
/// let results = [
///     MatchResult::new("C1", date, "Team A", 1, "Team B", 0),
///     MatchResult::new("C1", date, "Team B", 1, "Team C", 1),
/// ];
/// let standings = compute_standings(&results);
/// let leader = standings.rows().first().ok_or("empty table")?;
/// assert_eq!(leader.team, "Team A");
/// assert_eq!(leader.points, 3);
/// # Ok(())
/// # }
/// ```
pub fn compute_standings<'a, I>(results: I) -> Standings
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    let mut stats: HashMap<&'a str, TeamStats> = HashMap::new();
    for result in results {
        for (team, own, opponent) in result.sides() {
            stats.entry(team).or_default().record(own, opponent);
        }
    }

    let mut rows: Vec<StandingsRow> = stats
        .into_iter()
        .map(|(team, team_stats)| StandingsRow::from_stats(team, team_stats))
        .collect();
    rows.sort_by(StandingsRow::rank_cmp);
    Standings { rows }
}
