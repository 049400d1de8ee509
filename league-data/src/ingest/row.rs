//! Validation of a single match-result row.

use std::num::ParseIntError;

use chrono::NaiveDate;
use csv::StringRecord;
use league_core::MatchResult;
use thiserror::Error;

/// Fields every row must carry; anything after them is ignored.
pub const MIN_FIELDS: usize = 6;

/// Calendar format accepted in the date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_LEN: usize = 10;

/// Reasons a single row fails validation.
#[derive(Debug, Error)]
pub enum RowError {
    /// The row carries fewer than [`MIN_FIELDS`] fields.
    #[error("expected at least {MIN_FIELDS} fields, found {found}")]
    TooFewFields {
        /// Number of fields present.
        found: usize,
    },
    /// A score column is not a base-10 integer.
    #[error("{column} {value:?} is not an integer")]
    InvalidScore {
        /// Name of the offending column.
        column: &'static str,
        /// Raw column contents.
        value: String,
        /// Integer parsing failure.
        #[source]
        source: ParseIntError,
    },
    /// The date column is not a real `YYYY-MM-DD` calendar date.
    #[error("date {value:?} is not a YYYY-MM-DD calendar date")]
    InvalidDate {
        /// Raw column contents.
        value: String,
        /// Calendar parsing failure, when the shape itself was acceptable.
        #[source]
        source: Option<chrono::ParseError>,
    },
}

/// Validate one record and build the result it describes.
///
/// Leading whitespace is dropped from every field; scores also lose trailing
/// whitespace. Negative scores parse and are kept.
pub fn parse_row(record: &StringRecord) -> Result<MatchResult, RowError> {
    let field = |index: usize| record.get(index).map(str::trim_start);
    let [
        Some(competition_id),
        Some(date),
        Some(team_1),
        Some(team_1_score),
        Some(team_2),
        Some(team_2_score),
    ] = [0, 1, 2, 3, 4, 5].map(field)
    else {
        return Err(RowError::TooFewFields {
            found: record.len(),
        });
    };

    let team_1_score = parse_score("team_1_score", team_1_score)?;
    let team_2_score = parse_score("team_2_score", team_2_score)?;
    let date = parse_date(date)?;

    Ok(MatchResult::new(
        competition_id,
        date,
        team_1,
        team_1_score,
        team_2,
        team_2_score,
    ))
}

fn parse_score(column: &'static str, raw: &str) -> Result<i64, RowError> {
    raw.trim()
        .parse()
        .map_err(|source| RowError::InvalidScore {
            column,
            value: raw.to_owned(),
            source,
        })
}

fn parse_date(raw: &str) -> Result<NaiveDate, RowError> {
    // chrono accepts unpadded months and days; require the exact shape first.
    let shaped = raw.len() == DATE_LEN
        && raw.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !shaped {
        return Err(RowError::InvalidDate {
            value: raw.to_owned(),
            source: None,
        });
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|source| RowError::InvalidDate {
        value: raw.to_owned(),
        source: Some(source),
    })
}
