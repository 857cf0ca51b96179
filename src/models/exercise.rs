use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::fields::{deserialize_optional_text, non_blank};
use super::{FromSqliteRow, User};
use crate::error::{AppError, Result};

/// Reference from an exercise to the user who logged it.
///
/// A `UserRef` can only be built from a `User` that was loaded from the
/// store, so every exercise points at a user that existed when it was
/// written. Nothing re-checks the reference after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRef(String);

impl UserRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        Self(user.id.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub user_id: UserRef,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: UserRef(row.get("user_id")?),
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// Exercise fields as submitted, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExercise {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub description: String,
    pub duration: i32,
    /// `None` means "today" at insert time.
    pub date: Option<NaiveDate>,
}

impl CreateExercise {
    pub fn validate(self) -> Result<NewExercise> {
        let (Some(_), Some(duration)) = (
            non_blank(self.description.as_deref()),
            non_blank(self.duration.as_deref()),
        ) else {
            return Err(AppError::Validation(
                "Description and duration are required".to_string(),
            ));
        };

        let duration = parse_duration(duration).ok_or_else(|| {
            AppError::Validation("Duration must be a whole number of minutes".to_string())
        })?;

        let date = match non_blank(self.date.as_deref()) {
            Some(raw) => Some(
                parse_date(raw)
                    .ok_or_else(|| AppError::Validation(format!("Invalid date: {}", raw)))?,
            ),
            None => None,
        };

        Ok(NewExercise {
            description: self.description.unwrap_or_default(),
            duration,
            date,
        })
    }
}

/// Query string of the log endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Date bounds are inclusive; `None` leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl LogQuery {
    pub fn into_filter(self) -> Result<LogFilter> {
        Ok(LogFilter {
            from: parse_bound("from", self.from.as_deref())?,
            to: parse_bound("to", self.to.as_deref())?,
            limit: non_blank(self.limit.as_deref()).and_then(parse_limit),
        })
    }
}

fn parse_bound(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match non_blank(value) {
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("Invalid {} date: {}", name, raw))),
        None => Ok(None),
    }
}

fn parse_duration(input: &str) -> Option<i32> {
    input.trim().parse::<i32>().ok().filter(|n| *n >= 0)
}

/// Anything that is not a positive integer means "no limit".
fn parse_limit(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Parse a calendar date. Accepts `YYYY-MM-DD` and timestamps, of which
/// only the date part is kept.
///
/// Dates are stored as `YYYY-MM-DD` text and compared as text, so only
/// four-digit years are accepted.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    parse_any_date(input.trim()).filter(|date| (0..=9999).contains(&date.year()))
}

fn parse_any_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|datetime| datetime.date())
}

/// Human-readable calendar string, e.g. `Mon Jan 02 2023`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}
