// src/domain/comment/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::validate_text;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const COMMENT_AUTHOR_MAX_LEN: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "comment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

/// Free-text display name of an unauthenticated commenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor(String);

impl CommentAuthor {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        validate_text("author", &value, Some(COMMENT_AUTHOR_MAX_LEN))?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CommentAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        validate_text("content", &value, None)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CommentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Creation-date window used by the moderation listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatedWithin {
    Today,
    Past7Days,
    ThisMonth,
    ThisYear,
}

impl CreatedWithin {
    /// Half-open `[start, end)` range in UTC relative to `now`.
    pub fn range(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let today = now.date_naive();
        let tomorrow = today + Duration::days(1);
        match self {
            CreatedWithin::Today => (midnight(today), midnight(tomorrow)),
            CreatedWithin::Past7Days => (midnight(today - Duration::days(7)), midnight(tomorrow)),
            CreatedWithin::ThisMonth => {
                let start = first_of_month(today.year(), today.month());
                let end = if today.month() == 12 {
                    first_of_month(today.year() + 1, 1)
                } else {
                    first_of_month(today.year(), today.month() + 1)
                };
                (midnight(start), midnight(end))
            }
            CreatedWithin::ThisYear => (
                midnight(first_of_month(today.year(), 1)),
                midnight(first_of_month(today.year() + 1, 1)),
            ),
        }
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // day 1 exists in every month
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}
