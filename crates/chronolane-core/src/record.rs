//! Timeline record types and the raw-fixture parse boundary.
//!
//! [`TimelineRecord`] is the strict input the layout engine accepts: a
//! validated start month, an optional end month, and an opaque payload the
//! engine threads through untouched. [`RawRecord`] mirrors the JSON fixture
//! shape (string dates) and is where tolerant date parsing happens.

use serde::{Deserialize, Serialize};

use crate::error::DateError;
use crate::month::Month;

/// A date-ranged record to be laid out on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRecord {
    pub id: String,
    pub start: Month,
    /// Absent means ongoing; resolved against the caller-supplied "now".
    pub end: Option<Month>,
    /// Opaque payload (titles, organization, logo, country, ...). The engine
    /// never interprets it.
    #[serde(flatten)]
    pub payload: serde_json::Value,
}

impl TimelineRecord {
    /// Create a record with an empty payload.
    pub fn new(id: impl Into<String>, start: Month, end: Option<Month>) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            payload: serde_json::json!({}),
        }
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// True when no end date was supplied.
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }
}

/// Date fields as they appear in the raw fixtures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDates {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A record as read from a JSON fixture, dates still in string form
/// (`YYYY`, `YYYY-MM`, or `YYYY-MM-DD`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub dates: RawDates,
    #[serde(flatten)]
    pub payload: serde_json::Value,
}

impl RawRecord {
    /// Convert into a strict [`TimelineRecord`].
    ///
    /// # Errors
    /// - [`DateError::MissingStart`] when `dates.start` is absent or empty.
    /// - A present-but-unparsable `dates.end` is an error, not "ongoing";
    ///   only a genuinely absent end marks the record open-ended.
    pub fn into_record(self) -> Result<TimelineRecord, DateError> {
        let start = match self.dates.start.as_deref() {
            Some(s) if !s.trim().is_empty() => Month::parse(s)?,
            _ => return Err(DateError::MissingStart),
        };
        let end = match self.dates.end.as_deref() {
            Some(s) if !s.trim().is_empty() => Some(Month::parse(s)?),
            _ => None,
        };
        Ok(TimelineRecord {
            id: self.id,
            start,
            end,
            payload: self.payload,
        })
    }
}
