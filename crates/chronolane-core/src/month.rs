//! Calendar month arithmetic.
//!
//! Months are the unit of the timeline axis. A [`Month`] is a plain
//! `{year, month}` pair; a [`MonthIndex`] encodes it as `year * 12 + (month - 1)`
//! so that ordering and month deltas reduce to integer arithmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Integer encoding of a calendar month (`year * 12 + (month - 1)`).
///
/// Strictly monotonic with calendar time; subtracting two indices yields
/// the distance between them in months.
pub type MonthIndex = i32;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl Month {
    /// Create a month, validating the month component.
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange { month });
        }
        Ok(Self { year, month })
    }

    /// Encode as a [`MonthIndex`].
    pub fn index(&self) -> MonthIndex {
        self.year * 12 + (self.month as i32 - 1)
    }

    /// Decode from a [`MonthIndex`].
    pub fn from_index(index: MonthIndex) -> Self {
        Self {
            year: index.div_euclid(12),
            month: (index.rem_euclid(12) + 1) as u32,
        }
    }

    /// Parse a tolerant date string: `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`.
    ///
    /// A missing month component defaults to January; a day component is
    /// ignored. An unparsable year or an out-of-range month is a typed
    /// [`DateError`], never a silent default.
    pub fn parse(value: &str) -> Result<Self, DateError> {
        let s = value.trim();
        if s.is_empty() {
            return Err(DateError::Unparsable {
                value: value.to_string(),
            });
        }
        let mut parts = s.splitn(3, '-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .filter(|y| *y != 0)
            .ok_or_else(|| DateError::Unparsable {
                value: value.to_string(),
            })?;
        let month = match parts.next() {
            Some(p) => p.parse::<u32>().map_err(|_| DateError::Unparsable {
                value: value.to_string(),
            })?,
            None => 1,
        };
        Self::new(year, month)
    }

    /// Months between `self` and `other`, inclusive of both endpoints.
    pub fn span_months(&self, other: &Month) -> i32 {
        (other.index() - self.index()).abs() + 1
    }
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Resolve the end index of a possibly ongoing interval.
///
/// `end` present yields its own index; absent means "ongoing" and resolves
/// to the caller-supplied `now_index`. The engine never reads a wall clock.
pub fn resolve_end_index(end: Option<&Month>, now_index: MonthIndex) -> MonthIndex {
    match end {
        Some(m) => m.index(),
        None => now_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let m = Month::new(2024, 3).unwrap();
        assert_eq!(Month::from_index(m.index()), m);

        let jan = Month::new(2018, 1).unwrap();
        assert_eq!(jan.index(), 2018 * 12);
        assert_eq!(Month::from_index(2018 * 12), jan);
    }

    #[test]
    fn test_index_ordering() {
        let a = Month::new(2019, 12).unwrap();
        let b = Month::new(2020, 1).unwrap();
        assert_eq!(b.index() - a.index(), 1);
        assert!(a.index() < b.index());
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(Month::parse("2020").unwrap(), Month { year: 2020, month: 1 });
        assert_eq!(
            Month::parse("2020-06").unwrap(),
            Month { year: 2020, month: 6 }
        );
        assert_eq!(
            Month::parse("2020-06-15").unwrap(),
            Month { year: 2020, month: 6 }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Month::parse("soon"),
            Err(DateError::Unparsable { .. })
        ));
        assert!(matches!(Month::parse(""), Err(DateError::Unparsable { .. })));
        assert!(matches!(
            Month::parse("2020-13"),
            Err(DateError::MonthOutOfRange { month: 13 })
        ));
        assert!(matches!(
            Month::parse("0-05"),
            Err(DateError::Unparsable { .. })
        ));
    }

    #[test]
    fn test_resolve_end_index() {
        let now = Month::new(2024, 3).unwrap().index();
        let end = Month::new(2021, 7).unwrap();
        assert_eq!(resolve_end_index(Some(&end), now), end.index());
        assert_eq!(resolve_end_index(None, now), now);
    }

    #[test]
    fn test_span_months() {
        let a = Month::new(2020, 1).unwrap();
        let b = Month::new(2020, 6).unwrap();
        assert_eq!(a.span_months(&b), 6);
        assert_eq!(a.span_months(&a), 1);
    }
}
