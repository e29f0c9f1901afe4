//! A single bottle tracked by the cellar.
//!
//! A [`Beer`] is an immutable record of one bottle: the code identifying the
//! beer, the date it becomes ready to drink, and an optional size class.
//! Bottles are read from and written to lines of the form
//! `code~MM/DD/YY[~size]`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// Field separator used in cellar lines.
pub const DELIMITER: char = '~';

/// `chrono` format of the ready date field.
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// One bottle in the cellar.
///
/// # Examples
///
/// ```
/// use cellar_core::Beer;
///
/// let beer = Beer::parse("1234~01/02/16~bomber").unwrap();
/// assert_eq!(beer.code(), "1234");
/// assert_eq!(beer.size(), Some("bomber"));
/// assert_eq!(beer.to_string(), "1234~01/02/16~bomber");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BeerFields")]
pub struct Beer {
    code: String,
    ready_date: NaiveDate,
    size: Option<String>,
}

impl Beer {
    /// Create a bottle from its parts.
    ///
    /// An empty size is stored as no size. The code is not checked: callers
    /// must pass a non-empty code, and neither code nor size may contain
    /// [`DELIMITER`], or the bottle will not survive a save and reload. Use
    /// [`Beer::parse`] for untrusted input.
    #[must_use]
    pub fn new(code: impl Into<String>, ready_date: NaiveDate, size: Option<&str>) -> Self {
        Self {
            code: code.into(),
            ready_date,
            size: size.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// Parse a cellar line.
    ///
    /// The line must hold two or three `~` separated fields: a non-empty
    /// code, a `MM/DD/YY` date and an optional size class.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let malformed = || ParseError::MalformedLine {
            line: line.to_string(),
        };

        let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
        let (code, date, size) = match fields.as_slice() {
            [code, date] => (*code, *date, None),
            [code, date, size] => (*code, *date, Some(*size)),
            _ => return Err(malformed()),
        };
        if code.is_empty() {
            return Err(malformed());
        }

        let ready_date =
            NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| ParseError::MalformedDate {
                value: date.to_string(),
            })?;

        Ok(Self::new(code, ready_date, size))
    }

    /// The code shared by every bottle of the same beer.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The date from which the bottle should be drunk.
    #[must_use]
    pub const fn ready_date(&self) -> NaiveDate {
        self.ready_date
    }

    /// The size class, if one was recorded.
    #[must_use]
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Whether `other` is the same beer in a different, recorded size.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.code == other.code
            && matches!((self.size(), other.size()), (Some(a), Some(b)) if a != b)
    }

    /// Absolute number of days between the two ready dates.
    #[must_use]
    pub fn days_between(&self, other: &Self) -> u64 {
        self.ready_date
            .signed_duration_since(other.ready_date)
            .num_days()
            .unsigned_abs()
    }
}

/// Unvalidated serialized form of a [`Beer`].
#[derive(Deserialize)]
struct BeerFields {
    code: String,
    ready_date: NaiveDate,
    #[serde(default)]
    size: Option<String>,
}

impl TryFrom<BeerFields> for Beer {
    type Error = ParseError;

    fn try_from(fields: BeerFields) -> Result<Self, Self::Error> {
        let is_token = |s: &str| s.trim() == s && !s.contains(DELIMITER);
        let size = fields.size.as_deref().unwrap_or_default();
        if fields.code.is_empty() || !is_token(&fields.code) || !is_token(size) {
            return Err(ParseError::MalformedLine {
                line: format!(
                    "{}{DELIMITER}{}{DELIMITER}{size}",
                    fields.code,
                    fields.ready_date.format(DATE_FORMAT)
                ),
            });
        }
        Ok(Self::new(fields.code, fields.ready_date, Some(size)))
    }
}

impl FromStr for Beer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Beer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}",
            self.code,
            self.ready_date.format(DATE_FORMAT)
        )?;
        if let Some(size) = &self.size {
            write!(f, "{DELIMITER}{size}")?;
        }
        Ok(())
    }
}
