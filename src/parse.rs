use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Dialect, GregorianDate, JalaliDate, ParseError, digits::normalize_digits};

/// First date-like run in free text: 3-4 digit year, then 1-2 digit month and day.
static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{3,4}[/-][0-9]{1,2}[/-][0-9]{1,2}").expect("date token regex must compile")
});

/// The same shape, but nothing else may surround it.
static WHOLE_DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3,4}[/-][0-9]{1,2}[/-][0-9]{1,2}$").expect("date token regex must compile")
});

/// A year/month/day triple as written, tagged with the calendar its separator
/// implies. Nothing is validated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateToken {
    pub year:    i32,
    pub month:   i32,
    pub day:     i32,
    pub dialect: Dialect,
}

impl DateToken {
    /// Finds the first date token anywhere in `s`.
    ///
    /// Digits may be Latin, Persian or Arabic-Indic; text around the token
    /// (a weekday name, a time, a label) is ignored.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank input,
    /// `ParseError::NoDateToken` when nothing date-like is present and
    /// `ParseError::InvalidFormat` when a matched token does not split into
    /// three numbers.
    pub fn find(s: &str) -> Result<Self, ParseError> {
        let normalized = normalize_digits(s);
        if normalized.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let found = DATE_TOKEN
            .find(&normalized)
            .ok_or_else(|| ParseError::NoDateToken(s.to_owned()))?;
        trace!(input = s, token = found.as_str(), "date token found");
        Self::from_token_text(found.as_str())
    }

    fn from_token_text(token: &str) -> Result<Self, ParseError> {
        let dialect =
            Dialect::of_token(token).ok_or_else(|| ParseError::InvalidFormat(token.to_owned()))?;
        let (year, month, day) = split_triple(token, dialect.separator())?;
        Ok(Self {
            year,
            month,
            day,
            dialect,
        })
    }

    /// The day in the Gregorian calendar, converting Jalali tokens.
    ///
    /// A day past the end of its month is clamped to the month's last day.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` when the
    /// month is outside 1..=12 or the day is 0.
    pub fn to_gregorian(self) -> Result<GregorianDate, ParseError> {
        match self.dialect {
            Dialect::Jalali => {
                Ok(JalaliDate::new_clamped(self.year, self.month, self.day)?.to_gregorian())
            },
            Dialect::Gregorian => GregorianDate::new_clamped(self.year, self.month, self.day),
        }
    }

    /// # Errors
    /// Everything [`DateToken::to_gregorian`] rejects, plus
    /// `ParseError::OutOfRange` if `chrono` cannot hold the date.
    pub fn to_naive_date(self) -> Result<NaiveDate, ParseError> {
        self.to_gregorian()?.to_naive_date()
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.dialect.separator();
        write!(f, "{}{sep}{:02}{sep}{:02}", self.year, self.month, self.day)
    }
}

/// Strict form: the whole (trimmed) string must be one date token.
impl FromStr for DateToken {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_digits(s);
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if !WHOLE_DATE_TOKEN.is_match(trimmed) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        Self::from_token_text(trimmed)
    }
}

/// Splits `text` on `separator` into exactly three integers
pub(crate) fn split_triple(text: &str, separator: char) -> Result<(i32, i32, i32), ParseError> {
    let mut parts = text.split(separator).map(str::trim);
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseError::InvalidFormat(text.to_owned()));
    };
    Ok((parse_i32(year)?, parse_i32(month)?, parse_i32(day)?))
}

/// Helper to parse i32 with better error messages
fn parse_i32(s: &str) -> Result<i32, ParseError> {
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// First date token in `s`, or `None` if there is none.
pub fn extract_date_token(s: &str) -> Option<DateToken> {
    DateToken::find(s).ok()
}

/// Reads the first date token in `s` as a calendar day.
///
/// `/` tokens are Jalali and get converted, `-` tokens are Gregorian.
/// Returns `None` when no token is found or it does not form a date.
pub fn parse_date_flexible(s: &str) -> Option<NaiveDate> {
    match DateToken::find(s).and_then(DateToken::to_naive_date) {
        Ok(date) => Some(date),
        Err(error) => {
            debug!(input = s, %error, "no usable date");
            None
        },
    }
}

/// Parses form input that must be exactly `YYYY/MM/DD` (Jalali) or
/// `YYYY-MM-DD` (Gregorian).
///
/// # Errors
/// Returns `ParseError` if the input is blank, has anything besides the
/// date, or does not form a date.
pub fn parse_date_input(s: &str) -> Result<NaiveDate, ParseError> {
    s.parse::<DateToken>()?.to_naive_date()
}
