use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, GREGORIAN_SEPARATOR, JALALI_CYCLE_LAST_YEAR, JALALI_CYCLE_YEARS,
    JALALI_DAYS_IN_MONTH, JALALI_EPOCH_YEAR, JALALI_MONTH_NAMES, JALALI_SEPARATOR, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_DAY, PERSIAN_WEEKDAY_NAMES,
};
use crate::convert::{gregorian_to_jalali, jalali_to_gregorian};
use crate::prelude::*;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Which calendar a date token is written in.
///
/// The separator decides: `/` is Jalali, `-` is Gregorian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[display(fmt = "jalali")]
    Jalali,
    #[display(fmt = "gregorian")]
    Gregorian,
}

impl Dialect {
    /// Separator used when writing a date in this dialect
    pub const fn separator(self) -> char {
        match self {
            Self::Jalali => JALALI_SEPARATOR,
            Self::Gregorian => GREGORIAN_SEPARATOR,
        }
    }

    /// Picks the dialect of a token; `/` wins when both separators appear.
    pub fn of_token(token: &str) -> Option<Self> {
        if token.contains(JALALI_SEPARATOR) {
            Some(Self::Jalali)
        } else if token.contains(GREGORIAN_SEPARATOR) {
            Some(Self::Gregorian)
        } else {
            None
        }
    }
}

/// A Gregorian calendar day.
///
/// Fields are public and unchecked so the raw converters can hand back
/// whatever the arithmetic produced; use [`GregorianDate::new_clamped`]
/// for values coming from user text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    pub year:  i32,
    pub month: i32,
    pub day:   i32,
}

/// A Jalali (Solar Hijri) calendar day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}/{:02}/{:02}", year, month, day)]
pub struct JalaliDate {
    pub year:  i32,
    pub month: i32,
    pub day:   i32,
}

impl GregorianDate {
    /// Builds a date from loosely validated parts.
    ///
    /// A day past the end of the month is pulled back to the month's last day
    /// (`2023-02-30` becomes `2023-02-28`).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if month is outside 1..=12 and
    /// `ParseError::InvalidDay` if day is below 1.
    pub fn new_clamped(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        let day = clamp_day(year, month, day, days_in_gregorian_month)?;
        Ok(Self { year, month, day })
    }

    /// Converts to the Jalali calendar
    pub fn to_jalali(self) -> JalaliDate {
        gregorian_to_jalali(self.year, self.month, self.day)
    }

    /// Converts to a `chrono` date.
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` if the parts do not form a real date
    /// or fall outside what `chrono` can represent.
    pub fn to_naive_date(self) -> Result<NaiveDate, ParseError> {
        let out_of_range = || ParseError::OutOfRange {
            year:  self.year,
            month: self.month,
            day:   self.day,
        };
        let month = u32::try_from(self.month).map_err(|_| out_of_range())?;
        let day = u32::try_from(self.day).map_err(|_| out_of_range())?;
        NaiveDate::from_ymd_opt(self.year, month, day).ok_or_else(out_of_range)
    }
}

impl From<NaiveDate> for GregorianDate {
    #[allow(clippy::cast_possible_wrap)]
    fn from(date: NaiveDate) -> Self {
        Self {
            year:  date.year(),
            month: date.month() as i32,
            day:   date.day() as i32,
        }
    }
}

impl JalaliDate {
    /// Builds a date from loosely validated parts.
    ///
    /// A day past the end of the month is pulled back to the month's last day
    /// (`1402/12/30` becomes `1402/12/29`, 1402 not being a leap year).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if month is outside 1..=12 and
    /// `ParseError::InvalidDay` if day is below 1.
    pub fn new_clamped(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        let day = clamp_day(year, month, day, days_in_jalali_month)?;
        Ok(Self { year, month, day })
    }

    /// Converts to the Gregorian calendar
    pub fn to_gregorian(self) -> GregorianDate {
        jalali_to_gregorian(self.year, self.month, self.day)
    }

    /// Converts to a `chrono` date via the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` if the converted date cannot be
    /// represented.
    pub fn to_naive_date(self) -> Result<NaiveDate, ParseError> {
        self.to_gregorian().to_naive_date()
    }

    /// Persian name of the month, `None` for a month outside 1..=12
    pub fn month_name(&self) -> Option<&'static str> {
        let index = usize::try_from(self.month).ok()?.checked_sub(1)?;
        JALALI_MONTH_NAMES.get(index).copied()
    }

    pub const fn is_leap_year(&self) -> bool {
        is_jalali_leap_year(self.year)
    }
}

impl From<NaiveDate> for JalaliDate {
    fn from(date: NaiveDate) -> Self {
        GregorianDate::from(date).to_jalali()
    }
}

fn clamp_day(
    year: i32,
    month: i32,
    day: i32,
    days_in_month: fn(i32, i32) -> i32,
) -> Result<i32, ParseError> {
    if !(1..=MAX_MONTH).contains(&month) {
        return Err(ParseError::InvalidMonth(month));
    }
    if day < MIN_DAY {
        return Err(ParseError::InvalidDay { year, month, day });
    }
    Ok(day.min(days_in_month(year, month)))
}

// Helper functions

/// Table index for a month, pinned to 0..=11
const fn month_index(month: i32) -> usize {
    if month < 1 {
        0
    } else if month > MAX_MONTH {
        (MAX_MONTH - 1) as usize
    } else {
        (month - 1) as usize
    }
}

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_gregorian_month(year: i32, month: i32) -> i32 {
    debug_assert!(month >= 1 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month_index(month)]
    }
}

/// Leap years of the 33 year arithmetic cycle the converters use.
///
/// Within each cycle counted from 979, years 0, 4, .., 28 are leap and year 32
/// is not, so 1399 and 1403 are leap and 1407 is followed by leap year 1408.
pub const fn is_jalali_leap_year(year: i32) -> bool {
    let position = (year as i64 - JALALI_EPOCH_YEAR).rem_euclid(JALALI_CYCLE_YEARS);
    position % LEAP_YEAR_CYCLE as i64 == 0 && position != JALALI_CYCLE_LAST_YEAR
}

pub const fn days_in_jalali_month(year: i32, month: i32) -> i32 {
    debug_assert!(month >= 1 && month <= MAX_MONTH);

    if month == ESFAND && is_jalali_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month_index(month)]
    }
}

/// Persian weekday name (`Weekday::Sat` is `شنبه`)
pub fn persian_weekday_name(weekday: Weekday) -> &'static str {
    // Saturday opens the Persian week
    let index = (weekday.num_days_from_monday() + 2) % 7;
    PERSIAN_WEEKDAY_NAMES[index as usize]
}
