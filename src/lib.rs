//! Gregorian and Jalali (Solar Hijri) dates as they show up in Persian
//! business data.
//!
//! Three pieces:
//! - exact day-for-day conversion between the two calendars
//!   ([`gregorian_to_jalali`], [`jalali_to_gregorian`]) with display
//!   wrappers that never fail ([`convert_to_jalali`], [`convert_to_gregorian`]);
//! - a lenient parser that finds the first date in free text, whatever its
//!   calendar or digit script ([`parse_date_flexible`]);
//! - inclusive day-granular range filtering over mixed-calendar data
//!   ([`is_date_in_range`], [`is_either_date_in_range`], [`DateRangeFilter`]).
//!
//! A token written with `/` is Jalali, one written with `-` is Gregorian.

mod consts;
mod convert;
mod digits;
mod parse;
mod prelude;
mod range;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use convert::{
    DateInput, convert_to_gregorian, convert_to_jalali, format_jalali_with_weekday,
    gregorian_to_jalali, jalali_to_gregorian,
};
pub use digits::{normalize_digits, to_persian_digits};
pub use parse::{DateToken, extract_date_token, parse_date_flexible, parse_date_input};
pub use range::{
    DateBounds, DateRangeFilter, RangeError, end_of_day, is_date_in_range,
    is_either_date_in_range, start_of_day,
};
pub use types::{
    Dialect, GregorianDate, JalaliDate, days_in_gregorian_month, days_in_jalali_month,
    is_gregorian_leap_year, is_jalali_leap_year, persian_weekday_name,
};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "No date found in {_0:?}")]
    NoDateToken(String),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },
    /// The date is well formed but outside what `chrono` can represent.
    #[display(fmt = "Date {year}-{month:02}-{day:02} is out of range")]
    OutOfRange { year: i32, month: i32, day: i32 },
}

impl std::error::Error for ParseError {}
