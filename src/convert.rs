//! Gregorian <-> Jalali conversion.
//!
//! Both directions count days from 1600-01-01 (Gregorian); Jalali 979/01/01
//! falls 79 days later, on 1600-03-20. The count is decomposed with integer
//! arithmetic only: 400/100/4 year blocks on the Gregorian side, 33/4 year
//! cycles on the Jalali side.

use crate::consts::{
    DAYS_PER_4_YEARS, DAYS_PER_400_YEARS, DAYS_PER_CENTURY, DAYS_PER_JALALI_CYCLE,
    DAYS_PER_LEAP_CENTURY, DAYS_PER_LEAP_YEAR, DAYS_PER_YEAR, EPOCH_OFFSET_DAYS,
    GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH_YEAR, GREGORIAN_SEPARATOR, JALALI_CYCLE_LEAP_DAYS,
    JALALI_CYCLE_YEARS, JALALI_DAYS_IN_MONTH, JALALI_EPOCH_YEAR, LEAP_YEAR_CYCLE, TIME_SEPARATOR,
};
use crate::digits::normalize_digits;
use crate::parse::split_triple;
use crate::prelude::*;
use crate::types::{is_gregorian_leap_year, persian_weekday_name};
use crate::{Dialect, GregorianDate, JalaliDate, ParseError};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Something [`convert_to_jalali`] can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum DateInput<'a> {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// `YYYY-MM-DD`, optionally followed by a `T...` time suffix
    Text(&'a str),
}

/// Converts a Gregorian day to the Jalali calendar.
///
/// No validation happens here: any integers are accepted and the result is
/// deterministic, but only real dates from 1600-03-20 on give meaningful
/// output.
pub fn gregorian_to_jalali(gy: i32, gm: i32, gd: i32) -> JalaliDate {
    let year = i64::from(gy) - GREGORIAN_EPOCH_YEAR;
    let month = i64::from(gm) - 1;
    let day = i64::from(gd) - 1;

    let mut g_day_no = DAYS_PER_YEAR * year + (year + 3) / 4 - (year + 99) / 100 + (year + 399) / 400;
    g_day_no += days_before_month(&GREGORIAN_DAYS_IN_MONTH, month);
    if month > 1 && is_gregorian_leap_year(gy) {
        g_day_no += 1;
    }
    g_day_no += day;

    let mut j_day_no = g_day_no - EPOCH_OFFSET_DAYS;
    let cycles = j_day_no / DAYS_PER_JALALI_CYCLE;
    j_day_no %= DAYS_PER_JALALI_CYCLE;

    let mut jy = JALALI_EPOCH_YEAR + JALALI_CYCLE_YEARS * cycles + 4 * (j_day_no / DAYS_PER_4_YEARS);
    j_day_no %= DAYS_PER_4_YEARS;

    // The first year of each 4 year block carries the leap day
    if j_day_no >= DAYS_PER_LEAP_YEAR {
        jy += (j_day_no - 1) / DAYS_PER_YEAR;
        j_day_no = (j_day_no - 1) % DAYS_PER_YEAR;
    }

    let (month_index, day_of_month) = split_day_of_year(j_day_no, |index| {
        i64::from(JALALI_DAYS_IN_MONTH[index])
    });

    JalaliDate {
        year:  saturate(jy),
        month: saturate(month_index + 1),
        day:   saturate(day_of_month + 1),
    }
}

/// Converts a Jalali day to the Gregorian calendar.
///
/// Exact inverse of [`gregorian_to_jalali`] for real dates.
pub fn jalali_to_gregorian(jy: i32, jm: i32, jd: i32) -> GregorianDate {
    let year = i64::from(jy) - JALALI_EPOCH_YEAR;
    let month = i64::from(jm) - 1;
    let day = i64::from(jd) - 1;

    let leap_years_before =
        year / JALALI_CYCLE_YEARS * JALALI_CYCLE_LEAP_DAYS + (year % JALALI_CYCLE_YEARS + 3) / 4;
    let mut j_day_no = DAYS_PER_YEAR * year + leap_years_before;
    j_day_no += days_before_month(&JALALI_DAYS_IN_MONTH, month);
    j_day_no += day;

    let mut g_day_no = j_day_no + EPOCH_OFFSET_DAYS;
    let mut gy = GREGORIAN_EPOCH_YEAR + 400 * (g_day_no / DAYS_PER_400_YEARS);
    g_day_no %= DAYS_PER_400_YEARS;

    let mut leap = true;
    // Past the first century of the 400 year block: centuries start on a
    // common year, so shift by the skipped leap day before dividing
    if g_day_no >= DAYS_PER_LEAP_CENTURY {
        g_day_no -= 1;
        gy += 100 * (g_day_no / DAYS_PER_CENTURY);
        g_day_no %= DAYS_PER_CENTURY;

        if g_day_no >= DAYS_PER_YEAR {
            g_day_no += 1;
        } else {
            leap = false;
        }
    }

    gy += i64::from(LEAP_YEAR_CYCLE) * (g_day_no / DAYS_PER_4_YEARS);
    g_day_no %= DAYS_PER_4_YEARS;

    if g_day_no >= DAYS_PER_LEAP_YEAR {
        leap = false;
        g_day_no -= 1;
        gy += g_day_no / DAYS_PER_YEAR;
        g_day_no %= DAYS_PER_YEAR;
    }

    let (month_index, day_of_month) = split_day_of_year(g_day_no, |index| {
        let extra = i64::from(index == 1 && leap);
        i64::from(GREGORIAN_DAYS_IN_MONTH[index]) + extra
    });

    GregorianDate {
        year:  saturate(gy),
        month: saturate(month_index + 1),
        day:   saturate(day_of_month + 1),
    }
}

/// Sum of the month lengths preceding a zero-based month
fn days_before_month(table: &[i32; 12], month: i64) -> i64 {
    let months = usize::try_from(month.clamp(0, 12)).unwrap_or_default();
    table.iter().take(months).map(|&days| i64::from(days)).sum()
}

/// Splits a zero-based day of year into a zero-based (month, day)
#[allow(clippy::cast_possible_wrap)]
fn split_day_of_year(mut day_of_year: i64, month_len: impl Fn(usize) -> i64) -> (i64, i64) {
    let mut index = 0;
    while index < 11 && day_of_year >= month_len(index) {
        day_of_year -= month_len(index);
        index += 1;
    }
    (index as i64, day_of_year)
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Formats a Gregorian date or `YYYY-MM-DD[T...]` string as `YYYY/MM/DD` in
/// the Jalali calendar.
///
/// `None` and `""` give `""`. A string that is not three numeric
/// `-`-separated parts with a valid month comes back unchanged. A day past
/// the end of its month is clamped before converting.
pub fn convert_to_jalali(input: Option<DateInput<'_>>) -> String {
    match input {
        None => String::new(),
        Some(DateInput::Date(date)) => JalaliDate::from(date).to_string(),
        Some(DateInput::DateTime(datetime)) => JalaliDate::from(datetime.date()).to_string(),
        Some(DateInput::Text(text)) => convert_text(text, Dialect::Gregorian),
    }
}

/// Formats a `YYYY/MM/DD` (or `YYYY-MM-DD`) Jalali string as a Gregorian
/// `YYYY-MM-DD` string.
///
/// Same fallbacks as [`convert_to_jalali`]: `None`/`""` give `""`,
/// malformed text comes back unchanged.
pub fn convert_to_gregorian(input: Option<&str>) -> String {
    input.map_or_else(String::new, |text| convert_text(text, Dialect::Jalali))
}

fn convert_text(text: &str, source: Dialect) -> String {
    if text.is_empty() {
        return String::new();
    }
    let converted = match source {
        Dialect::Gregorian => gregorian_text_to_jalali(text).map(|date| date.to_string()),
        Dialect::Jalali => jalali_text_to_gregorian(text).map(|date| date.to_string()),
    };
    converted.unwrap_or_else(|error| {
        debug!(input = text, %error, "date text left unconverted");
        text.to_owned()
    })
}

fn gregorian_text_to_jalali(text: &str) -> Result<JalaliDate, ParseError> {
    let normalized = normalize_digits(text);
    let date_part = normalized
        .split_once(TIME_SEPARATOR)
        .map_or(normalized.as_str(), |(date, _time)| date);
    let (year, month, day) = split_triple(date_part, GREGORIAN_SEPARATOR)?;
    Ok(GregorianDate::new_clamped(year, month, day)?.to_jalali())
}

fn jalali_text_to_gregorian(text: &str) -> Result<GregorianDate, ParseError> {
    let normalized = normalize_digits(text);
    let separator = Dialect::of_token(&normalized)
        .ok_or_else(|| ParseError::InvalidFormat(text.to_owned()))?
        .separator();
    let (year, month, day) = split_triple(&normalized, separator)?;
    Ok(JalaliDate::new_clamped(year, month, day)?.to_gregorian())
}

/// Jalali date followed by the Persian weekday name, e.g. `1403/01/01 چهارشنبه`
pub fn format_jalali_with_weekday(date: NaiveDate) -> String {
    format!(
        "{} {}",
        JalaliDate::from(date),
        persian_weekday_name(date.weekday())
    )
}
