//! Shorthand constructors for tests.

use chrono::NaiveDate;

use crate::{GregorianDate, JalaliDate};

pub const fn gregorian(year: i32, month: i32, day: i32) -> GregorianDate {
    GregorianDate { year, month, day }
}

pub const fn jalali(year: i32, month: i32, day: i32) -> JalaliDate {
    JalaliDate { year, month, day }
}

#[allow(clippy::expect_used)]
pub fn naive(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
}
