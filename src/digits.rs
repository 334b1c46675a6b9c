//! Digit script handling for dates typed or rendered in Persian.

use crate::consts::{ARABIC_INDIC_ZERO, INVISIBLE_MARKS, PERSIAN_ZERO};

/// Rewrites Persian (`۰`-`۹`) and Arabic-Indic (`٠`-`٩`) digits as Latin
/// digits and drops zero-width marks and the byte order mark.
///
/// Total and idempotent; everything else passes through untouched.
pub fn normalize_digits(s: &str) -> String {
    s.chars()
        .filter(|c| !INVISIBLE_MARKS.contains(c))
        .map(latin_digit)
        .collect()
}

/// Rewrites Latin digits as Persian digits for display
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|digit| char::from_u32(PERSIAN_ZERO as u32 + digit))
                .unwrap_or(c)
        })
        .collect()
}

fn latin_digit(c: char) -> char {
    let value = match c {
        '\u{06F0}'..='\u{06F9}' => c as u32 - PERSIAN_ZERO as u32,
        '\u{0660}'..='\u{0669}' => c as u32 - ARABIC_INDIC_ZERO as u32,
        _ => return c,
    };
    char::from_digit(value, 10).unwrap_or(c)
}
