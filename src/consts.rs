/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: i32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: i32 = 1;

/// Month number for February
pub const FEBRUARY: i32 = 2;

/// Month number for Esfand, the only Jalali month whose length varies
pub const ESFAND: i32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: i32 = 30;

/// Gregorian month lengths (index 0 is January), February shows the non-leap length
pub const GREGORIAN_DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Jalali month lengths (index 0 is Farvardin), Esfand shows the non-leap length
pub const JALALI_DAYS_IN_MONTH: [i32; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Gregorian year the day counting starts from
pub(crate) const GREGORIAN_EPOCH_YEAR: i64 = 1600;
/// Jalali year that begins inside `GREGORIAN_EPOCH_YEAR`
pub(crate) const JALALI_EPOCH_YEAR: i64 = 979;
/// Days between 1600-01-01 and 979-01-01 (Jalali)
pub(crate) const EPOCH_OFFSET_DAYS: i64 = 79;

/// Days in a 400 year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a Gregorian century whose first year is a leap year
pub(crate) const DAYS_PER_LEAP_CENTURY: i64 = 36_525;
/// Days in a Gregorian century whose first year is not a leap year
pub(crate) const DAYS_PER_CENTURY: i64 = 36_524;
/// Days in a 4 year block (one leap year)
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;
/// Days in a leap year
pub(crate) const DAYS_PER_LEAP_YEAR: i64 = 366;

/// Days in the 33 year Jalali grand cycle (8 leap years)
pub(crate) const DAYS_PER_JALALI_CYCLE: i64 = 12_053;
/// Years in the Jalali grand cycle
pub(crate) const JALALI_CYCLE_YEARS: i64 = 33;
/// Leap days in each Jalali grand cycle
pub(crate) const JALALI_CYCLE_LEAP_DAYS: i64 = 8;
/// Last year of a grand cycle; it closes a 4 year block but has no leap day
pub(crate) const JALALI_CYCLE_LAST_YEAR: i64 = 32;

/// Gregorian date separator (ISO 8601)
pub const GREGORIAN_SEPARATOR: char = '-';
/// Jalali date separator
pub const JALALI_SEPARATOR: char = '/';
/// Separates the date from a time suffix in ISO datetimes
pub const TIME_SEPARATOR: char = 'T';
/// Placeholder the UI renders for an unset date
pub const EMPTY_DATE_PLACEHOLDER: &str = "-";

/// Extended Arabic-Indic (Persian) digit zero, U+06F0
pub const PERSIAN_ZERO: char = '\u{06F0}';
/// Arabic-Indic digit zero, U+0660
pub const ARABIC_INDIC_ZERO: char = '\u{0660}';

/// Invisible marks stripped before parsing: zero-width space/non-joiner/joiner,
/// LTR/RTL marks and the byte order mark
pub const INVISIBLE_MARKS: [char; 6] = [
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{200F}', '\u{FEFF}',
];

/// Jalali month names, Farvardin first
pub const JALALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian weekday names, Saturday first (the Iranian week start)
pub const PERSIAN_WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];
