use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{EMPTY_DATE_PLACEHOLDER, ParseError, parse::DateToken};

/// From/to filter as the UI submits it. Either side may be Jalali or
/// Gregorian text; `None` and `""` both mean "no bound".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeFilter {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to:   Option<String>,
}

/// Filter bounds parsed to calendar days (inclusive on both ends).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateBounds {
    from: Option<NaiveDate>,
    to:   Option<NaiveDate>,
}

/// Error type for date range filtering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// A filter bound was supplied but holds no usable date.
    #[error("Unparseable {bound} bound {value:?}: {source}")]
    UnparseableBound {
        bound:  &'static str,
        value:  String,
        #[source]
        source: ParseError,
    },

    /// Error parsing the date being checked.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// Midnight at the start of `date`
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Last millisecond of `date`
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(date))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl DateRangeFilter {
    pub fn new(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.map(str::to_owned),
            to:   to.map(str::to_owned),
        }
    }

    /// Whether either bound is set
    pub fn is_active(&self) -> bool {
        present(self.from.as_deref()).is_some() || present(self.to.as_deref()).is_some()
    }

    /// Parses both bounds.
    ///
    /// # Errors
    /// Returns `RangeError::UnparseableBound` if a bound is set but holds no
    /// usable date.
    pub fn bounds(&self) -> Result<DateBounds, RangeError> {
        DateBounds::try_from(self)
    }

    /// Whether `date` falls within the filter.
    ///
    /// An inactive filter matches everything, including a missing date.
    /// Otherwise a missing, `"-"` or unreadable date does not match, and
    /// neither does anything when a set bound cannot be read.
    pub fn matches(&self, date: Option<&str>) -> bool {
        self.matches_any([date])
    }

    /// Whether at least one of a row's two dates falls within the filter.
    pub fn matches_either(&self, created: Option<&str>, delivery: Option<&str>) -> bool {
        self.matches_any([created, delivery])
    }

    fn matches_any<'a>(&self, dates: impl IntoIterator<Item = Option<&'a str>>) -> bool {
        if !self.is_active() {
            return true;
        }
        let bounds = match self.bounds() {
            Ok(bounds) => bounds,
            Err(error) => {
                debug!(%error, "date filter rejects every row");
                return false;
            },
        };
        dates
            .into_iter()
            .filter_map(|date| present(date).filter(|d| *d != EMPTY_DATE_PLACEHOLDER))
            .any(|date| match bounds.check(date) {
                Ok(in_range) => in_range,
                Err(error) => {
                    debug!(input = date, %error, "date excluded from range");
                    false
                },
            })
    }
}

impl DateBounds {
    pub const fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// First day in range, if bounded below
    pub const fn start(&self) -> Option<NaiveDate> {
        self.from
    }

    pub const fn end(&self) -> Option<NaiveDate> {
        self.to
    }

    pub const fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Checks a day against the bounds, inclusive of both boundary days.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let instant = start_of_day(date);
        self.from.is_none_or(|from| instant >= start_of_day(from))
            && self.to.is_none_or(|to| instant <= end_of_day(to))
    }

    /// Checks already-parsed row dates; a row matches if either date does.
    ///
    /// With no bounds every row matches, dated or not.
    pub fn matches_either(&self, created: Option<NaiveDate>, delivery: Option<NaiveDate>) -> bool {
        if !self.is_active() {
            return true;
        }
        [created, delivery]
            .into_iter()
            .flatten()
            .any(|date| self.contains(date))
    }

    /// Parses `date` (either dialect) and checks it.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` if `date` holds no usable date while
    /// a bound is set.
    pub fn check(&self, date: &str) -> Result<bool, RangeError> {
        if !self.is_active() {
            return Ok(true);
        }
        let date = DateToken::find(date)?.to_naive_date()?;
        Ok(self.contains(date))
    }
}

impl TryFrom<&DateRangeFilter> for DateBounds {
    type Error = RangeError;

    fn try_from(filter: &DateRangeFilter) -> Result<Self, Self::Error> {
        Ok(Self {
            from: parse_bound("from", filter.from.as_deref())?,
            to:   parse_bound("to", filter.to.as_deref())?,
        })
    }
}

fn parse_bound(bound: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, RangeError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };
    DateToken::find(value)
        .and_then(DateToken::to_naive_date)
        .map(Some)
        .map_err(|source| RangeError::UnparseableBound {
            bound,
            value: value.to_owned(),
            source,
        })
}

/// Whether `date_str` falls within `from_date..=to_date` at day granularity.
///
/// With neither bound set everything is in range. Otherwise an empty, `"-"`
/// or unreadable date is out, and a bound that is set but unreadable puts
/// everything out.
pub fn is_date_in_range(date_str: Option<&str>, from_date: Option<&str>, to_date: Option<&str>) -> bool {
    DateRangeFilter::new(from_date, to_date).matches(date_str)
}

/// Whether the created or the delivery date falls within the range; one
/// missing date does not stop the other from matching.
pub fn is_either_date_in_range(
    created_date: Option<&str>,
    delivery_date: Option<&str>,
    from_date: Option<&str>,
    to_date: Option<&str>,
) -> bool {
    DateRangeFilter::new(from_date, to_date).matches_either(created_date, delivery_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::naive;

    const FROM: Option<&str> = Some("2024-01-01");
    const TO: Option<&str> = Some("2024-01-31");

    #[test]
    fn test_day_boundaries() {
        let day = naive(2024, 1, 15);
        assert_eq!(start_of_day(day).to_string(), "2024-01-15 00:00:00");
        assert_eq!(end_of_day(day).to_string(), "2024-01-15 23:59:59.999");
    }

    #[test]
    fn test_inclusive_bounds() {
        struct TestCase {
            date:        &'static str,
            expected:    bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        "2024-01-01",
                expected:    true,
                description: "first day of range",
            },
            TestCase {
                date:        "2024-01-31",
                expected:    true,
                description: "last day of range",
            },
            TestCase {
                date:        "2024-01-15",
                expected:    true,
                description: "middle of range",
            },
            TestCase {
                date:        "2023-12-31",
                expected:    false,
                description: "day before range",
            },
            TestCase {
                date:        "2024-02-01",
                expected:    false,
                description: "day after range",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_date_in_range(Some(case.date), FROM, TO),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_open_ended_bounds() {
        assert!(is_date_in_range(Some("2030-06-01"), FROM, None));
        assert!(!is_date_in_range(Some("2023-06-01"), FROM, None));
        assert!(is_date_in_range(Some("1990-06-01"), None, TO));
        assert!(!is_date_in_range(Some("2024-02-01"), None, TO));
        assert!(is_date_in_range(Some("2024-01-31"), Some(""), TO));
    }

    #[test]
    fn test_no_filter_passes_everything() {
        assert!(is_date_in_range(Some("2024-01-15"), Some(""), Some("")));
        assert!(is_date_in_range(Some("garbage"), None, None));
        assert!(is_date_in_range(Some(""), Some(""), Some("")));
        assert!(is_date_in_range(None, None, None));
    }

    #[test]
    fn test_missing_date_with_active_filter() {
        assert!(!is_date_in_range(None, FROM, TO));
        assert!(!is_date_in_range(Some(""), FROM, TO));
        assert!(!is_date_in_range(Some("-"), FROM, TO));
        assert!(!is_date_in_range(Some("unknown"), FROM, TO));
    }

    #[test]
    fn test_unreadable_bound_excludes() {
        assert!(!is_date_in_range(Some("2024-01-15"), Some("soon"), TO));
        assert!(!is_date_in_range(Some("2024-01-15"), FROM, Some("2024-13-01")));
        assert!(!is_either_date_in_range(
            Some("2024-01-15"),
            Some("2024-01-16"),
            Some(" "),
            None
        ));
    }

    #[test]
    fn test_mixed_dialects() {
        // 1402/10/25 is 2024-01-15
        assert!(is_date_in_range(Some("1402/10/25"), FROM, TO));
        assert!(!is_date_in_range(Some("1402/10/25"), Some("2024-01-16"), TO));
        assert!(is_date_in_range(Some("1402/10/25"), Some("2024-01-15"), Some("2024-01-15")));

        // 1402/10/11..1402/11/11 is 2024-01-01..2024-01-31
        let from = Some("1402/10/11");
        let to = Some("1402/11/11");
        assert!(is_date_in_range(Some("2024-01-01"), from, to));
        assert!(is_date_in_range(Some("2024-01-31"), from, to));
        assert!(!is_date_in_range(Some("2024-02-01"), from, to));
        assert!(is_date_in_range(Some("۱۴۰۲/۱۰/۲۵ دوشنبه"), from, to));
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        assert!(!is_date_in_range(Some("2024-01-15"), TO, FROM));
    }

    #[test]
    fn test_either_date() {
        assert!(is_either_date_in_range(Some("2024-01-15"), None, FROM, TO));
        assert!(is_either_date_in_range(None, Some("2024-01-15"), FROM, TO));
        assert!(is_either_date_in_range(Some("2023-05-01"), Some("1402/10/25"), FROM, TO));
        assert!(!is_either_date_in_range(Some("2023-05-01"), Some("2024-05-01"), FROM, TO));
        assert!(!is_either_date_in_range(None, None, FROM, TO));
        assert!(!is_either_date_in_range(Some("-"), Some(""), FROM, TO));
    }

    #[test]
    fn test_either_date_without_filter() {
        assert!(is_either_date_in_range(None, None, None, None));
        assert!(is_either_date_in_range(Some("x"), Some("y"), Some(""), Some("")));
    }

    #[test]
    fn test_filter_is_active() {
        assert!(!DateRangeFilter::default().is_active());
        assert!(!DateRangeFilter::new(Some(""), Some("")).is_active());
        assert!(DateRangeFilter::new(Some("1403/01/01"), None).is_active());
        assert!(DateRangeFilter::new(None, Some(" ")).is_active());
    }

    #[test]
    fn test_bounds_parse() {
        let filter = DateRangeFilter::new(Some("1403/01/01"), Some("2024-03-31"));
        let bounds = filter.bounds().unwrap();
        assert_eq!(bounds.start(), Some(naive(2024, 3, 20)));
        assert_eq!(bounds.end(), Some(naive(2024, 3, 31)));
    }

    #[test]
    fn test_bounds_parse_error() {
        let filter = DateRangeFilter::new(Some("yesterday"), None);
        let err = filter.bounds().unwrap_err();
        assert!(matches!(
            err,
            RangeError::UnparseableBound {
                bound: "from",
                ..
            }
        ));
        assert!(err.to_string().contains("Unparseable from bound \"yesterday\""));
    }

    #[test]
    fn test_bounds_check_error() {
        let bounds = DateBounds::new(Some(naive(2024, 1, 1)), None);
        let err = bounds.check("n/a").unwrap_err();
        assert!(matches!(err, RangeError::ParseError(ParseError::NoDateToken(_))));

        assert!(DateBounds::default().check("n/a").unwrap());
    }

    #[test]
    fn test_preparsed_rows() {
        let bounds = DateBounds::new(Some(naive(2024, 1, 1)), Some(naive(2024, 1, 31)));
        assert!(bounds.contains(naive(2024, 1, 1)));
        assert!(bounds.contains(naive(2024, 1, 31)));
        assert!(!bounds.contains(naive(2024, 2, 1)));

        assert!(bounds.matches_either(Some(naive(2024, 1, 10)), None));
        assert!(bounds.matches_either(None, Some(naive(2024, 1, 10))));
        assert!(!bounds.matches_either(None, None));
        assert!(DateBounds::default().matches_either(None, None));
    }

    #[test]
    fn test_preparsed_agrees_with_text() {
        let filter = DateRangeFilter::new(Some("1402/10/11"), Some("2024-01-31"));
        let bounds = filter.bounds().unwrap();
        for (created, delivery) in [
            (Some("2024-01-05"), None),
            (None, Some("1402/11/12")),
            (Some("2023-12-31"), Some("2024-02-01")),
            (Some("1402/11/11"), Some("-")),
        ] {
            let parsed = |s: Option<&str>| s.and_then(crate::parse_date_flexible);
            assert_eq!(
                filter.matches_either(created, delivery),
                bounds.matches_either(parsed(created), parsed(delivery)),
                "{created:?} / {delivery:?}"
            );
        }
    }

    #[test]
    fn test_filter_serde() {
        let filter: DateRangeFilter = serde_json::from_str(r#"{"from":"1403/01/01"}"#).unwrap();
        assert_eq!(filter, DateRangeFilter::new(Some("1403/01/01"), None));
        assert!(filter.matches(Some("2024-03-20")));
        assert!(!filter.matches(Some("2024-03-19")));

        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"{"from":"1403/01/01","to":null}"#);

        let empty: DateRangeFilter = serde_json::from_str("{}").unwrap();
        assert!(!empty.is_active());
    }
}
