mod consts;
mod names;
mod types;

pub mod array;
pub mod id;
pub mod iso;
pub mod math;

pub use consts::*;
pub use names::{Language, MONTH_NAMES, WEEKDAY_NAMES};
pub use types::{Day, Month, Year, is_leap_year};

use chrono::{Datelike, Local, NaiveDate};
use derive_more::Display;
use std::str::FromStr;

/// A calendar date in the proleptic Gregorian calendar.
///
/// Parsed once from the fixed `YYYY-MM-DD` layout and formatted back to it,
/// so all arithmetic runs on validated fields instead of string offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),
    #[display(fmt = "Invalid year: {} (must be 0-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Year {} does not fit YYYY (must be 0-{})", "_0", MAX_YEAR)]
    YearOutOfRange(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", MAX_MONTH_INDEX)]
    InvalidMonthIndex(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Unknown language: {_0}")]
    UnknownLanguage(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Number of days in a month, addressed by zero-based month index (January = 0).
///
/// # Errors
/// Returns `ParseError::InvalidMonthIndex` if `month_index` is > `MAX_MONTH_INDEX`.
pub fn days_in_month(year: u16, month_index: u8) -> Result<u8, ParseError> {
    let month = Month::from_index(month_index)?;
    Ok(types::days_in_month(year, month.get()))
}

impl CalendarDate {
    /// Creates a date from already-typed fields, checking the day against the month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` is past the end of the month.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw numeric fields (month is 1-based).
    ///
    /// # Errors
    /// Returns the `ParseError` of the first field that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Today's date in the host's local timezone.
    ///
    /// # Errors
    /// Returns `ParseError::YearOutOfRange` if the clock reports a year outside `0..=MAX_YEAR`.
    pub fn today() -> Result<Self, ParseError> {
        Self::try_from(local_today())
    }

    /// The first day of the given month
    pub const fn first_of_month(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::first(),
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        types::days_in_month(self.year.get(), self.month.get())
    }

    /// Same year and month, day 01
    pub const fn first_day_of_month(&self) -> Self {
        Self {
            day: Day::first(),
            ..*self
        }
    }

    /// Same year and month, on the last day of the month
    pub const fn last_day_of_month(&self) -> Self {
        Self {
            day: Day::last(self.year, self.month),
            ..*self
        }
    }

    /// Every day of this date's month, ascending from day 1
    pub fn month_days(&self) -> impl Iterator<Item = Day> + use<> {
        Day::month_range(self.year, self.month)
    }

    /// Every date of this date's month, ascending from the first
    pub fn month_dates(&self) -> impl Iterator<Item = Self> + use<> {
        let (year, month) = (self.year, self.month);
        self.month_days().map(move |day| Self { year, month, day })
    }

    /// Name of this date's month in `language`
    pub const fn month_name(&self, language: Language) -> &'static str {
        language.month_names()[self.month.index()]
    }

    /// Day of the week, Monday = 0 through Sunday = 6
    pub const fn weekday_index(&self) -> usize {
        // Zeller's congruence, with January and February counted as months 13
        // and 14 of the previous year.
        let (y, m) = if self.month.get() < 3 {
            (self.year.get() as i32 - 1, self.month.get() as i32 + 12)
        } else {
            (self.year.get() as i32, self.month.get() as i32)
        };
        let d = self.day.get() as i32;

        let h = (d + (13 * (m + 1)) / 5 + y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400))
        .rem_euclid(7);
        // h counts from Saturday = 0
        ((h + 5) % 7) as usize
    }

    /// Name of this date's day of the week in `language`
    pub const fn weekday_name(&self, language: Language) -> &'static str {
        language.weekday_names()[self.weekday_index()]
    }
}

/// Parses the numeric value of an all-digit byte slice.
fn parse_digits(digits: &[u8]) -> u16 {
    digits
        .iter()
        .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
}

/// Checks the fixed `YYYY-MM-DD` shape: ten ASCII bytes, separators at
/// offsets 4 and 7, digits everywhere else.
fn has_date_shape(bytes: &[u8]) -> bool {
    bytes.len() == DATE_STRING_LEN
        && bytes.iter().enumerate().all(|(i, b)| {
            if consts::SEPARATOR_OFFSETS.contains(&i) {
                char::from(*b) == DATE_SEPARATOR
            } else {
                b.is_ascii_digit()
            }
        })
}

/// Raw `(year, month, day)` of a string with the `YYYY-MM-DD` shape.
///
/// Only the layout is checked: `2023-02-31` and `2024-13-01` pass.
pub(crate) fn date_fields(s: &str) -> Result<(u16, u8, u8), ParseError> {
    if s.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let bytes = s.as_bytes();
    if !has_date_shape(bytes) {
        tracing::debug!(input = s, "rejected malformed date string");
        return Err(ParseError::InvalidDateFormat(s.to_owned()));
    }

    // Shape check guarantees: year <= 9999, month and day <= 99
    let year = parse_digits(&bytes[0..4]);
    let month = parse_digits(&bytes[5..7]) as u8;
    let day = parse_digits(&bytes[8..10]) as u8;
    Ok((year, month, day))
}

/// Year and month of a `YYYY-MM-DD` string; the day field is not looked at.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` if the month field is not `01`-`12`.
pub(crate) fn year_month(s: &str) -> Result<(Year, Month), ParseError> {
    let (year, month, _) = date_fields(s)?;
    Ok((Year::new(year)?, Month::new(month)?))
}

fn local_today() -> NaiveDate {
    let today = Local::now().date_naive();
    tracing::trace!(%today, "read local clock");
    today
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = date_fields(s)?;
        Self::from_ymd(year, month, day).inspect_err(|err| {
            tracing::debug!(input = s, %err, "rejected out-of-range date");
        })
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .ok()
            .and_then(|y| Year::new(y).ok())
            .ok_or(ParseError::YearOutOfRange(date.year()))?;
        // chrono guarantees month in 1..=12 and day in 1..=31
        Self::from_ymd(year.get(), date.month() as u8, date.day() as u8)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        let d = date("2024-02-15");
        assert_eq!(d.year().get(), 2024);
        assert_eq!(d.month().get(), 2);
        assert_eq!(d.day().get(), 15);
        assert_eq!(d, CalendarDate::from_ymd(2024, 2, 15).unwrap());
    }

    #[test]
    fn test_parse_year_zero_and_max() {
        assert_eq!(date("0000-02-29").year().get(), 0);
        assert_eq!(date("9999-12-31").year().get(), 9999);
    }

    #[test]
    fn test_parse_rejects_bad_shape() {
        let inputs = [
            "2024-2-15",
            "2024/02/15",
            "24-02-15",
            "2024-02-15 ",
            " 2024-02-15",
            "2024-02-1a",
            "2024-02-150",
            "+024-02-15",
            "2024-0２-15",
        ];
        for input in inputs {
            let result = input.parse::<CalendarDate>();
            assert!(
                matches!(result, Err(ParseError::InvalidDateFormat(_))),
                "{input:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(ParseError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_fields() {
        assert!(matches!(
            "2024-13-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            "2024-00-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            "2023-02-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(matches!(
            "2024-04-00".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["2024-02-15", "0007-01-01", "1999-12-31"] {
            assert_eq!(date(s).to_string(), s);
        }
    }

    #[test]
    fn test_error_display() {
        let err = "2024-13-01".parse::<CalendarDate>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid month: 13 (must be 1-12)");

        let err = "2023-02-29".parse::<CalendarDate>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid day 29 for month 2023-02");
    }

    #[test]
    fn test_days_in_month_by_index() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2023, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);

        for year in [1900, 2000, 2023, 2024] {
            for index in [3, 5, 8, 10] {
                assert_eq!(days_in_month(year, index).unwrap(), 30);
            }
            for index in [0, 2, 4, 6, 7, 9, 11] {
                assert_eq!(days_in_month(year, index).unwrap(), 31);
            }
        }
    }

    #[test]
    fn test_days_in_month_rejects_index_12() {
        assert!(matches!(
            days_in_month(2024, 12),
            Err(ParseError::InvalidMonthIndex(12))
        ));
    }

    #[test]
    fn test_days_in_month_matches_chrono() {
        for year in 1..=MAX_YEAR {
            for index in 0..=MAX_MONTH_INDEX {
                let month = u32::from(index) + 1;
                let first = NaiveDate::from_ymd_opt(i32::from(year), month, 1).unwrap();
                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(i32::from(year) + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(i32::from(year), month + 1, 1)
                }
                .unwrap();
                assert_eq!(
                    i64::from(days_in_month(year, index).unwrap()),
                    (next - first).num_days(),
                    "days in {year:04}-{month:02}"
                );
            }
        }
    }

    #[test]
    fn test_date_fields_check_shape_only() {
        assert_eq!(date_fields("2023-02-31").unwrap(), (2023, 2, 31));
        assert_eq!(date_fields("2024-13-00").unwrap(), (2024, 13, 0));
        assert!(matches!(
            date_fields("2023-02-3"),
            Err(ParseError::InvalidDateFormat(_))
        ));
        assert!(matches!(date_fields(""), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_year_month_ignores_day() {
        let (year, month) = year_month("2023-02-31").unwrap();
        assert_eq!((year.get(), month.get()), (2023, 2));
        assert!(matches!(
            year_month("2024-13-01"),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_first_and_last_day_of_month() {
        assert_eq!(date("2023-07-19").first_day_of_month(), date("2023-07-01"));
        assert_eq!(date("2023-02-10").last_day_of_month(), date("2023-02-28"));
        assert_eq!(date("2024-02-10").last_day_of_month(), date("2024-02-29"));
        assert_eq!(date("2024-12-01").last_day_of_month(), date("2024-12-31"));

        let first = CalendarDate::first_of_month(Year::new(2023).unwrap(), Month::new(6).unwrap());
        assert_eq!(first, date("2023-06-01"));
    }

    #[test]
    fn test_month_days_and_dates() {
        let d = date("2023-04-05");
        let days: Vec<u8> = d.month_days().map(Day::get).collect();
        assert_eq!(days, (1..=30).collect::<Vec<_>>());

        let dates: Vec<CalendarDate> = d.month_dates().collect();
        assert_eq!(dates.len(), 30);
        assert_eq!(dates[0], date("2023-04-01"));
        assert_eq!(dates[29], date("2023-04-30"));
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(date("2024-02-15").month_name(Language::French), "Février");
        assert_eq!(date("2024-12-01").month_name(Language::French), "Décembre");
        assert_eq!(date("2024-02-15").month_name(Language::English), "February");
    }

    #[test]
    fn test_weekday() {
        struct TestCase {
            date: &'static str,
            weekday: &'static str,
        }

        let cases = [
            TestCase {
                date: "2024-02-15",
                weekday: "Jeudi",
            },
            TestCase {
                date: "2023-04-01",
                weekday: "Samedi",
            },
            TestCase {
                date: "2000-01-01",
                weekday: "Samedi",
            },
            TestCase {
                date: "2024-01-01",
                weekday: "Lundi",
            },
            TestCase {
                date: "1970-01-01",
                weekday: "Jeudi",
            },
            TestCase {
                date: "2023-12-31",
                weekday: "Dimanche",
            },
        ];

        for case in &cases {
            assert_eq!(
                date(case.date).weekday_name(Language::French),
                case.weekday,
                "weekday of {}",
                case.date
            );
        }
    }

    #[test]
    fn test_weekday_matches_chrono() {
        let mut d = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2401, 1, 1).unwrap();
        while d < end {
            let ours = CalendarDate::try_from(d).unwrap();
            assert_eq!(
                ours.weekday_index(),
                d.weekday().num_days_from_monday() as usize,
                "weekday of {d}"
            );
            d = d + chrono::Days::new(37);
        }
    }

    #[test]
    fn test_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(CalendarDate::try_from(naive).unwrap(), date("2024-02-29"));

        let far = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        assert_eq!(
            CalendarDate::try_from(far),
            Err(ParseError::YearOutOfRange(10000))
        );

        let before_zero = NaiveDate::from_ymd_opt(-44, 3, 15).unwrap();
        assert_eq!(
            CalendarDate::try_from(before_zero),
            Err(ParseError::YearOutOfRange(-44))
        );
    }

    #[test]
    fn test_new_revalidates_day() {
        let year = Year::new(2023).unwrap();
        let month = Month::new(2).unwrap();
        let day: Day = 30.try_into().unwrap();
        assert!(matches!(
            CalendarDate::new(year, month, day),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_today_is_well_formed() {
        let today = CalendarDate::today().unwrap();
        let s = today.to_string();
        assert_eq!(s.len(), DATE_STRING_LEN);
        assert_eq!(s.parse::<CalendarDate>().unwrap(), today);
    }

    #[test]
    fn test_ordering() {
        assert!(date("2023-12-31") < date("2024-01-01"));
        assert!(date("2024-01-31") < date("2024-02-01"));
        assert!(date("2024-02-01") < date("2024-02-02"));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date("2024-02-15");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-02-15\"");

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        assert!(serde_json::from_str::<CalendarDate>("\"2024-2-15\"").is_err());
    }
}
