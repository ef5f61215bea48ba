//! Operations on `YYYY-MM-DD` date strings.
//!
//! Input is checked against the fixed layout only, and rejected with
//! [`ParseError::InvalidDateFormat`] when it does not match. Beyond that,
//! each function reads just the fields it needs: `2023-02-31` still has a
//! year, a month and a last day of month. The month must be `01`-`12` where
//! it is used to look something up.

use chrono::Datelike;

use crate::{CalendarDate, Language, ParseError, date_fields, year_month};

/// Today's date in the host's local timezone, as `YYYY-MM-DD`.
pub fn current_local_date() -> String {
    let today = crate::local_today();
    format!("{:04}-{:02}-{:02}", today.year(), today.month(), today.day())
}

/// The four-digit year field (`YYYY`)
///
/// # Errors
/// Returns `ParseError` if `date` does not have the `YYYY-MM-DD` shape.
pub fn year(date: &str) -> Result<String, ParseError> {
    date_fields(date)?;
    Ok(date[0..4].to_owned())
}

/// The two-digit, 1-based month field (`MM`), as written
///
/// # Errors
/// Returns `ParseError` if `date` does not have the `YYYY-MM-DD` shape.
pub fn month(date: &str) -> Result<String, ParseError> {
    date_fields(date)?;
    Ok(date[5..7].to_owned())
}

/// The two-digit day field (`DD`), as written
///
/// # Errors
/// Returns `ParseError` if `date` does not have the `YYYY-MM-DD` shape.
pub fn day(date: &str) -> Result<String, ParseError> {
    date_fields(date)?;
    Ok(date[8..10].to_owned())
}

/// Same year and month, with the day field set to `01`
///
/// # Errors
/// Returns `ParseError` if `date` does not have the `YYYY-MM-DD` shape.
pub fn first_day_of_month(date: &str) -> Result<String, ParseError> {
    date_fields(date)?;
    Ok(format!("{}01", &date[..8]))
}

/// Same year and month, with the day field set to the month's last day
///
/// # Errors
/// Returns `ParseError` if `date` does not have the `YYYY-MM-DD` shape or its
/// month is not `01`-`12`.
pub fn last_day_of_month(date: &str) -> Result<String, ParseError> {
    let (year, month) = year_month(date)?;
    Ok(CalendarDate::first_of_month(year, month)
        .last_day_of_month()
        .to_string())
}

/// Zero-padded day numbers of the month, `"01"` through the last day.
///
/// # Errors
/// Returns `ParseError` if `date` does not have the `YYYY-MM-DD` shape or its
/// month is not `01`-`12`.
pub fn month_day_numbers(date: &str) -> Result<Vec<String>, ParseError> {
    let (year, month) = year_month(date)?;
    Ok(CalendarDate::first_of_month(year, month)
        .month_days()
        .map(|day| day.to_string())
        .collect())
}

/// Every date of the month, first to last.
///
/// # Errors
/// Returns `ParseError` if `date` does not have the `YYYY-MM-DD` shape or its
/// month is not `01`-`12`.
pub fn month_dates(date: &str) -> Result<Vec<String>, ParseError> {
    let (year, month) = year_month(date)?;
    Ok(CalendarDate::first_of_month(year, month)
        .month_dates()
        .map(|d| d.to_string())
        .collect())
}

/// Name of the month in the canonical language.
///
/// # Errors
/// Returns `ParseError` if `date` does not have the `YYYY-MM-DD` shape or its
/// month is not `01`-`12`.
pub fn month_name(date: &str) -> Result<&'static str, ParseError> {
    month_name_in(date, Language::default())
}

/// Name of the month in `language`.
///
/// # Errors
/// Returns `ParseError` if `date` does not have the `YYYY-MM-DD` shape or its
/// month is not `01`-`12`.
pub fn month_name_in(date: &str, language: Language) -> Result<&'static str, ParseError> {
    let (_, month) = year_month(date)?;
    Ok(language.month_names()[month.index()])
}

/// Name of the day of the week in the canonical language.
///
/// The weekday depends on the day, so unlike the month helpers this one needs
/// a date that exists in the calendar.
///
/// # Errors
/// Returns `ParseError` if `date` is not a valid `YYYY-MM-DD` date.
pub fn weekday_name(date: &str) -> Result<&'static str, ParseError> {
    weekday_name_in(date, Language::default())
}

/// Name of the day of the week in `language`.
///
/// # Errors
/// Returns `ParseError` if `date` is not a valid `YYYY-MM-DD` date.
pub fn weekday_name_in(date: &str, language: Language) -> Result<&'static str, ParseError> {
    Ok(date.parse::<CalendarDate>()?.weekday_name(language))
}
