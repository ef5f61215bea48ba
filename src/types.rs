use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_MONTH_INDEX, MAX_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A year value guaranteed to fit the four-digit field, `0..=MAX_YEAR`.
/// Year 0 is kept: the calendar is proleptic Gregorian and `0000` is a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(u16);

impl Year {
    /// Creates a new Year, validating that it is <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is > `MAX_YEAR`.
    pub const fn new(value: u16) -> Result<Self, ParseError> {
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

/// Formats as the four-digit, zero-padded `YYYY` field
impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
///
/// The value is 1-based, as carried in a date string. Use [`Month::index`] and
/// [`Month::from_index`] to move to and from the zero-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Month from a zero-based index (January = 0)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthIndex` if the index is > `MAX_MONTH_INDEX`.
    pub fn from_index(index: u8) -> Result<Self, ParseError> {
        if index > MAX_MONTH_INDEX {
            return Err(ParseError::InvalidMonthIndex(index));
        }
        Self::new(index + 1)
    }

    /// Returns the month value as u8 (January = 1)
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the zero-based month index (January = 0)
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

/// Formats as the two-digit, zero-padded `MM` field
impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0.get())
    }
}

/// A day-of-month value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and exists in the given month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid());
        }

        Ok(Self(non_zero))
    }

    /// The first day of any month
    pub const fn first() -> Self {
        Self(NonZeroU8::MIN)
    }

    /// The last day of the given month
    pub const fn last(year: Year, month: Month) -> Self {
        match NonZeroU8::new(days_in_month(year.get(), month.get())) {
            Some(day) => Self(day),
            // every month has at least 28 days
            None => unreachable!(),
        }
    }

    /// Every day of the given month, ascending from the first
    pub fn month_range(year: Year, month: Month) -> impl Iterator<Item = Self> + use<> {
        let last = Self::last(year, month);
        std::iter::successors(Some(Self::first()), move |day| {
            (*day < last).then(|| day.0.checked_add(1)).flatten().map(Self)
        })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the upper bound of the longest month applies
        let non_zero = NonZeroU8::new(value)
            .filter(|d| d.get() <= DAYS_IN_MONTH[1])
            .ok_or(ParseError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

/// Formats as the two-digit, zero-padded `DD` field
impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0.get())
    }
}

// Helper functions

/// Gregorian leap-year rule, applied proleptically to every year.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
