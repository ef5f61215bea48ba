//! Month and weekday names.
//!
//! Tables are ordered by zero-based index: months start at January, weekdays
//! start at Monday.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Month names in the canonical language (French)
pub const MONTH_NAMES: [&str; 12] = MONTH_NAMES_FR;

/// Weekday names in the canonical language (French), Monday first
pub const WEEKDAY_NAMES: [&str; 7] = WEEKDAY_NAMES_FR;

const MONTH_NAMES_FR: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

const WEEKDAY_NAMES_FR: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

const MONTH_NAMES_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Language of the month and weekday name tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[display(fmt = "fr")]
    #[serde(rename = "fr")]
    French,
    #[display(fmt = "en")]
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub const fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Self::French => &MONTH_NAMES_FR,
            Self::English => &MONTH_NAMES_EN,
        }
    }

    pub const fn weekday_names(self) -> &'static [&'static str; 7] {
        match self {
            Self::French => &WEEKDAY_NAMES_FR,
            Self::English => &WEEKDAY_NAMES_EN,
        }
    }
}

/// Accepts a bare language code or a language-region tag (`fr`, `fr-FR`, `en-US`).
impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let code = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match code.as_str() {
            "fr" => Ok(Self::French),
            "en" => Ok(Self::English),
            "" => Err(ParseError::EmptyInput),
            _ => Err(ParseError::UnknownLanguage(trimmed.to_owned())),
        }
    }
}
