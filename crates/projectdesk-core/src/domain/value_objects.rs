//! Domain value objects: Locale and ProjectDate.
//!
//! These are pure value types with equality-by-value and no identity.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::validation::rules;

// ── Locale ───────────────────────────────────────────────────────────────────

/// Language/region used for user-facing messages and long-form dates.
///
/// The date *input* format is `DD/MM/YYYY` regardless of locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-br")]
    PtBr,
}

impl Locale {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::PtBr => "pt-br",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "pt" | "pt-br" => Ok(Self::PtBr),
            _ => Err(DomainError::UnknownLocale(s.to_string())),
        }
    }
}

// ── ProjectDate ──────────────────────────────────────────────────────────────

/// A calendar date that was entered as `DD/MM/YYYY`.
///
/// Ordering is calendar ordering, not string ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectDate(NaiveDate);

impl ProjectDate {
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl FromStr for ProjectDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        rules::parse_date(s)
            .map(Self)
            .map_err(|failure| DomainError::InvalidDate {
                value: s.to_string(),
                failure,
            })
    }
}

impl fmt::Display for ProjectDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y"))
    }
}
