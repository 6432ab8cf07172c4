//! Pure field rules. Input in, failure kind out; no messages, no mutation.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// `DD/MM/YYYY` with DD in 01–31 and MM in 01–12. ASCII digits only.
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/([0-9]{4})$")
        .expect("date shape pattern compiles")
});

/// Why a field failed. Rendered to text by [`super::MessageCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationFailure {
    ProjectNameRequired,
    ProjectNameTooShort,
    ClientRequired,
    DateRequired,
    DateMalformed,
    DateNonexistent,
    EndBeforeStart,
    StartAfterEnd,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ProjectNameRequired => "project name is missing",
            Self::ProjectNameTooShort => "project name has fewer than two words",
            Self::ClientRequired => "client is missing",
            Self::DateRequired => "date is missing",
            Self::DateMalformed => "expected DD/MM/YYYY",
            Self::DateNonexistent => "no such calendar day",
            Self::EndBeforeStart => "end date precedes start date",
            Self::StartAfterEnd => "start date follows end date",
        };
        f.write_str(text)
    }
}

/// Unicode whitespace plus the byte-order mark, which `char::is_whitespace`
/// leaves out.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn project_name(value: &str) -> Option<ValidationFailure> {
    let value = value.trim_matches(is_blank);
    if value.is_empty() {
        return Some(ValidationFailure::ProjectNameRequired);
    }
    if value.split(is_blank).filter(|word| !word.is_empty()).count() < 2 {
        return Some(ValidationFailure::ProjectNameTooShort);
    }
    None
}

/// Only non-emptiness is checked, whatever the message says about words.
pub fn client(value: &str) -> Option<ValidationFailure> {
    value
        .trim_matches(is_blank)
        .is_empty()
        .then_some(ValidationFailure::ClientRequired)
}

pub fn date(value: &str) -> Option<ValidationFailure> {
    parse_date(value).err()
}

/// Parse `DD/MM/YYYY` into a calendar date.
///
/// The shape check bounds digits syntactically; the calendar check catches
/// `31/04/2024` and `29/02/2023`. Emptiness is tested on the raw text, so a
/// lone space is malformed rather than missing.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::DateRequired);
    }

    let caps = DATE_SHAPE
        .captures(value)
        .ok_or(ValidationFailure::DateMalformed)?;
    let component = |i: usize| caps[i].parse::<u32>();
    let (Ok(day), Ok(month), Ok(year)) = (component(1), component(2), component(3)) else {
        return Err(ValidationFailure::DateMalformed);
    };

    // Two-digit years (0000-0099) do not survive the calendar round-trip.
    if year < 100 {
        return Err(ValidationFailure::DateNonexistent);
    }

    // from_ymd_opt refuses day overflow instead of rolling into the next month.
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(ValidationFailure::DateNonexistent)
}

/// Cross-field rule. `Some` only when both dates parse and start > end.
pub fn date_range(start: &str, end: &str) -> Option<(ValidationFailure, ValidationFailure)> {
    let start = parse_date(start).ok()?;
    let end = parse_date(end).ok()?;
    (start > end).then_some((
        ValidationFailure::StartAfterEnd,
        ValidationFailure::EndBeforeStart,
    ))
}
