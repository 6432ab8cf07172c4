//! Small text helpers for presenting projects.

use regex::RegexBuilder;

use crate::domain::value_objects::Locale;

const MONTHS_EN: [&str; 12] = [
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

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Spell out a `DD/MM/YYYY` date, e.g. `15 June 2024` or `15 de junho de 2024`.
///
/// Only the shape is checked (three parts, numeric day, month 1–12); the
/// year is copied through as written.
pub fn format_long_date(date: &str, locale: Locale) -> Option<String> {
    let mut parts = date.split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let day: u32 = day.parse().ok()?;
    let month: usize = month.parse().ok()?;
    if !(1..=12).contains(&month) || year.is_empty() {
        return None;
    }

    Some(match locale {
        Locale::En => format!("{day} {} {year}", MONTHS_EN[month - 1]),
        Locale::PtBr => format!("{day} de {} de {year}", MONTHS_PT_BR[month - 1]),
    })
}

/// Escape regex metacharacters so `text` matches literally.
pub fn escape_pattern(text: &str) -> String {
    regex::escape(text)
}

/// Wrap every case-insensitive occurrence of `query` in `open`/`close`.
///
/// An empty query returns the text unchanged.
pub fn highlight(text: &str, query: &str, open: &str, close: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let Ok(pattern) = RegexBuilder::new(&escape_pattern(query))
        .case_insensitive(true)
        .build()
    else {
        return text.to_string();
    };

    pattern
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{open}{}{close}", &caps[0])
        })
        .into_owned()
}
