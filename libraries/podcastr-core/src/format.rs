//! Display formatting for episode durations and publication dates
//!
//! The page layer shows durations as `HH:MM:SS` and dates as `d MMM yy`
//! (`8 jan 21`). Playback never recomputes these strings; they travel on
//! [`Episode`](crate::Episode) as optional display fields.

use crate::error::{CoreError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Language used for month abbreviations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese (`jan`, `fev`, `mar`, ...)
    #[default]
    #[serde(rename = "pt-BR", alias = "pt_br", alias = "pt-br")]
    PtBr,

    /// English (`Jan`, `Feb`, `Mar`, ...)
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// Abbreviated month name for a 1-based month number
    pub fn month_abbreviation(self, month: u32) -> &'static str {
        const PT_BR: [&str; 12] = [
            "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
        ];
        const EN: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        let index = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::PtBr => PT_BR[index],
            Locale::En => EN[index],
        }
    }

    /// HTML `lang` attribute value
    pub fn language_tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }
}

/// Format a duration in seconds as `HH:MM:SS`
///
/// Hours are not wrapped, so a 25-hour episode renders as `25:00:00`.
pub fn duration_to_time_string(duration_secs: u64) -> String {
    let hours = duration_secs / 3600;
    let minutes = (duration_secs % 3600) / 60;
    let seconds = duration_secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parse an API publication timestamp into a calendar date
///
/// Accepts RFC 3339 (`2021-01-22T10:00:00Z`), ISO date-times with either a
/// `T` or a space delimiter and no offset, and bare dates. Offsets are kept
/// as written; the date is the one the publisher saw.
pub fn parse_published_at(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.date_naive());
    }

    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Ok(datetime.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| CoreError::InvalidDate(raw.to_string()))
}

/// Format an API publication timestamp as `d MMM yy`
pub fn format_published_at(raw: &str, locale: Locale) -> Result<String> {
    let date = parse_published_at(raw)?;

    Ok(format!(
        "{} {} {:02}",
        date.day(),
        locale.month_abbreviation(date.month()),
        date.year().rem_euclid(100)
    ))
}
