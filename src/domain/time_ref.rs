//! Date input parsing for entry submissions
//!
//! The web form sends `YYYY-MM-DD`; the CLI additionally accepts relative
//! references such as `yesterday` or `last friday`.

use crate::error::{JournalError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date as typed by the user, resolved against a base day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence strictly before the base day
    LastWeekday(Weekday),
    /// Occurrence strictly after the base day
    NextWeekday(Weekday),
    Date(NaiveDate),
}

impl TimeReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || JournalError::InvalidTimeReference(input.trim().to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Today),
            "yesterday" => return Ok(TimeReference::Yesterday),
            "tomorrow" => return Ok(TimeReference::Tomorrow),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return parse_weekday(rest.trim())
                .map(TimeReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            return parse_weekday(rest.trim())
                .map(TimeReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(day) = parse_weekday(&normalized) {
            return Ok(TimeReference::Weekday(day));
        }

        if !has_four_digit_year(&normalized) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(TimeReference::Date)
            .map_err(|_| invalid())
    }

    /// Concrete date relative to `base`, `None` if it falls outside the
    /// calendar chrono can represent
    pub fn resolve(&self, base: NaiveDate) -> Option<NaiveDate> {
        match *self {
            TimeReference::Today => Some(base),
            TimeReference::Yesterday => base.checked_sub_signed(Duration::days(1)),
            TimeReference::Tomorrow => base.checked_add_signed(Duration::days(1)),
            TimeReference::Weekday(day) => {
                base.checked_sub_signed(Duration::days(days_back(base, day)))
            }
            TimeReference::LastWeekday(day) => {
                let back = days_back(base, day);
                base.checked_sub_signed(Duration::days(if back == 0 { 7 } else { back }))
            }
            TimeReference::NextWeekday(day) => {
                let ahead = (7 - days_back(base, day)) % 7;
                base.checked_add_signed(Duration::days(if ahead == 0 { 7 } else { ahead }))
            }
            TimeReference::Date(date) => Some(date),
        }
    }
}

/// Parse and resolve in one step
pub fn resolve_date(input: &str, base: NaiveDate) -> Result<NaiveDate> {
    TimeReference::parse(input)?
        .resolve(base)
        .ok_or_else(|| JournalError::InvalidTimeReference(input.trim().to_string()))
}

/// Explicit dates are `YYYY-MM-DD` with exactly four year digits, as sent by
/// an HTML date input
fn has_four_digit_year(input: &str) -> bool {
    input
        .split('-')
        .next()
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "sunday" | "sun" => Some(Weekday::Sun),
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        _ => None,
    }
}

/// Days from the most recent `target` (today included) up to `base`, 0..=6
fn days_back(base: NaiveDate, target: Weekday) -> i64 {
    let from = base.weekday().num_days_from_sunday() as i64;
    let to = target.num_days_from_sunday() as i64;
    (from - to).rem_euclid(7)
}
