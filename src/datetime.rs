// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Date parsing and formatting helpers.
//!
//! Appointment dates travel as ISO `YYYY-MM-DD` on the wire and are shown and
//! typed as `DD/MM/YYYY`. Parsing is deliberately permissive: components are
//! range-checked (month 1-12, day 1-31) but there is no per-month day-count or
//! leap-year validation. The upstream date picker never produces such dates,
//! so the text path accepts e.g. 31/02 rather than second-guessing it.

use chrono::{DateTime, Datelike, Local, NaiveTime, Timelike};

/// A calendar date as typed or received, compared field-wise.
///
/// Not validated beyond component ranges; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// The calendar day of a local timestamp.
    pub fn from_local(now: &DateTime<Local>) -> Self {
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }
}

/// Parse `DD/MM/YYYY` or `YYYY-MM-DD` into a [`CalendarDate`].
///
/// Returns `None` (never an error) unless the string splits into exactly three
/// numeric components with month 1-12 and day 1-31.
pub fn parse_date(date_str: &str) -> Option<CalendarDate> {
    if date_str.is_empty() {
        return None;
    }

    // dd/mm/yyyy -> [yyyy, mm, dd]; yyyy-mm-dd is already in that order
    let parts: Vec<&str> = if date_str.contains('/') {
        date_str.split('/').rev().collect()
    } else {
        date_str.split('-').collect()
    };

    if parts.len() != 3 {
        return None;
    }

    let year: i32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;
    let day: u32 = parts[2].trim().parse().ok()?;

    if year == 0 {
        return None;
    }
    if !(1..=12).contains(&month) {
        return None;
    }
    if !(1..=31).contains(&day) {
        return None;
    }

    Some(CalendarDate { year, month, day })
}

/// Convert a `DD/MM/YYYY` string to the wire form `YYYY-MM-DD`.
///
/// Components are zero-padded; returns `None` if the string does not have
/// three slash-separated parts.
pub fn display_to_iso(date_str: &str) -> Option<String> {
    let parts: Vec<&str> = date_str.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    Some(format!("{}-{:0>2}-{:0>2}", parts[2], parts[1], parts[0]))
}

/// Convert a wire `YYYY-MM-DD` string to the display form `DD/MM/YYYY`.
pub fn iso_to_display(date_str: &str) -> Option<String> {
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    Some(format!("{:0>2}/{:0>2}/{}", parts[2], parts[1], parts[0]))
}

/// Format a date string for display as `DD/MM/YYYY`.
///
/// Accepts either wire or display form; unparseable input is passed through
/// unchanged rather than erased.
pub fn format_date_display(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(d) => format!("{:02}/{:02}/{:04}", d.day, d.month, d.year),
        None => date_str.to_string(),
    }
}

/// Whether `date_str` names a calendar day strictly before `today`.
///
/// Time-of-day plays no part; unparseable dates are not "in the past".
pub fn is_date_in_past(date_str: &str, today: CalendarDate) -> bool {
    match parse_date(date_str) {
        Some(date) => date < today,
        None => false,
    }
}

/// Whether the `HH:MM` slot on `date_str` is already behind the wall clock.
///
/// Only applies when the date is today; other days (and unparseable input)
/// are never "in the past" here; [`is_date_in_past`] covers them.
pub fn is_time_in_past(date_str: &str, time_str: &str, now: &DateTime<Local>) -> bool {
    let date = match parse_date(date_str) {
        Some(d) => d,
        None => return false,
    };

    if date != CalendarDate::from_local(now) {
        return false;
    }

    let mut pieces = time_str.split(':');
    let hour: u32 = match pieces.next().and_then(|h| h.trim().parse().ok()) {
        Some(h) => h,
        None => return false,
    };
    let minute: u32 = pieces
        .next()
        .and_then(|m| m.trim().parse().ok())
        .unwrap_or(0);

    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(slot) => slot < now.time().with_nanosecond(0).unwrap_or_else(|| now.time()),
        None => false,
    }
}
