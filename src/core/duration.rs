//! Duration parsing and formatting
//!
//! Durations arrive in many shapes ("1:35", "01:35:00.002000",
//! "0 days 01:35:00", blank cells). Parsing keeps only hours and minutes;
//! seconds and fractions are dropped, and anything unrecognized is zero.

use crate::types::Cell;
use regex::Regex;
use std::sync::LazyLock;

/// First `H:MM` with optional `:SS` and `.fraction`, ASCII digits only
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+):([0-9]{2})(?::([0-9]{2})(?:\.[0-9]+)?)?").expect("duration pattern is valid")
});

/// Loose check used to spot time-like cells: a digit, a colon, two digits
static TIME_LIKE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+:[0-9]{2}").expect("time-like pattern is valid"));

/// Convert a cell to whole minutes
pub fn parse_minutes(cell: &Cell) -> i64 {
    match cell {
        Cell::Empty => 0,
        Cell::Number(n) if n.is_nan() => 0,
        other => parse_minutes_str(&other.to_string()),
    }
}

/// Convert free text to whole minutes, returning 0 for anything without `H:MM`
pub fn parse_minutes_str(value: &str) -> i64 {
    let s = value.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("nat") {
        return 0;
    }

    let Some(caps) = DURATION_PATTERN.captures(s) else {
        return 0;
    };

    let hours = caps[1].parse::<i64>();
    let minutes = caps[2].parse::<i64>();
    match (hours, minutes) {
        (Ok(h), Ok(m)) => h.saturating_mul(60).saturating_add(m),
        _ => 0,
    }
}

/// Render minutes as `HH:MM`; zero or negative renders as an empty string
pub fn format_minutes(minutes: i64) -> String {
    if minutes <= 0 {
        return String::new();
    }
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Whether a non-empty cell's text contains something shaped like a time
pub fn is_time_like(cell: &Cell) -> bool {
    !cell.is_empty() && TIME_LIKE_PATTERN.is_match(&cell.to_string())
}
