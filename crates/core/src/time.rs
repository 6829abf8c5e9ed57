//! Wall-clock arithmetic for "HH:MM" start times.
//!
//! Slots have a fixed length of [`SLOT_DURATION_MINUTES`]. End times are
//! kept as unwrapped minute counts for validation so that a slot running
//! past midnight is caught; only the display helpers wrap around 24h.

use chrono::NaiveTime;

use crate::errors::{SlotError, SlotResult};

pub const SLOT_DURATION_MINUTES: u32 = 50;
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses "HH:MM" into minutes since midnight.
///
/// # Errors
///
/// `SlotError::InvalidTimeFormat` unless the input is exactly two digits,
/// a colon and two digits, with hour <= 23 and minute <= 59.
pub fn time_to_minutes(time: &str) -> SlotResult<u32> {
    let invalid = || SlotError::InvalidTimeFormat(time.to_string());

    let bytes = time.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit);
    if !well_formed {
        return Err(invalid());
    }

    let hours: u32 = time[..2].parse().map_err(|_| invalid())?;
    let minutes: u32 = time[3..].parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as "HH:MM", wrapping past 24h.
pub fn minutes_to_time(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Unwrapped end of a slot starting at `start_minutes`. May be >= 1440.
pub fn end_minutes(start_minutes: u32) -> u32 {
    start_minutes + SLOT_DURATION_MINUTES
}

/// True when a slot starting at `start_minutes` finishes before midnight.
pub fn ends_before_midnight(start_minutes: u32) -> bool {
    end_minutes(start_minutes) < MINUTES_PER_DAY
}

/// End time of a slot for display, e.g. "09:00" -> "09:50", "23:30" -> "00:20".
pub fn calculate_end_time(start: &str) -> SlotResult<String> {
    Ok(minutes_to_time(end_minutes(time_to_minutes(start)?)))
}

/// Renders a 24h "HH:MM" value as "h:mm AM/PM".
pub fn format_time(time: &str) -> SlotResult<String> {
    Ok(format_minutes(time_to_minutes(time)?))
}

/// Renders minutes since midnight as "h:mm AM/PM", wrapping past 24h.
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    match NaiveTime::from_num_seconds_from_midnight_opt(minutes * 60, 0) {
        Some(clock) => clock.format("%-I:%M %p").to_string(),
        None => minutes_to_time(minutes),
    }
}
