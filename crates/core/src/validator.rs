//! Submit-time validation of an edited weekly schedule.
//!
//! Checks run in a fixed order and stop at the first violation, so a caller
//! can show exactly one message and re-run after the user fixes it:
//!
//! 1. no weekday is listed twice
//! 2. at least one day is enabled
//! 3. per enabled day, in list order:
//!    - the day has at least one slot
//!    - each slot has a start time, a positive price, a mode, and ends before midnight
//!    - no two slots overlap (equal starts are reported as duplicates)
//!    - no two slots share a start time string

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{
    errors::ValidationError,
    models::{
        schedule::{DaySlots, Weekday},
        time_slot::TimeSlot,
    },
    overlap::{CollisionKind, find_collision},
    time::{end_minutes, ends_before_midnight, format_minutes, time_to_minutes},
};

/// Validates the full editing copy (all seven days, enabled or not).
pub fn validate_schedule(days: &[DaySlots]) -> Result<(), ValidationError> {
    let result = check_schedule(days);
    match &result {
        Ok(()) => debug!(
            enabled_days = days.iter().filter(|d| d.enabled).count(),
            "Schedule passed validation"
        ),
        Err(e) => warn!("Schedule rejected: {}", e),
    }
    result
}

fn check_schedule(days: &[DaySlots]) -> Result<(), ValidationError> {
    check_unique_days(days)?;
    let mut enabled = days.iter().filter(|d| d.enabled).peekable();
    if enabled.peek().is_none() {
        return Err(ValidationError::NoDaysEnabled);
    }
    enabled.try_for_each(validate_day)
}

/// Rejects a list that has more than one entry for the same weekday.
pub fn check_unique_days(days: &[DaySlots]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    match days.iter().find(|d| !seen.insert(d.day)) {
        Some(repeated) => Err(ValidationError::DuplicateDay(repeated.day)),
        None => Ok(()),
    }
}

/// Validates one day regardless of its `enabled` flag.
pub fn validate_day(day: &DaySlots) -> Result<(), ValidationError> {
    if day.slots.is_empty() {
        return Err(ValidationError::EmptyDaySlots(day.day));
    }

    let starts = day
        .slots
        .iter()
        .enumerate()
        .map(|(index, slot)| validate_slot(day.day, index + 1, slot))
        .collect::<Result<Vec<u32>, _>>()?;

    if let Some(collision) = find_collision(&starts) {
        return Err(match collision.kind {
            CollisionKind::Duplicate => ValidationError::DuplicateStartTime(day.day),
            CollisionKind::Overlap => ValidationError::SlotOverlap {
                day: day.day,
                first: format_minutes(starts[collision.first]),
                second: format_minutes(starts[collision.second]),
            },
        });
    }

    let unique: HashSet<&str> = day.slots.iter().map(|s| s.start_time.as_str()).collect();
    if unique.len() != day.slots.len() {
        return Err(ValidationError::DuplicateStartTime(day.day));
    }

    Ok(())
}

/// Checks a single slot and returns its start in minutes since midnight.
/// `ordinal` is the 1-based position used in messages.
pub fn validate_slot(
    day: Weekday,
    ordinal: usize,
    slot: &TimeSlot,
) -> Result<u32, ValidationError> {
    if !slot.has_start_time() {
        return Err(ValidationError::MissingStartTime { day, slot: ordinal });
    }
    // Also rejects NaN.
    if !(slot.price > 0.0) {
        return Err(ValidationError::InvalidPrice { day, slot: ordinal });
    }
    if slot.modes.is_empty() {
        return Err(ValidationError::NoModesSelected { day, slot: ordinal });
    }

    let start =
        time_to_minutes(&slot.start_time).map_err(|_| ValidationError::InvalidStartTime {
            day,
            slot: ordinal,
            value: slot.start_time.clone(),
        })?;
    if !ends_before_midnight(start) {
        return Err(ValidationError::SlotCrossesMidnight {
            day,
            slot: ordinal,
            start: format_minutes(start),
            end: format_minutes(end_minutes(start)),
        });
    }

    Ok(start)
}
