//! Field-level checks applied while a slot is being edited.
//!
//! These reject a single change before it reaches the editing copy. They use
//! the same interval rules as the submit-time validator, so a value accepted
//! here can only fail later for reasons unrelated to timing.

use tracing::debug;

use crate::{
    errors::GuardError,
    models::time_slot::TimeSlot,
    overlap::intervals_overlap,
    time::{end_minutes, ends_before_midnight, format_minutes, time_to_minutes},
};

/// Checks a new start time for the slot at `slot_index` against its siblings.
///
/// Siblings without a start time, and the slot itself, are ignored.
pub fn check_start_time(
    slots: &[TimeSlot],
    slot_index: usize,
    new_start: &str,
) -> Result<(), GuardError> {
    let start = time_to_minutes(new_start)
        .map_err(|_| GuardError::InvalidTimeFormat(new_start.to_string()))?;

    if !ends_before_midnight(start) {
        return Err(GuardError::CrossesMidnight {
            end: format_minutes(end_minutes(start)),
        });
    }

    for (index, sibling) in slots.iter().enumerate() {
        if index == slot_index || !sibling.has_start_time() {
            continue;
        }
        // A malformed sibling cannot be compared; the submit-time check reports it.
        let Ok(existing) = time_to_minutes(&sibling.start_time) else {
            continue;
        };
        if intervals_overlap(start, existing) {
            debug!(new_start, existing = %sibling.start_time, "Start time overlaps a sibling slot");
            return Err(GuardError::Overlaps {
                start: format_minutes(existing),
                end: format_minutes(end_minutes(existing)),
            });
        }
    }

    Ok(())
}

pub fn check_price(price: f64) -> Result<(), GuardError> {
    if price < 0.0 {
        return Err(GuardError::NegativePrice);
    }
    Ok(())
}
