//! # Schedule Editor
//!
//! Holds the persisted weekly schedule and, while editing, an exclusively
//! owned working copy with one entry per weekday.
//!
//! ```text
//!            start_create / start_edit / edit_from
//!   Viewing ------------------------------------> Editing
//!      ^  <------------------ cancel ---------------' |  ^
//!      |                                         save |  | validation or
//!      '------------- service accepted ---- Saving <--'  | service error
//!                                             '----------'
//! ```
//!
//! Field updates go through the live guards in [`crate::guard`]; a rejected
//! update leaves the working copy untouched.

use std::fmt;

use tracing::{debug, info, warn};

use crate::{
    errors::{SlotError, SlotResult},
    guard,
    models::{
        schedule::{DaySlots, SaveScheduleRequest, Weekday, WeeklySchedule},
        time_slot::{ConsultationMode, TimeSlot},
    },
    service::ScheduleService,
    validator::{check_unique_days, validate_schedule},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Viewing,
    Editing,
    Saving,
}

impl fmt::Display for EditorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorPhase::Viewing => f.write_str("viewing"),
            EditorPhase::Editing => f.write_str("editing"),
            EditorPhase::Saving => f.write_str("saving"),
        }
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveOutcome::Created => f.write_str("Weekly schedule created successfully!"),
            SaveOutcome::Updated => f.write_str("Weekly schedule updated successfully!"),
        }
    }
}

#[derive(Debug)]
pub struct ScheduleEditor {
    persisted: Option<WeeklySchedule>,
    phase: EditorPhase,
    editing: Vec<DaySlots>,
}

impl ScheduleEditor {
    pub fn new(persisted: Option<WeeklySchedule>) -> Self {
        Self {
            persisted,
            phase: EditorPhase::Viewing,
            editing: Vec::new(),
        }
    }

    /// Fetches the current schedule for an approved therapist.
    ///
    /// # Errors
    ///
    /// * `SlotError::NotApproved` - the profile has not been approved yet
    /// * any error returned by the service
    pub async fn load<S: ScheduleService + ?Sized>(service: &S) -> SlotResult<Self> {
        let status = service.approval_status().await?;
        if !status.is_approved() {
            warn!(%status, "Slot management requested before approval");
            return Err(SlotError::NotApproved(status.to_string()));
        }

        let persisted = service.get_weekly_schedule().await?;
        debug!(has_schedule = persisted.is_some(), "Loaded weekly schedule");
        Ok(Self::new(persisted))
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn persisted(&self) -> Option<&WeeklySchedule> {
        self.persisted.as_ref()
    }

    /// The working copy. Empty unless editing.
    pub fn editing(&self) -> &[DaySlots] {
        &self.editing
    }

    pub fn day(&self, day: Weekday) -> Option<&DaySlots> {
        self.editing.iter().find(|d| d.day == day)
    }

    /// Starts a blank schedule: every weekday present, disabled, without slots.
    pub fn start_create(&mut self) -> SlotResult<()> {
        self.begin(Vec::new())
    }

    /// Starts editing a copy of the persisted schedule.
    pub fn start_edit(&mut self) -> SlotResult<()> {
        let days = self
            .persisted
            .as_ref()
            .map(|s| s.schedule.clone())
            .ok_or_else(|| SlotError::NotFound("No weekly schedule to edit".to_string()))?;
        self.begin(days)
    }

    /// Starts editing from an externally supplied list of days.
    pub fn edit_from(&mut self, days: Vec<DaySlots>) -> SlotResult<()> {
        self.begin(days)
    }

    fn begin(&mut self, days: Vec<DaySlots>) -> SlotResult<()> {
        if self.phase != EditorPhase::Viewing {
            return Err(SlotError::InvalidState(format!(
                "cannot start editing while {}",
                self.phase
            )));
        }
        check_unique_days(&days)?;

        self.editing = Weekday::ALL
            .iter()
            .map(|&day| {
                days.iter()
                    .find(|d| d.day == day)
                    .cloned()
                    .unwrap_or_else(|| DaySlots::empty(day))
            })
            .collect();
        self.phase = EditorPhase::Editing;
        debug!("Editing started");
        Ok(())
    }

    /// Flips a day's enabled flag and returns the new value.
    pub fn toggle_day(&mut self, day: Weekday) -> SlotResult<bool> {
        let entry = self.day_mut(day)?;
        entry.enabled = !entry.enabled;
        Ok(entry.enabled)
    }

    /// Appends a blank slot and returns its index.
    pub fn add_slot(&mut self, day: Weekday) -> SlotResult<usize> {
        let entry = self.day_mut(day)?;
        entry.slots.push(TimeSlot::default());
        Ok(entry.slots.len() - 1)
    }

    pub fn remove_slot(&mut self, day: Weekday, slot: usize) -> SlotResult<TimeSlot> {
        let entry = self.day_mut(day)?;
        check_slot_index(entry, slot)?;
        Ok(entry.slots.remove(slot))
    }

    /// Sets a start time after checking it against the day's other slots.
    /// An empty value clears the time without any check.
    pub fn set_start_time(&mut self, day: Weekday, slot: usize, value: &str) -> SlotResult<()> {
        let entry = self.day_mut(day)?;
        check_slot_index(entry, slot)?;
        if !value.is_empty() {
            if let Err(e) = guard::check_start_time(&entry.slots, slot, value) {
                debug!(%day, slot, value, "Start time rejected: {}", e);
                return Err(e.into());
            }
        }
        entry.slots[slot].start_time = value.to_string();
        Ok(())
    }

    pub fn set_price(&mut self, day: Weekday, slot: usize, price: f64) -> SlotResult<()> {
        let entry = self.day_mut(day)?;
        check_slot_index(entry, slot)?;
        guard::check_price(price)?;
        entry.slots[slot].price = price;
        Ok(())
    }

    /// Adds or removes a mode and returns whether it is now selected.
    pub fn toggle_mode(
        &mut self,
        day: Weekday,
        slot: usize,
        mode: ConsultationMode,
    ) -> SlotResult<bool> {
        let entry = self.day_mut(day)?;
        check_slot_index(entry, slot)?;
        let modes = &mut entry.slots[slot].modes;
        if modes.remove(&mode) {
            Ok(false)
        } else {
            modes.insert(mode);
            Ok(true)
        }
    }

    /// Drops all pending edits and returns to viewing.
    pub fn cancel(&mut self) -> SlotResult<()> {
        self.require_editing()?;
        self.editing.clear();
        self.phase = EditorPhase::Viewing;
        debug!("Editing cancelled");
        Ok(())
    }

    /// Validates the working copy and submits its enabled days.
    ///
    /// Creates the schedule if none is persisted yet, otherwise replaces it.
    /// On any failure the editor stays in `Editing` with the working copy
    /// intact so the save can be retried. This includes the returned future
    /// being dropped before the service answers.
    pub async fn save<S: ScheduleService + ?Sized>(
        &mut self,
        service: &S,
    ) -> SlotResult<SaveOutcome> {
        self.require_editing()?;
        validate_schedule(&self.editing)?;

        let request = SaveScheduleRequest::from_days(&self.editing);
        let update = self.persisted.is_some();
        let (outcome, result) = {
            let _saving = SavingPhase::enter(&mut self.phase);
            if update {
                (SaveOutcome::Updated, service.update_weekly_schedule(request).await)
            } else {
                (SaveOutcome::Created, service.create_weekly_schedule(request).await)
            }
        };

        match result {
            Ok(schedule) => {
                info!(id = %schedule.id, days = schedule.schedule.len(), "{}", outcome);
                self.persisted = Some(schedule);
                self.editing.clear();
                self.phase = EditorPhase::Viewing;
                Ok(outcome)
            }
            Err(e) => {
                warn!("Error saving schedule: {}", e);
                Err(e)
            }
        }
    }

    fn require_editing(&self) -> SlotResult<()> {
        if self.phase != EditorPhase::Editing {
            return Err(SlotError::InvalidState(format!(
                "not editing (currently {})",
                self.phase
            )));
        }
        Ok(())
    }

    fn day_mut(&mut self, day: Weekday) -> SlotResult<&mut DaySlots> {
        self.require_editing()?;
        self.editing
            .iter_mut()
            .find(|d| d.day == day)
            .ok_or_else(|| SlotError::NotFound(format!("{} is not part of the schedule", day)))
    }
}

/// Holds the phase at `Saving` while a request is in flight and puts it back
/// to `Editing` when dropped, whether the request finished or was abandoned.
struct SavingPhase<'a> {
    phase: &'a mut EditorPhase,
}

impl<'a> SavingPhase<'a> {
    fn enter(phase: &'a mut EditorPhase) -> Self {
        *phase = EditorPhase::Saving;
        Self { phase }
    }
}

impl Drop for SavingPhase<'_> {
    fn drop(&mut self) {
        *self.phase = EditorPhase::Editing;
    }
}

fn check_slot_index(day: &DaySlots, slot: usize) -> SlotResult<()> {
    if slot >= day.slots.len() {
        return Err(SlotError::NotFound(format!("Slot {} on {}", slot + 1, day.day)));
    }
    Ok(())
}
