use thiserror::Error;

use crate::models::schedule::Weekday;

/// Submit-time schedule violations.
///
/// Slot ordinals are 1-based, matching how slots are numbered on screen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enable at least one day")]
    NoDaysEnabled,

    #[error("{0} is listed more than once")]
    DuplicateDay(Weekday),

    #[error("Please add at least one slot for {0}")]
    EmptyDaySlots(Weekday),

    #[error("Please set start time for Slot {slot} on {day}")]
    MissingStartTime { day: Weekday, slot: usize },

    #[error("Slot {slot} on {day} has an invalid start time: {value:?}")]
    InvalidStartTime {
        day: Weekday,
        slot: usize,
        value: String,
    },

    #[error("Please set a valid price (greater than 0) for Slot {slot} on {day}")]
    InvalidPrice { day: Weekday, slot: usize },

    #[error("Please select at least one consultation mode for Slot {slot} on {day}")]
    NoModesSelected { day: Weekday, slot: usize },

    #[error(
        "Slot {slot} on {day} starting at {start} would end after midnight ({end}). \
         Please choose an earlier time."
    )]
    SlotCrossesMidnight {
        day: Weekday,
        slot: usize,
        start: String,
        end: String,
    },

    #[error(
        "{day}: Slots overlap: {first} and {second}. \
         Each session is 50 minutes, so slots must be at least 50 minutes apart."
    )]
    SlotOverlap {
        day: Weekday,
        first: String,
        second: String,
    },

    #[error("{0} has duplicate time slots. Please ensure all slots have different start times.")]
    DuplicateStartTime(Weekday),
}

/// Rejections raised while a single field is being edited.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("This slot would end after midnight ({end}). Please choose an earlier time.")]
    CrossesMidnight { end: String },

    #[error(
        "This time overlaps with another slot ({start} - {end}). \
         Each session is 50 minutes. \
         Please choose a time at least 50 minutes before or after existing slots."
    )]
    Overlaps { start: String, end: String },

    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Invalid time format: {0:?} (expected HH:MM)")]
    InvalidTimeFormat(String),
}

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time format: {0:?} (expected HH:MM)")]
    InvalidTimeFormat(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Rejected(#[from] GuardError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid editor state: {0}")]
    InvalidState(String),

    #[error("Slot management is unavailable until the profile is approved (status: {0})")]
    NotApproved(String),

    #[error("{0}")]
    Service(#[from] eyre::Report),
}

pub type SlotResult<T> = Result<T, SlotError>;
