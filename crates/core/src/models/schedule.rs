use std::fmt;

use serde::{Deserialize, Serialize};

use super::time_slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Display order used by the editor, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlots {
    pub day: Weekday,
    pub enabled: bool,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

impl DaySlots {
    /// A disabled day with no slots.
    pub fn empty(day: Weekday) -> Self {
        Self {
            day,
            enabled: false,
            slots: Vec::new(),
        }
    }
}

/// The persisted recurring template, as returned by the schedule service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub id: String,
    pub schedule: Vec<DaySlots>,
}

impl WeeklySchedule {
    pub fn day(&self, day: Weekday) -> Option<&DaySlots> {
        self.schedule.iter().find(|d| d.day == day)
    }
}

/// Body of a create or update call. Only enabled days are submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveScheduleRequest {
    pub schedule: Vec<DaySlots>,
}

impl SaveScheduleRequest {
    pub fn from_days(days: &[DaySlots]) -> Self {
        Self {
            schedule: days.iter().filter(|d| d.enabled).cloned().collect(),
        }
    }
}

/// Profile review state of the therapist. Slots can only be managed once approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    Other(String),
}

impl ApprovalStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, ApprovalStatus::Approved)
    }
}

impl From<String> for ApprovalStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => ApprovalStatus::Pending,
            "Approved" => ApprovalStatus::Approved,
            "Rejected" => ApprovalStatus::Rejected,
            _ => ApprovalStatus::Other(value),
        }
    }
}

impl From<ApprovalStatus> for String {
    fn from(status: ApprovalStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalStatus::Pending => f.write_str("Pending"),
            ApprovalStatus::Approved => f.write_str("Approved"),
            ApprovalStatus::Rejected => f.write_str("Rejected"),
            ApprovalStatus::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}
