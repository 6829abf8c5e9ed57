use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationMode {
    Video,
    Audio,
}

impl fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsultationMode::Video => f.write_str("video"),
            ConsultationMode::Audio => f.write_str("audio"),
        }
    }
}

/// A single bookable 50-minute offering within a day.
///
/// `start_time` is the raw "HH:MM" value from the time picker; an empty
/// string means it has not been set yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: String,
    pub modes: BTreeSet<ConsultationMode>,
    pub price: f64,
}

impl TimeSlot {
    pub fn new(start_time: &str, price: f64, modes: &[ConsultationMode]) -> Self {
        Self {
            start_time: start_time.to_string(),
            modes: modes.iter().copied().collect(),
            price,
        }
    }

    pub fn has_start_time(&self) -> bool {
        !self.start_time.is_empty()
    }
}

impl Default for TimeSlot {
    /// Blank slot as offered by "Add Slot": no time, video only, no price.
    fn default() -> Self {
        Self {
            start_time: String::new(),
            modes: BTreeSet::from([ConsultationMode::Video]),
            price: 0.0,
        }
    }
}
