use std::{fs, path::Path};

use eyre::{Result, WrapErr};
use serde::Deserialize;
use slotbook_core::models::schedule::{DaySlots, SaveScheduleRequest, WeeklySchedule};

/// Accepted file shapes: a persisted schedule, a save request, or a bare list of days.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScheduleFile {
    Persisted(WeeklySchedule),
    Request(SaveScheduleRequest),
    Days(Vec<DaySlots>),
}

/// Reads the list of days from a JSON schedule file.
pub fn read_days(path: &Path) -> Result<Vec<DaySlots>> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read schedule file {}", path.display()))?;
    parse_days(&raw).wrap_err_with(|| format!("Invalid schedule file {}", path.display()))
}

pub fn parse_days(raw: &str) -> Result<Vec<DaySlots>> {
    let days = match serde_json::from_str::<ScheduleFile>(raw)? {
        ScheduleFile::Persisted(schedule) => schedule.schedule,
        ScheduleFile::Request(request) => request.schedule,
        ScheduleFile::Days(days) => days,
    };
    Ok(days)
}
