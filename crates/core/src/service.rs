use async_trait::async_trait;

use crate::{
    errors::SlotResult,
    models::schedule::{ApprovalStatus, SaveScheduleRequest, WeeklySchedule},
};

/// The external service that owns persisted schedules.
///
/// A save replaces the whole schedule; the returned value is authoritative.
#[async_trait]
pub trait ScheduleService: Send + Sync {
    /// Review state of the current therapist's profile.
    async fn approval_status(&self) -> SlotResult<ApprovalStatus>;

    /// The persisted schedule, or `None` if one has never been created.
    async fn get_weekly_schedule(&self) -> SlotResult<Option<WeeklySchedule>>;

    async fn create_weekly_schedule(
        &self,
        request: SaveScheduleRequest,
    ) -> SlotResult<WeeklySchedule>;

    async fn update_weekly_schedule(
        &self,
        request: SaveScheduleRequest,
    ) -> SlotResult<WeeklySchedule>;
}
