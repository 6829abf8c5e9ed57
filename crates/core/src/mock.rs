use async_trait::async_trait;
use mockall::mock;

use crate::{
    errors::SlotResult,
    models::schedule::{ApprovalStatus, SaveScheduleRequest, WeeklySchedule},
    service::ScheduleService,
};

// Mock schedule service for testing
mock! {
    pub ScheduleBackend {}

    #[async_trait]
    impl ScheduleService for ScheduleBackend {
        async fn approval_status(&self) -> SlotResult<ApprovalStatus>;

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
}
