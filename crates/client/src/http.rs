use std::time::Duration;

use async_trait::async_trait;
use eyre::{Result, WrapErr, eyre};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use slotbook_core::{
    errors::{SlotError, SlotResult},
    models::schedule::{
        ApiEnvelope, ApiErrorBody, ApprovalStatus, SaveScheduleRequest, WeeklySchedule,
    },
    service::ScheduleService,
};
use tracing::{debug, warn};

use crate::config::ClientConfig;

pub const APPROVAL_STATUS_PATH: &str = "/therapist/profile/approval-status";
pub const WEEKLY_SCHEDULE_PATH: &str = "/therapist/slots/weekly";

const SAVE_FAILED: &str = "Failed to save schedule";
const FETCH_FAILED: &str = "Failed to fetch schedule";
const STATUS_FAILED: &str = "Failed to fetch approval status";

/// Schedule service reached over REST.
pub struct HttpScheduleService {
    client: Client,
    config: ClientConfig,
}

impl HttpScheduleService {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .wrap_err("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!(method = method.as_str(), url = url.as_str(), "Schedule service request");
        let builder = self.client.request(method, url);
        match &self.config.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, fallback: &str) -> SlotResult<Response> {
        builder.send().await.map_err(|e| {
            warn!("Schedule service unreachable: {}", e);
            SlotError::Service(eyre::Report::new(e).wrap_err(fallback.to_string()))
        })
    }

    async fn save(
        &self,
        method: Method,
        request: SaveScheduleRequest,
    ) -> SlotResult<WeeklySchedule> {
        let builder = self.request(method, WEEKLY_SCHEDULE_PATH).json(&request);
        let response = self.send(builder, SAVE_FAILED).await?;
        let envelope: ApiEnvelope<WeeklySchedule> = read_json(response, SAVE_FAILED).await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl ScheduleService for HttpScheduleService {
    async fn approval_status(&self) -> SlotResult<ApprovalStatus> {
        let response = self
            .send(self.request(Method::GET, APPROVAL_STATUS_PATH), STATUS_FAILED)
            .await?;
        let envelope: ApiEnvelope<ApprovalStatus> = read_json(response, STATUS_FAILED).await?;
        Ok(envelope.data)
    }

    async fn get_weekly_schedule(&self) -> SlotResult<Option<WeeklySchedule>> {
        let response = self
            .send(self.request(Method::GET, WEEKLY_SCHEDULE_PATH), FETCH_FAILED)
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let envelope: ApiEnvelope<Option<WeeklySchedule>> =
            read_json(response, FETCH_FAILED).await?;
        Ok(envelope.data)
    }

    async fn create_weekly_schedule(
        &self,
        request: SaveScheduleRequest,
    ) -> SlotResult<WeeklySchedule> {
        self.save(Method::POST, request).await
    }

    async fn update_weekly_schedule(
        &self,
        request: SaveScheduleRequest,
    ) -> SlotResult<WeeklySchedule> {
        self.save(Method::PUT, request).await
    }
}

/// Decodes a success body, or turns an error response into the server's
/// `message` (falling back to `fallback` when there is none).
async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> SlotResult<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| SlotError::Service(eyre::Report::new(e).wrap_err(fallback.to_string())));
    }

    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| fallback.to_string());
    warn!(%status, "Schedule service error: {}", message);
    Err(SlotError::Service(eyre!(message)))
}
