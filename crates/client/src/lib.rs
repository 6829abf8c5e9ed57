//! # Slotbook Client
//!
//! REST client for the external schedule service that persists therapists'
//! weekly availability, plus helpers for reading schedules from disk.
//!
//! The client implements [`slotbook_core::service::ScheduleService`], so a
//! [`slotbook_core::editor::ScheduleEditor`] can save through it directly.

/// Configuration loaded from environment variables
pub mod config;
/// `reqwest`-backed schedule service
pub mod http;
/// Reading schedules from JSON files
pub mod schedule_file;

pub use config::ClientConfig;
pub use http::HttpScheduleService;
