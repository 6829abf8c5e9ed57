//! # Slotbook Core
//!
//! Weekly availability for therapists: the recurring schedule model, the
//! time arithmetic and overlap rules behind it, and the editor that validates
//! a schedule before handing it to the external schedule service.
//!
//! - **Models**: weekly schedule, day and slot types, service DTOs
//! - **Time / Overlap**: "HH:MM" arithmetic and half-open interval checks
//! - **Guard / Validator**: per-field checks and the submit-time gate
//! - **Editor**: the viewing / editing / saving state machine

/// Error types shared across the workspace
pub mod errors;
/// Data model and service DTOs
pub mod models;
pub mod time;
pub mod overlap;
pub mod guard;
pub mod validator;
pub mod editor;
/// Persistence seam to the external schedule service
pub mod service;
/// Mock schedule service for tests
pub mod mock;
