//! MainTrack Factory Equipment Maintenance Tracker
//!
//! A Rust implementation of the MainTrack maintenance tracking server,
//! providing a REST JSON API for managing factory equipment, maintenance
//! logs, alerts, and machine readings.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod schedule;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
