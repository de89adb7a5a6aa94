//! Machine reading model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Machine reading record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MachineReading {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub reading_date: DateTime<Utc>,
    pub operating_hours: f64,
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
    pub vibration: Option<f64>,
    /// Status (0=normal, 1=warning, 2=critical)
    pub status: i16,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create machine reading request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMachineReading {
    pub equipment_id: Uuid,
    /// Defaults to now when omitted
    pub reading_date: Option<DateTime<Utc>>,
    pub operating_hours: f64,
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
    pub vibration: Option<f64>,
    pub status: Option<i16>,
    pub notes: Option<String>,
}
