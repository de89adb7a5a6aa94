//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    /// Category (0=motor, 1=pump, 2=conveyor, 3=press, 4=other)
    pub category: i16,
    /// Unique serial number
    pub serial_number: String,
    pub location: Option<String>,
    pub manufacturer: Option<String>,
    pub installation_date: Option<NaiveDate>,
    /// Operational state (0=active, 1=inactive, 2=maintenance, 3=broken)
    pub state: i16,
    pub operating_hours: f64,
    /// Criticality (0=low, 1=medium, 2=high, 3=critical)
    pub criticality: i16,
    pub notes: Option<String>,
    /// Days between required maintenance events
    pub maintenance_interval_days: i32,
    pub last_maintenance_date: Option<NaiveDate>,
    /// Derived: last_maintenance_date + maintenance_interval_days
    pub next_maintenance_due: Option<NaiveDate>,
    /// Derived maintenance status (0=ok, 1=due soon, 2=overdue, 3=unknown)
    pub maintenance_status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Equipment name is required"))]
    pub name: String,
    /// Category (0=motor, 1=pump, 2=conveyor, 3=press, 4=other)
    pub category: Option<i16>,
    #[validate(length(min = 1, message = "Serial number is required"))]
    pub serial_number: String,
    pub location: Option<String>,
    pub manufacturer: Option<String>,
    pub installation_date: Option<NaiveDate>,
    pub state: Option<i16>,
    pub criticality: Option<i16>,
    pub notes: Option<String>,
    #[validate(range(min = 1, message = "Maintenance interval must be at least 1 day"))]
    pub maintenance_interval_days: Option<i32>,
    pub last_maintenance_date: Option<NaiveDate>,
}

/// Update equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, message = "Equipment name is required"))]
    pub name: Option<String>,
    pub category: Option<i16>,
    pub location: Option<String>,
    pub manufacturer: Option<String>,
    pub installation_date: Option<NaiveDate>,
    pub state: Option<i16>,
    pub criticality: Option<i16>,
    pub notes: Option<String>,
    #[validate(range(min = 1, message = "Maintenance interval must be at least 1 day"))]
    pub maintenance_interval_days: Option<i32>,
    pub last_maintenance_date: Option<NaiveDate>,
}

/// Dashboard summary counts grouped by stored maintenance status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusSummary {
    pub ok: i64,
    pub due_soon: i64,
    pub overdue: i64,
    pub unknown: i64,
    pub total: i64,
}
