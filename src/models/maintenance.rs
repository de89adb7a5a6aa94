//! Maintenance log model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A part consumed during a maintenance event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartUsed {
    pub part_name: String,
    pub quantity: i32,
    pub cost: f64,
}

/// Maintenance log record. Immutable once created; creating one updates
/// the owning equipment's derived maintenance fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceLog {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub performed_by: String,
    pub date: NaiveDate,
    pub notes: String,
    /// Parts consumed, in submission order
    #[schema(value_type = Vec<PartUsed>)]
    pub parts_used: Json<Vec<PartUsed>>,
    pub created_at: DateTime<Utc>,
}

/// Create maintenance log request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenanceLog {
    pub equipment_id: Uuid,
    #[validate(length(min = 1, message = "Technician name is required"))]
    pub performed_by: String,
    pub date: NaiveDate,
    #[validate(length(min = 1, message = "Notes are required"))]
    pub notes: String,
    #[serde(default)]
    pub parts_used: Vec<PartUsed>,
}

/// Query filter for listing maintenance logs
#[derive(Debug, Deserialize, ToSchema)]
pub struct MaintenanceLogQuery {
    pub equipment_id: Option<Uuid>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
