//! Alert model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Alert record. Alerts are resolved, never deleted, so the history of
/// exceptional conditions is retained.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Alert {
    pub id: Uuid,
    pub equipment_id: Uuid,
    /// Type (0=maintenance due, 1=high hours, 2=anomaly, 3=manual)
    pub alert_type: i16,
    /// Severity (0=low, 1=medium, 2=high, 3=critical)
    pub severity: i16,
    pub message: String,
    pub is_resolved: bool,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// New alert, produced by the overdue scan or a manual request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAlert {
    pub equipment_id: Uuid,
    /// Type (0=maintenance due, 1=high hours, 2=anomaly, 3=manual)
    pub alert_type: i16,
    /// Severity (0=low, 1=medium, 2=high, 3=critical)
    pub severity: Option<i16>,
    #[validate(length(min = 1, message = "Alert message is required"))]
    pub message: String,
}

/// Resolve alert request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ResolveAlert {
    #[validate(length(min = 1, message = "Resolver name is required"))]
    pub resolved_by: String,
}
