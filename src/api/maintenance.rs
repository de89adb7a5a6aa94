//! Maintenance log API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::maintenance::{CreateMaintenanceLog, MaintenanceLog, MaintenanceLogQuery},
};

/// List maintenance logs, newest first
#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "maintenance",
    params(
        ("equipment_id" = Option<Uuid>, Query, description = "Filter by equipment"),
        ("from" = Option<String>, Query, description = "Earliest date (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Latest date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Maintenance logs", body = Vec<MaintenanceLog>)
    )
)]
pub async fn list_maintenance_logs(
    State(state): State<crate::AppState>,
    Query(query): Query<MaintenanceLogQuery>,
) -> AppResult<Json<Vec<MaintenanceLog>>> {
    let logs = state.services.maintenance.list(&query).await?;
    Ok(Json(logs))
}

/// Get maintenance log by ID
#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = Uuid, Path, description = "Maintenance log ID")),
    responses(
        (status = 200, description = "Maintenance log", body = MaintenanceLog),
        (status = 404, description = "Log not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_maintenance_log(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MaintenanceLog>> {
    let log = state.services.maintenance.get_by_id(id).await?;
    Ok(Json(log))
}

/// Record a maintenance event. Updates the equipment's last maintenance
/// date, next due date, and status together with the new log.
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    request_body = CreateMaintenanceLog,
    responses(
        (status = 201, description = "Maintenance recorded", body = MaintenanceLog),
        (status = 400, description = "Invalid maintenance data", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn record_maintenance(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMaintenanceLog>,
) -> AppResult<(StatusCode, Json<MaintenanceLog>)> {
    let log = state.services.maintenance.record(&data).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
