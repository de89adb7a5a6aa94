//! Alert API endpoints
//!
//! Alert reads trigger the overdue scan inline; there is no background
//! scheduler. A scan failure is logged and the read proceeds with the
//! alerts already on file.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::alert::{Alert, CreateAlert, ResolveAlert},
};

async fn run_overdue_scan(state: &crate::AppState) {
    if let Err(e) = state.services.alerts.scan_overdue(Utc::now()).await {
        tracing::warn!("overdue alert scan failed, serving existing alerts: {}", e);
    }
}

/// List all alerts, newest first
#[utoipa::path(
    get,
    path = "/alerts",
    tag = "alerts",
    responses(
        (status = 200, description = "Alert list", body = Vec<Alert>)
    )
)]
pub async fn list_alerts(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Alert>>> {
    run_overdue_scan(&state).await;
    let alerts = state.services.alerts.list().await?;
    Ok(Json(alerts))
}

/// List unresolved alerts, newest first
#[utoipa::path(
    get,
    path = "/alerts/unresolved",
    tag = "alerts",
    responses(
        (status = 200, description = "Unresolved alerts", body = Vec<Alert>)
    )
)]
pub async fn list_unresolved_alerts(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Alert>>> {
    run_overdue_scan(&state).await;
    let alerts = state.services.alerts.list_unresolved().await?;
    Ok(Json(alerts))
}

/// Create a manual alert
#[utoipa::path(
    post,
    path = "/alerts",
    tag = "alerts",
    request_body = CreateAlert,
    responses(
        (status = 201, description = "Alert created", body = Alert),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_alert(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAlert>,
) -> AppResult<(StatusCode, Json<Alert>)> {
    let alert = state.services.alerts.create(&data).await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

/// Resolve an alert. Alerts are kept after resolution, never deleted.
#[utoipa::path(
    put,
    path = "/alerts/{id}/resolve",
    tag = "alerts",
    params(("id" = Uuid, Path, description = "Alert ID")),
    request_body = ResolveAlert,
    responses(
        (status = 200, description = "Alert resolved", body = Alert),
        (status = 404, description = "Alert not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn resolve_alert(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<ResolveAlert>,
) -> AppResult<Json<Alert>> {
    use validator::Validate;
    data.validate()?;
    let alert = state.services.alerts.resolve(id, &data.resolved_by).await?;
    Ok(Json(alert))
}
