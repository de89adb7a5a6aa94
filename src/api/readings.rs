//! Machine reading API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::reading::{CreateMachineReading, MachineReading},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReadingsQuery {
    pub equipment_id: Option<Uuid>,
}

/// List machine readings, newest first
#[utoipa::path(
    get,
    path = "/readings",
    tag = "readings",
    params(("equipment_id" = Option<Uuid>, Query, description = "Filter by equipment")),
    responses(
        (status = 200, description = "Readings", body = Vec<MachineReading>)
    )
)]
pub async fn list_readings(
    State(state): State<crate::AppState>,
    Query(query): Query<ReadingsQuery>,
) -> AppResult<Json<Vec<MachineReading>>> {
    let readings = state.services.readings.list(query.equipment_id).await?;
    Ok(Json(readings))
}

/// Get reading by ID
#[utoipa::path(
    get,
    path = "/readings/{id}",
    tag = "readings",
    params(("id" = Uuid, Path, description = "Reading ID")),
    responses(
        (status = 200, description = "Reading", body = MachineReading),
        (status = 404, description = "Reading not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_reading(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MachineReading>> {
    let reading = state.services.readings.get_by_id(id).await?;
    Ok(Json(reading))
}

/// Record a machine reading. The equipment's operating hours follow the
/// latest reading.
#[utoipa::path(
    post,
    path = "/readings",
    tag = "readings",
    request_body = CreateMachineReading,
    responses(
        (status = 201, description = "Reading recorded", body = MachineReading),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reading(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMachineReading>,
) -> AppResult<(StatusCode, Json<MachineReading>)> {
    let reading = state.services.readings.create(&data).await?;
    Ok((StatusCode::CREATED, Json(reading)))
}
