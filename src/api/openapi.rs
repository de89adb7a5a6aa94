//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{alerts, equipment, health, maintenance, readings, reports};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MainTrack API",
        version = "1.0.0",
        description = "Factory Equipment Maintenance Tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::equipment_summary,
        equipment::list_overdue_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Maintenance
        maintenance::list_maintenance_logs,
        maintenance::get_maintenance_log,
        maintenance::record_maintenance,
        // Alerts
        alerts::list_alerts,
        alerts::list_unresolved_alerts,
        alerts::create_alert,
        alerts::resolve_alert,
        // Readings
        readings::list_readings,
        readings::get_reading,
        readings::create_reading,
        // Reports
        reports::download_pdf,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::StatusSummary,
            // Maintenance
            crate::models::maintenance::MaintenanceLog,
            crate::models::maintenance::CreateMaintenanceLog,
            crate::models::maintenance::PartUsed,
            // Alerts
            crate::models::alert::Alert,
            crate::models::alert::CreateAlert,
            crate::models::alert::ResolveAlert,
            // Readings
            crate::models::reading::MachineReading,
            crate::models::reading::CreateMachineReading,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment management"),
        (name = "maintenance", description = "Maintenance log management"),
        (name = "alerts", description = "Alert management"),
        (name = "readings", description = "Machine readings"),
        (name = "reports", description = "PDF report generation")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
