//! Business logic services

pub mod alerts;
pub mod equipment;
pub mod maintenance;
pub mod readings;
pub mod reports;

use crate::{config::ReportsConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub maintenance: maintenance::MaintenanceService,
    pub alerts: alerts::AlertsService,
    pub readings: readings::ReadingsService,
    pub reports: reports::ReportsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, reports_config: ReportsConfig) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone()),
            alerts: alerts::AlertsService::new(repository.clone()),
            readings: readings::ReadingsService::new(repository.clone()),
            reports: reports::ReportsService::new(repository, reports_config),
        }
    }
}
