//! Maintenance log recording service

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::maintenance::{CreateMaintenanceLog, MaintenanceLog, MaintenanceLogQuery},
    repository::Repository,
    schedule,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceLog> {
        self.repository.maintenance.get_by_id(id).await
    }

    pub async fn list(&self, query: &MaintenanceLogQuery) -> AppResult<Vec<MaintenanceLog>> {
        self.repository.maintenance.list(query).await
    }

    /// Record a maintenance event. The referenced equipment must exist;
    /// its last maintenance date, next due date, and status are
    /// recomputed and persisted together with the new log.
    pub async fn record(&self, input: &CreateMaintenanceLog) -> AppResult<MaintenanceLog> {
        input.validate()?;

        let equipment = self.repository.equipment.get_by_id(input.equipment_id).await?;

        let today = Utc::now().date_naive();
        let next_due =
            schedule::next_due_date(Some(input.date), equipment.maintenance_interval_days);
        let status = schedule::status_for(next_due, today);

        let log = self
            .repository
            .maintenance
            .create_with_equipment_update(input, next_due, status)
            .await?;

        tracing::info!(
            equipment_id = %input.equipment_id,
            date = %input.date,
            "recorded maintenance, next due {:?}",
            next_due
        );

        Ok(log)
    }
}
