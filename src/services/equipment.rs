//! Equipment management service

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, StatusSummary, UpdateEquipment},
    repository::Repository,
    schedule,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Create equipment, deriving next due date and maintenance status
    /// from the submitted last maintenance date.
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        let today = Utc::now().date_naive();
        let interval = data.maintenance_interval_days.unwrap_or(30);
        let next_due = schedule::next_due_date(data.last_maintenance_date, interval);
        let status = schedule::status_for(next_due, today);
        self.repository.equipment.create(data, next_due, status).await
    }

    /// Update equipment, recomputing derived fields over the merged
    /// record (submitted values where present, stored values otherwise).
    pub async fn update(&self, id: Uuid, data: &UpdateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        let existing = self.repository.equipment.get_by_id(id).await?;

        let last_maintenance = data
            .last_maintenance_date
            .or(existing.last_maintenance_date);
        let interval = data
            .maintenance_interval_days
            .unwrap_or(existing.maintenance_interval_days);

        let today = Utc::now().date_naive();
        let next_due = schedule::next_due_date(last_maintenance, interval);
        let status = schedule::status_for(next_due, today);

        self.repository.equipment.update(id, data, next_due, status).await
    }

    /// Delete equipment together with its maintenance logs, readings,
    /// and alerts.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }

    /// Dashboard summary counts grouped by stored status
    pub async fn summary(&self) -> AppResult<StatusSummary> {
        self.repository.equipment.status_summary().await
    }

    /// Active equipment past its next maintenance due date
    pub async fn list_overdue(&self) -> AppResult<Vec<Equipment>> {
        let today = Utc::now().date_naive();
        self.repository.equipment.list_active_overdue(today).await
    }
}
