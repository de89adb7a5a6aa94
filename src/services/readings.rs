//! Machine readings service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::reading::{CreateMachineReading, MachineReading},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReadingsService {
    repository: Repository,
}

impl ReadingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MachineReading> {
        self.repository.readings.get_by_id(id).await
    }

    pub async fn list(&self, equipment_id: Option<Uuid>) -> AppResult<Vec<MachineReading>> {
        self.repository.readings.list(equipment_id).await
    }

    /// Record a reading; the equipment's operating hours follow the
    /// latest reading.
    pub async fn create(&self, data: &CreateMachineReading) -> AppResult<MachineReading> {
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        self.repository.readings.create_with_hours_update(data).await
    }
}
