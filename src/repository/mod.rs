//! Repository layer for database operations

pub mod alerts;
pub mod equipment;
pub mod maintenance;
pub mod readings;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment: equipment::EquipmentRepository,
    pub maintenance: maintenance::MaintenanceRepository,
    pub alerts: alerts::AlertsRepository,
    pub readings: readings::ReadingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool.clone()),
            alerts: alerts::AlertsRepository::new(pool.clone()),
            readings: readings::ReadingsRepository::new(pool.clone()),
            pool,
        }
    }
}
