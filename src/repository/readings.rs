//! Machine readings repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::reading::{CreateMachineReading, MachineReading},
};

#[derive(Clone)]
pub struct ReadingsRepository {
    pool: Pool<Postgres>,
}

impl ReadingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get reading by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MachineReading> {
        sqlx::query_as::<_, MachineReading>("SELECT * FROM machine_readings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reading {} not found", id)))
    }

    /// List readings, newest first, optionally filtered by equipment
    pub async fn list(&self, equipment_id: Option<Uuid>) -> AppResult<Vec<MachineReading>> {
        let rows = match equipment_id {
            Some(id) => {
                sqlx::query_as::<_, MachineReading>(
                    "SELECT * FROM machine_readings WHERE equipment_id = $1 ORDER BY reading_date DESC",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, MachineReading>(
                    "SELECT * FROM machine_readings ORDER BY reading_date DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Insert a reading and carry its operating hours over to the
    /// equipment row, atomically.
    pub async fn create_with_hours_update(
        &self,
        data: &CreateMachineReading,
    ) -> AppResult<MachineReading> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, MachineReading>(
            r#"
            INSERT INTO machine_readings (
                id, equipment_id, reading_date, operating_hours,
                temperature, pressure, vibration, status, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.equipment_id)
        .bind(data.reading_date.unwrap_or_else(Utc::now))
        .bind(data.operating_hours)
        .bind(data.temperature)
        .bind(data.pressure)
        .bind(data.vibration)
        .bind(data.status.unwrap_or(0))
        .bind(&data.notes)
        .fetch_one(&mut *tx)
        .await?;

        let updated = sqlx::query(
            "UPDATE equipment SET operating_hours = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(data.operating_hours)
        .bind(data.equipment_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Equipment {} not found",
                data.equipment_id
            )));
        }

        tx.commit().await?;
        Ok(created)
    }
}
