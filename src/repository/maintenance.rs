//! Maintenance log repository for database operations

use chrono::NaiveDate;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::MaintenanceStatus,
        maintenance::{CreateMaintenanceLog, MaintenanceLog, MaintenanceLogQuery},
    },
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get maintenance log by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceLog> {
        sqlx::query_as::<_, MaintenanceLog>("SELECT * FROM maintenance_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance log {} not found", id)))
    }

    /// List maintenance logs, newest first, optionally filtered by
    /// equipment and date range
    pub async fn list(&self, query: &MaintenanceLogQuery) -> AppResult<Vec<MaintenanceLog>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.equipment_id.is_some() {
            conditions.push(format!("equipment_id = ${}", idx));
            idx += 1;
        }
        if query.from.is_some() {
            conditions.push(format!("date >= ${}", idx));
            idx += 1;
        }
        if query.to.is_some() {
            conditions.push(format!("date <= ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT * FROM maintenance_logs {} ORDER BY date DESC, created_at DESC",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, MaintenanceLog>(&sql);
        if let Some(equipment_id) = query.equipment_id {
            builder = builder.bind(equipment_id);
        }
        if let Some(from) = query.from {
            builder = builder.bind(from);
        }
        if let Some(to) = query.to {
            builder = builder.bind(to);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Insert a maintenance log and update the owning equipment's derived
    /// fields in a single transaction, so no partial state is observable.
    pub async fn create_with_equipment_update(
        &self,
        log: &CreateMaintenanceLog,
        next_due: Option<NaiveDate>,
        status: MaintenanceStatus,
    ) -> AppResult<MaintenanceLog> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance_logs (id, equipment_id, performed_by, date, notes, parts_used)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(log.equipment_id)
        .bind(&log.performed_by)
        .bind(log.date)
        .bind(&log.notes)
        .bind(Json(&log.parts_used))
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE equipment
            SET last_maintenance_date = $1,
                next_maintenance_due = $2,
                maintenance_status = $3,
                updated_at = NOW()
            WHERE id = $4
            "#,
        )
        .bind(log.date)
        .bind(next_due)
        .bind(i16::from(status))
        .bind(log.equipment_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }
}
