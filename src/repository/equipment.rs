//! Equipment repository for database operations

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::MaintenanceStatus,
        equipment::{CreateEquipment, Equipment, StatusSummary, UpdateEquipment},
    },
};

/// Postgres unique-violation SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment with pre-computed derived fields.
    /// A duplicate serial number surfaces as a Conflict.
    pub async fn create(
        &self,
        data: &CreateEquipment,
        next_due: Option<NaiveDate>,
        status: MaintenanceStatus,
    ) -> AppResult<Equipment> {
        let result = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (
                id, name, category, serial_number, location, manufacturer,
                installation_date, state, criticality, notes,
                maintenance_interval_days, last_maintenance_date,
                next_maintenance_due, maintenance_status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(data.category.unwrap_or(4))
        .bind(&data.serial_number)
        .bind(&data.location)
        .bind(&data.manufacturer)
        .bind(data.installation_date)
        .bind(data.state.unwrap_or(0))
        .bind(data.criticality.unwrap_or(1))
        .bind(&data.notes)
        .bind(data.maintenance_interval_days.unwrap_or(30))
        .bind(data.last_maintenance_date)
        .bind(next_due)
        .bind(i16::from(status))
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(AppError::Conflict(format!(
                    "Equipment with serial number {} already exists",
                    data.serial_number
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Update equipment. Derived maintenance fields are always rewritten
    /// from the values the service computed over the merged record.
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateEquipment,
        next_due: Option<NaiveDate>,
        status: MaintenanceStatus,
    ) -> AppResult<Equipment> {
        let now = Utc::now();
        let mut sets = vec![
            "updated_at = $1".to_string(),
            "next_maintenance_due = $2".to_string(),
            "maintenance_status = $3".to_string(),
        ];
        let mut idx = 4;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.category, "category");
        add_field!(data.location, "location");
        add_field!(data.manufacturer, "manufacturer");
        add_field!(data.installation_date, "installation_date");
        add_field!(data.state, "state");
        add_field!(data.criticality, "criticality");
        add_field!(data.notes, "notes");
        add_field!(data.maintenance_interval_days, "maintenance_interval_days");
        add_field!(data.last_maintenance_date, "last_maintenance_date");

        let query = format!(
            "UPDATE equipment SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query)
            .bind(now)
            .bind(next_due)
            .bind(i16::from(status));

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.category);
        bind_field!(data.location);
        bind_field!(data.manufacturer);
        bind_field!(data.installation_date);
        bind_field!(data.state);
        bind_field!(data.criticality);
        bind_field!(data.notes);
        bind_field!(data.maintenance_interval_days);
        bind_field!(data.last_maintenance_date);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment. Maintenance logs, readings, and alerts are
    /// removed by the ON DELETE CASCADE foreign keys.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Dashboard counts grouped by stored maintenance status
    pub async fn status_summary(&self) -> AppResult<StatusSummary> {
        let rows = sqlx::query(
            "SELECT maintenance_status, COUNT(*) as count FROM equipment GROUP BY maintenance_status",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut summary = StatusSummary {
            ok: 0,
            due_soon: 0,
            overdue: 0,
            unknown: 0,
            total: 0,
        };
        for row in rows {
            let status: i16 = row.get("maintenance_status");
            let count: i64 = row.get("count");
            match MaintenanceStatus::from(status) {
                MaintenanceStatus::Ok => summary.ok += count,
                MaintenanceStatus::DueSoon => summary.due_soon += count,
                MaintenanceStatus::Overdue => summary.overdue += count,
                MaintenanceStatus::Unknown => summary.unknown += count,
            }
            summary.total += count;
        }
        Ok(summary)
    }

    /// Active equipment whose next maintenance due date is strictly in
    /// the past. Input to the overdue-alert scan.
    pub async fn list_active_overdue(&self, today: NaiveDate) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(
            r#"
            SELECT * FROM equipment
            WHERE state = 0
              AND next_maintenance_due IS NOT NULL
              AND next_maintenance_due < $1
            ORDER BY next_maintenance_due
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
