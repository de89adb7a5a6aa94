//! Alerts repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        alert::{Alert, CreateAlert},
        enums::AlertType,
    },
};

#[derive(Clone)]
pub struct AlertsRepository {
    pool: Pool<Postgres>,
}

impl AlertsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get alert by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Alert> {
        sqlx::query_as::<_, Alert>("SELECT * FROM alerts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Alert {} not found", id)))
    }

    /// List all alerts, newest first
    pub async fn list(&self) -> AppResult<Vec<Alert>> {
        let rows =
            sqlx::query_as::<_, Alert>("SELECT * FROM alerts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// List unresolved alerts, newest first
    pub async fn list_unresolved(&self) -> AppResult<Vec<Alert>> {
        let rows = sqlx::query_as::<_, Alert>(
            "SELECT * FROM alerts WHERE is_resolved = FALSE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Open alerts of a given type, for the duplicate check in the
    /// overdue scan
    pub async fn list_open_by_type(&self, alert_type: AlertType) -> AppResult<Vec<Alert>> {
        let rows = sqlx::query_as::<_, Alert>(
            "SELECT * FROM alerts WHERE is_resolved = FALSE AND alert_type = $1",
        )
        .bind(i16::from(alert_type))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create an alert
    pub async fn create(&self, data: &CreateAlert) -> AppResult<Alert> {
        let row = sqlx::query_as::<_, Alert>(
            r#"
            INSERT INTO alerts (id, equipment_id, alert_type, severity, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.equipment_id)
        .bind(data.alert_type)
        .bind(data.severity.unwrap_or(1))
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Mark an alert resolved. Resolving twice is a no-op beyond
    /// refreshing the resolver fields.
    pub async fn resolve(&self, id: Uuid, resolved_by: &str) -> AppResult<Alert> {
        sqlx::query_as::<_, Alert>(
            r#"
            UPDATE alerts
            SET is_resolved = TRUE, resolved_at = $1, resolved_by = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(Utc::now())
        .bind(resolved_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Alert {} not found", id)))
    }
}
