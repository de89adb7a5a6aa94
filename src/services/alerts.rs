//! Alert management and overdue-alert generation

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        alert::{Alert, CreateAlert},
        enums::AlertType,
        equipment::Equipment,
    },
    repository::Repository,
    schedule,
};

/// Decide which overdue alerts to create for the given equipment,
/// skipping equipment that already carries an open MaintenanceDue alert.
/// Running the plan twice over the same state yields nothing the second
/// time, which is what makes the inline scan safe to trigger on reads.
pub fn plan_overdue_alerts(
    equipment: &[Equipment],
    open_alerts: &[Alert],
    today: NaiveDate,
) -> Vec<CreateAlert> {
    let covered: std::collections::HashSet<Uuid> = open_alerts
        .iter()
        .filter(|a| !a.is_resolved && AlertType::from(a.alert_type) == AlertType::MaintenanceDue)
        .map(|a| a.equipment_id)
        .collect();

    equipment
        .iter()
        .filter(|e| !covered.contains(&e.id))
        .filter_map(|e| {
            let due = e.next_maintenance_due?;
            let days_overdue = -schedule::days_until(due, today);
            if days_overdue <= 0 {
                return None;
            }
            Some(CreateAlert {
                equipment_id: e.id,
                alert_type: i16::from(AlertType::MaintenanceDue),
                severity: Some(i16::from(schedule::overdue_severity(days_overdue))),
                message: format!(
                    "{} is {} day(s) overdue for maintenance (due {})",
                    e.name, days_overdue, due
                ),
            })
        })
        .collect()
}

#[derive(Clone)]
pub struct AlertsService {
    repository: Repository,
}

impl AlertsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Alert>> {
        self.repository.alerts.list().await
    }

    pub async fn list_unresolved(&self) -> AppResult<Vec<Alert>> {
        self.repository.alerts.list_unresolved().await
    }

    /// Create a manual alert. The referenced equipment must exist.
    pub async fn create(&self, data: &CreateAlert) -> AppResult<Alert> {
        data.validate()?;
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        self.repository.alerts.create(data).await
    }

    pub async fn resolve(&self, id: Uuid, resolved_by: &str) -> AppResult<Alert> {
        self.repository.alerts.resolve(id, resolved_by).await
    }

    /// Scan active equipment for overdue maintenance and open at most one
    /// MaintenanceDue alert per equipment. Triggered inline before alert
    /// reads; there is no background scheduler.
    pub async fn scan_overdue(&self, now: DateTime<Utc>) -> AppResult<Vec<Alert>> {
        let today = now.date_naive();
        let overdue = self.repository.equipment.list_active_overdue(today).await?;
        let open = self
            .repository
            .alerts
            .list_open_by_type(AlertType::MaintenanceDue)
            .await?;

        let planned = plan_overdue_alerts(&overdue, &open, today);
        let mut created = Vec::with_capacity(planned.len());
        for alert in &planned {
            created.push(self.repository.alerts.create(alert).await?);
        }

        if !created.is_empty() {
            tracing::info!("overdue scan created {} alert(s)", created.len());
        }

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{AlertSeverity, MaintenanceStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn equipment(name: &str, next_due: Option<NaiveDate>) -> Equipment {
        Equipment {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: 0,
            serial_number: format!("SN-{}", name),
            location: None,
            manufacturer: None,
            installation_date: None,
            state: 0,
            operating_hours: 0.0,
            criticality: 1,
            notes: None,
            maintenance_interval_days: 30,
            last_maintenance_date: None,
            next_maintenance_due: next_due,
            maintenance_status: i16::from(MaintenanceStatus::Unknown),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn open_alert_for(equipment_id: Uuid) -> Alert {
        Alert {
            id: Uuid::new_v4(),
            equipment_id,
            alert_type: i16::from(AlertType::MaintenanceDue),
            severity: i16::from(AlertSeverity::Medium),
            message: "overdue".to_string(),
            is_resolved: false,
            resolved_at: None,
            resolved_by: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn creates_alert_for_overdue_equipment() {
        let today = date(2025, 1, 1);
        let eq = equipment("CNC Lathe #1", Some(date(2024, 12, 17)));
        let planned = plan_overdue_alerts(&[eq.clone()], &[], today);

        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].equipment_id, eq.id);
        assert_eq!(planned[0].alert_type, i16::from(AlertType::MaintenanceDue));
        // 15 days overdue escalates past the 14 day boundary
        assert_eq!(planned[0].severity, Some(i16::from(AlertSeverity::Critical)));
    }

    #[test]
    fn severity_tracks_days_overdue() {
        let today = date(2025, 1, 1);
        let medium = equipment("a", Some(date(2024, 12, 29))); // 3 days
        let high = equipment("b", Some(date(2024, 12, 22))); // 10 days
        let planned = plan_overdue_alerts(&[medium, high], &[], today);

        assert_eq!(planned[0].severity, Some(i16::from(AlertSeverity::Medium)));
        assert_eq!(planned[1].severity, Some(i16::from(AlertSeverity::High)));
    }

    #[test]
    fn skips_equipment_with_open_alert() {
        let today = date(2025, 1, 1);
        let eq = equipment("Press #2", Some(date(2024, 12, 1)));
        let open = open_alert_for(eq.id);

        let planned = plan_overdue_alerts(&[eq], &[open], today);
        assert!(planned.is_empty());
    }

    #[test]
    fn resolved_alert_does_not_suppress_new_one() {
        let today = date(2025, 1, 1);
        let eq = equipment("Press #2", Some(date(2024, 12, 1)));
        let mut resolved = open_alert_for(eq.id);
        resolved.is_resolved = true;

        let planned = plan_overdue_alerts(&[eq], &[resolved], today);
        assert_eq!(planned.len(), 1);
    }

    #[test]
    fn due_today_is_not_overdue() {
        let today = date(2025, 1, 1);
        let eq = equipment("Conveyor #3", Some(today));
        assert!(plan_overdue_alerts(&[eq], &[], today).is_empty());
    }

    #[test]
    fn scan_is_idempotent_over_same_state() {
        let today = date(2025, 1, 1);
        let eq = equipment("Lathe #4", Some(date(2024, 12, 20)));

        let first = plan_overdue_alerts(std::slice::from_ref(&eq), &[], today);
        assert_eq!(first.len(), 1);

        // simulate the first run having persisted its alert
        let persisted = open_alert_for(eq.id);
        let second = plan_overdue_alerts(&[eq], &[persisted], today);
        assert!(second.is_empty());
    }
}
