//! Maintenance schedule arithmetic
//!
//! Pure date logic shared by the equipment service, the maintenance
//! recorder, the overdue-alert scan, and the PDF report. Every function
//! takes the reference date as a parameter; nothing here reads the
//! system clock.

use chrono::{Days, NaiveDate};

use crate::models::enums::{AlertSeverity, MaintenanceStatus};

/// Days ahead of the due date at which equipment is flagged DueSoon.
/// Applied uniformly across all call sites.
pub const DUE_SOON_THRESHOLD_DAYS: i64 = 7;

/// Compute the next maintenance due date from the last maintenance date
/// and the maintenance interval, in calendar days. Returns `None` when
/// no maintenance has ever been recorded.
pub fn next_due_date(last_maintenance: Option<NaiveDate>, interval_days: i32) -> Option<NaiveDate> {
    let last = last_maintenance?;
    last.checked_add_days(Days::new(interval_days.max(1) as u64))
}

/// Whole days between today and the due date. Negative when overdue.
pub fn days_until(next_due: NaiveDate, today: NaiveDate) -> i64 {
    (next_due - today).num_days()
}

/// Derive the maintenance status of a piece of equipment.
///
/// Equipment without a computable due date is `Unknown`. A due date of
/// today counts as DueSoon, not Overdue; any date strictly in the past
/// is Overdue regardless of magnitude.
pub fn status_for(next_due: Option<NaiveDate>, today: NaiveDate) -> MaintenanceStatus {
    let Some(due) = next_due else {
        return MaintenanceStatus::Unknown;
    };
    let remaining = days_until(due, today);
    if remaining < 0 {
        MaintenanceStatus::Overdue
    } else if remaining <= DUE_SOON_THRESHOLD_DAYS {
        MaintenanceStatus::DueSoon
    } else {
        MaintenanceStatus::Ok
    }
}

/// Alert severity for overdue equipment, escalating with the backlog.
pub fn overdue_severity(days_overdue: i64) -> AlertSeverity {
    if days_overdue > 14 {
        AlertSeverity::Critical
    } else if days_overdue > 7 {
        AlertSeverity::High
    } else {
        AlertSeverity::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn next_due_adds_interval_calendar_days() {
        assert_eq!(
            next_due_date(Some(date(2024, 11, 17)), 30),
            Some(date(2024, 12, 17))
        );
        assert_eq!(
            next_due_date(Some(date(2024, 2, 28)), 1),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            next_due_date(Some(date(2024, 12, 31)), 1),
            Some(date(2025, 1, 1))
        );
    }

    #[test]
    fn next_due_none_without_history() {
        assert_eq!(next_due_date(None, 30), None);
    }

    #[test]
    fn past_due_date_is_overdue() {
        let today = date(2025, 1, 1);
        assert_eq!(
            status_for(Some(date(2024, 12, 31)), today),
            MaintenanceStatus::Overdue
        );
        assert_eq!(
            status_for(Some(date(2020, 6, 1)), today),
            MaintenanceStatus::Overdue
        );
    }

    #[test]
    fn due_today_is_due_soon() {
        let today = date(2025, 1, 1);
        assert_eq!(status_for(Some(today), today), MaintenanceStatus::DueSoon);
    }

    #[test]
    fn due_within_threshold_is_due_soon() {
        let today = date(2025, 1, 1);
        assert_eq!(
            status_for(Some(date(2025, 1, 8)), today),
            MaintenanceStatus::DueSoon
        );
    }

    #[test]
    fn due_past_threshold_is_ok() {
        let today = date(2025, 1, 1);
        assert_eq!(
            status_for(Some(date(2025, 1, 9)), today),
            MaintenanceStatus::Ok
        );
        assert_eq!(
            status_for(Some(date(2025, 6, 1)), today),
            MaintenanceStatus::Ok
        );
    }

    #[test]
    fn no_due_date_is_unknown() {
        assert_eq!(status_for(None, date(2025, 1, 1)), MaintenanceStatus::Unknown);
    }

    #[test]
    fn severity_escalates_with_backlog() {
        assert_eq!(overdue_severity(1), AlertSeverity::Medium);
        assert_eq!(overdue_severity(7), AlertSeverity::Medium);
        assert_eq!(overdue_severity(8), AlertSeverity::High);
        assert_eq!(overdue_severity(14), AlertSeverity::High);
        assert_eq!(overdue_severity(15), AlertSeverity::Critical);
    }

    #[test]
    fn forty_five_day_old_maintenance_scenario() {
        // last maintenance 45 days before 2025-01-01 with a 30 day interval
        let today = date(2025, 1, 1);
        let last = date(2024, 11, 17);
        let due = next_due_date(Some(last), 30).unwrap();
        assert_eq!(due, date(2024, 12, 17));
        assert_eq!(status_for(Some(due), today), MaintenanceStatus::Overdue);
        let days_overdue = -days_until(due, today);
        assert_eq!(days_overdue, 15);
        assert_eq!(overdue_severity(days_overdue), AlertSeverity::Critical);
    }
}
