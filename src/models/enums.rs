//! Shared domain enums
//!
//! Classification fields are stored as SMALLINT codes in the database;
//! these enums carry the code mapping and display labels.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// MaintenanceStatus
// ---------------------------------------------------------------------------

/// Derived maintenance urgency of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum MaintenanceStatus {
    Ok = 0,
    DueSoon = 1,
    Overdue = 2,
    /// No computable due date (no maintenance history)
    Unknown = 3,
}

impl From<i16> for MaintenanceStatus {
    fn from(v: i16) -> Self {
        match v {
            0 => MaintenanceStatus::Ok,
            1 => MaintenanceStatus::DueSoon,
            2 => MaintenanceStatus::Overdue,
            _ => MaintenanceStatus::Unknown,
        }
    }
}

impl From<MaintenanceStatus> for i16 {
    fn from(s: MaintenanceStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceStatus::Ok => "OK",
            MaintenanceStatus::DueSoon => "Due Soon",
            MaintenanceStatus::Overdue => "Overdue",
            MaintenanceStatus::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentCategory
// ---------------------------------------------------------------------------

/// Equipment category codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum EquipmentCategory {
    Motor = 0,
    Pump = 1,
    Conveyor = 2,
    Press = 3,
    Other = 4,
}

impl From<i16> for EquipmentCategory {
    fn from(v: i16) -> Self {
        match v {
            0 => EquipmentCategory::Motor,
            1 => EquipmentCategory::Pump,
            2 => EquipmentCategory::Conveyor,
            3 => EquipmentCategory::Press,
            _ => EquipmentCategory::Other,
        }
    }
}

impl From<EquipmentCategory> for i16 {
    fn from(c: EquipmentCategory) -> Self {
        c as i16
    }
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentCategory::Motor => "Motor",
            EquipmentCategory::Pump => "Pump",
            EquipmentCategory::Conveyor => "Conveyor",
            EquipmentCategory::Press => "Press",
            EquipmentCategory::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentState
// ---------------------------------------------------------------------------

/// Operational state codes (distinct from the derived maintenance status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum EquipmentState {
    Active = 0,
    Inactive = 1,
    Maintenance = 2,
    Broken = 3,
}

impl From<i16> for EquipmentState {
    fn from(v: i16) -> Self {
        match v {
            0 => EquipmentState::Active,
            1 => EquipmentState::Inactive,
            2 => EquipmentState::Maintenance,
            3 => EquipmentState::Broken,
            _ => EquipmentState::Active,
        }
    }
}

impl From<EquipmentState> for i16 {
    fn from(s: EquipmentState) -> Self {
        s as i16
    }
}

impl std::fmt::Display for EquipmentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentState::Active => "Active",
            EquipmentState::Inactive => "Inactive",
            EquipmentState::Maintenance => "Maintenance",
            EquipmentState::Broken => "Broken",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Criticality
// ---------------------------------------------------------------------------

/// Equipment criticality codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum Criticality {
    Low = 0,
    Medium = 1,
    High = 2,
    Critical = 3,
}

impl From<i16> for Criticality {
    fn from(v: i16) -> Self {
        match v {
            0 => Criticality::Low,
            2 => Criticality::High,
            3 => Criticality::Critical,
            _ => Criticality::Medium,
        }
    }
}

impl From<Criticality> for i16 {
    fn from(c: Criticality) -> Self {
        c as i16
    }
}

// ---------------------------------------------------------------------------
// AlertType
// ---------------------------------------------------------------------------

/// Alert type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum AlertType {
    MaintenanceDue = 0,
    HighHours = 1,
    Anomaly = 2,
    Manual = 3,
}

impl From<i16> for AlertType {
    fn from(v: i16) -> Self {
        match v {
            0 => AlertType::MaintenanceDue,
            1 => AlertType::HighHours,
            2 => AlertType::Anomaly,
            _ => AlertType::Manual,
        }
    }
}

impl From<AlertType> for i16 {
    fn from(t: AlertType) -> Self {
        t as i16
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AlertType::MaintenanceDue => "Maintenance Due",
            AlertType::HighHours => "High Hours",
            AlertType::Anomaly => "Anomaly",
            AlertType::Manual => "Manual",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AlertSeverity
// ---------------------------------------------------------------------------

/// Alert severity codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum AlertSeverity {
    Low = 0,
    Medium = 1,
    High = 2,
    Critical = 3,
}

impl From<i16> for AlertSeverity {
    fn from(v: i16) -> Self {
        match v {
            0 => AlertSeverity::Low,
            2 => AlertSeverity::High,
            3 => AlertSeverity::Critical,
            _ => AlertSeverity::Medium,
        }
    }
}

impl From<AlertSeverity> for i16 {
    fn from(s: AlertSeverity) -> Self {
        s as i16
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AlertSeverity::Low => "Low",
            AlertSeverity::Medium => "Medium",
            AlertSeverity::High => "High",
            AlertSeverity::Critical => "Critical",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ReadingStatus
// ---------------------------------------------------------------------------

/// Machine reading status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum ReadingStatus {
    Normal = 0,
    Warning = 1,
    Critical = 2,
}

impl From<i16> for ReadingStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => ReadingStatus::Warning,
            2 => ReadingStatus::Critical,
            _ => ReadingStatus::Normal,
        }
    }
}

impl From<ReadingStatus> for i16 {
    fn from(s: ReadingStatus) -> Self {
        s as i16
    }
}
