//! Data models for MainTrack

pub mod alert;
pub mod enums;
pub mod equipment;
pub mod maintenance;
pub mod reading;

// Re-export commonly used types
pub use alert::{Alert, CreateAlert};
pub use enums::{AlertSeverity, AlertType, EquipmentState, MaintenanceStatus};
pub use equipment::{Equipment, StatusSummary};
pub use maintenance::{MaintenanceLog, PartUsed};
pub use reading::MachineReading;
