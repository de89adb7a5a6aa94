//! API handlers for MainTrack REST endpoints

pub mod alerts;
pub mod equipment;
pub mod health;
pub mod maintenance;
pub mod openapi;
pub mod readings;
pub mod reports;
