//! Data model for the simulated patient and monitor.

pub mod patient;
pub mod vitals;

pub use patient::PatientProfile;
pub use vitals::{BloodPressure, HistoryEntry, MonitorState, VitalAlert, VitalsHistory, VitalsRecord};
