use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Maximum number of snapshots retained in [`VitalsHistory`].
pub const HISTORY_CAPACITY: usize = 5;

pub const HEART_RATE_RANGE: (f64, f64) = (60.0, 100.0);
pub const SYSTOLIC_RANGE: (i32, i32) = (90, 140);
pub const DIASTOLIC_RANGE: (i32, i32) = (60, 90);
pub const OXYGEN_RANGE: (f64, f64) = (90.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BloodPressure {
    pub systolic: i32,
    pub diastolic: i32,
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VitalAlert {
    HighHeartRate,
    HighBloodPressure,
}

impl VitalAlert {
    pub fn message(&self) -> &'static str {
        match self {
            VitalAlert::HighHeartRate => "High heart rate",
            VitalAlert::HighBloodPressure => "High blood pressure",
        }
    }
}

impl fmt::Display for VitalAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Current bedside readings for the simulated patient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsRecord {
    pub heart_rate: f64,
    pub blood_pressure: BloodPressure,
    pub oxygen_saturation: f64,
    pub alerts: Vec<VitalAlert>,
}

impl Default for VitalsRecord {
    fn default() -> Self {
        Self {
            heart_rate: 72.0,
            blood_pressure: BloodPressure {
                systolic: 120,
                diastolic: 80,
            },
            oxygen_saturation: 98.0,
            alerts: Vec::new(),
        }
    }
}

impl VitalsRecord {
    /// Alerts rendered for display: comma-joined, or `"None"` when clear.
    pub fn alerts_summary(&self) -> String {
        if self.alerts.is_empty() {
            return "None".to_string();
        }
        self.alerts
            .iter()
            .map(VitalAlert::message)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn snapshot(&self, time: DateTime<Local>) -> HistoryEntry {
        HistoryEntry {
            time,
            heart_rate: self.heart_rate,
            blood_pressure: self.blood_pressure,
            oxygen_saturation: self.oxygen_saturation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub time: DateTime<Local>,
    pub heart_rate: f64,
    pub blood_pressure: BloodPressure,
    pub oxygen_saturation: f64,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: HR {:.1}, BP {}, SpO2 {:.1}%",
            self.time.format("%H:%M:%S"),
            self.heart_rate,
            self.blood_pressure,
            self.oxygen_saturation
        )
    }
}

/// FIFO buffer of the most recent snapshots, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VitalsHistory {
    entries: VecDeque<HistoryEntry>,
}

impl VitalsHistory {
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

/// All mutable monitor state, owned by the session and handed to the simulator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonitorState {
    pub vitals: VitalsRecord,
    pub history: VitalsHistory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry_at(second: u32, heart_rate: f64) -> HistoryEntry {
        let time = Local.with_ymd_and_hms(2024, 3, 1, 9, 15, second).unwrap();
        HistoryEntry {
            time,
            heart_rate,
            blood_pressure: BloodPressure {
                systolic: 118,
                diastolic: 76,
            },
            oxygen_saturation: 97.31,
        }
    }

    #[test]
    fn default_record_matches_admission_baseline() {
        let vitals = VitalsRecord::default();
        assert_eq!(vitals.heart_rate, 72.0);
        assert_eq!(vitals.blood_pressure.to_string(), "120/80");
        assert_eq!(vitals.oxygen_saturation, 98.0);
        assert_eq!(vitals.alerts_summary(), "None");
    }

    #[test]
    fn alerts_summary_joins_in_order() {
        let vitals = VitalsRecord {
            alerts: vec![VitalAlert::HighHeartRate, VitalAlert::HighBloodPressure],
            ..VitalsRecord::default()
        };
        assert_eq!(
            vitals.alerts_summary(),
            "High heart rate, High blood pressure"
        );
    }

    #[test]
    fn history_evicts_oldest_first() {
        let mut history = VitalsHistory::default();
        for second in 0..7 {
            history.push(entry_at(second, 60.0 + second as f64));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let rates: Vec<f64> = history.iter().map(|e| e.heart_rate).collect();
        assert_eq!(rates, vec![62.0, 63.0, 64.0, 65.0, 66.0]);
        assert_eq!(history.iter().last().map(|e| e.heart_rate), Some(66.0));
    }

    #[test]
    fn history_entry_renders_one_line() {
        let line = entry_at(5, 71.96).to_string();
        assert_eq!(line, "09:15:05: HR 72.0, BP 118/76, SpO2 97.3%");
    }
}
