use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::vitals::{
    MonitorState, VitalAlert, VitalsRecord, DIASTOLIC_RANGE, HEART_RATE_RANGE, OXYGEN_RANGE,
    SYSTOLIC_RANGE,
};

const HEART_RATE_DRIFT: f64 = 2.0;
const SYSTOLIC_DRIFT: i32 = 5;
const DIASTOLIC_DRIFT: i32 = 3;
const OXYGEN_DRIFT: f64 = 1.0;

const HEART_RATE_ALERT_ABOVE: f64 = 90.0;
const SYSTOLIC_ALERT_ABOVE: i32 = 130;

pub fn analyze_vitals(vitals: &VitalsRecord) -> Vec<VitalAlert> {
    let mut alerts = Vec::new();

    if vitals.heart_rate > HEART_RATE_ALERT_ABOVE {
        alerts.push(VitalAlert::HighHeartRate);
    }

    if vitals.blood_pressure.systolic > SYSTOLIC_ALERT_ABOVE {
        alerts.push(VitalAlert::HighBloodPressure);
    }

    alerts
}

/// Random-walk generator for the bedside readings.
///
/// Each tick nudges every vital by a bounded delta, clamps it back into its
/// physiological range, re-derives alerts and records a history snapshot.
pub struct VitalsSimulator<R: Rng = StdRng> {
    rng: R,
}

impl VitalsSimulator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> VitalsSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn tick(&mut self, state: &mut MonitorState) {
        self.tick_at(state, Local::now());
    }

    pub fn tick_at(&mut self, state: &mut MonitorState, now: DateTime<Local>) {
        let vitals = &mut state.vitals;

        let heart_rate = vitals.heart_rate + self.rng.gen_range(-HEART_RATE_DRIFT..=HEART_RATE_DRIFT);
        vitals.heart_rate = heart_rate.clamp(HEART_RATE_RANGE.0, HEART_RATE_RANGE.1);

        let systolic = vitals.blood_pressure.systolic + self.rng.gen_range(-SYSTOLIC_DRIFT..=SYSTOLIC_DRIFT);
        let diastolic = vitals.blood_pressure.diastolic + self.rng.gen_range(-DIASTOLIC_DRIFT..=DIASTOLIC_DRIFT);
        vitals.blood_pressure.systolic = systolic.clamp(SYSTOLIC_RANGE.0, SYSTOLIC_RANGE.1);
        vitals.blood_pressure.diastolic = diastolic.clamp(DIASTOLIC_RANGE.0, DIASTOLIC_RANGE.1);

        let oxygen = vitals.oxygen_saturation + self.rng.gen_range(-OXYGEN_DRIFT..=OXYGEN_DRIFT);
        vitals.oxygen_saturation = oxygen.clamp(OXYGEN_RANGE.0, OXYGEN_RANGE.1);

        vitals.alerts = analyze_vitals(vitals);

        let snapshot = vitals.snapshot(now);
        state.history.push(snapshot);

        debug!(
            heart_rate = state.vitals.heart_rate,
            blood_pressure = %state.vitals.blood_pressure,
            oxygen_saturation = state.vitals.oxygen_saturation,
            alerts = %state.vitals.alerts_summary(),
            "Medical data updated"
        );
    }
}
