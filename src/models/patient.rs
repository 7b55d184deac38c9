use std::collections::BTreeMap;

/// Static description of the simulated patient.
#[derive(Debug, Clone)]
pub struct PatientProfile {
    pub condition: String,
    pub medication_schedule: BTreeMap<String, String>,
}

impl Default for PatientProfile {
    fn default() -> Self {
        let mut medication_schedule = BTreeMap::new();
        medication_schedule.insert("Mounjaro".to_string(), "0.5 mg weekly".to_string());
        Self {
            condition: "Diabetes".to_string(),
            medication_schedule,
        }
    }
}

impl PatientProfile {
    /// Query sent to the knowledge base when education is requested.
    pub fn education_query(&self) -> String {
        format!("patient education on {}", self.condition.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_query_lowercases_condition() {
        let profile = PatientProfile::default();
        assert_eq!(profile.education_query(), "patient education on diabetes");
        assert_eq!(
            profile.medication_schedule.get("Mounjaro").map(String::as_str),
            Some("0.5 mg weekly")
        );
    }
}
