use serde::Deserialize;

/// One row of the patient roster export. Missing columns read as empty
/// strings; unknown columns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientRecord {
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub vanguard_position: String,
    #[serde(default)]
    pub date_updated: String,
    #[serde(default)]
    pub emergency_contact_name: String,
    #[serde(default)]
    pub emergency_contact_relationship: String,
    #[serde(default)]
    pub emergency_contact_method: String,
    #[serde(default)]
    pub chronic_illness: String,
    #[serde(default)]
    pub previous_injuries: String,
    #[serde(default)]
    pub known_allergies: String,
    #[serde(default)]
    pub current_medications: String,
    #[serde(default)]
    pub aetheric_abnormalities: String,
}

/// One row of the visit log export, related to a patient by `patient_id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitRecord {
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub visit_date: String,
    #[serde(default)]
    pub presenting_complaint: String,
    #[serde(default)]
    pub current_symptoms: String,
    #[serde(default)]
    pub recent_exposures: String,
    #[serde(default)]
    pub attending_medic: String,
    #[serde(default)]
    pub clinical_summary: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub procedures_performed: String,
    #[serde(default)]
    pub treatment_plan: String,
    #[serde(default)]
    pub follow_up: String,
    #[serde(default)]
    pub discharge_status: String,
    #[serde(default)]
    pub additional_notes: String,
}

impl PatientRecord {
    /// A record needs an id and a name to appear in the roster.
    pub fn is_listable(&self) -> bool {
        !self.patient_id.is_empty() && !self.patient_name.is_empty()
    }

    pub fn general_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Race", self.race.as_str()),
            ("Gender", self.gender.as_str()),
            ("Age", self.age.as_str()),
            ("Vanguard Position", self.vanguard_position.as_str()),
            ("Date Updated", self.date_updated.as_str()),
        ]
    }

    pub fn emergency_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Name", self.emergency_contact_name.as_str()),
            ("Relationship", self.emergency_contact_relationship.as_str()),
            ("Contact Method", self.emergency_contact_method.as_str()),
        ]
    }

    pub fn condition_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Chronic Illness", self.chronic_illness.as_str()),
            ("Previous Injuries", self.previous_injuries.as_str()),
            ("Known Allergies", self.known_allergies.as_str()),
            ("Current Medications", self.current_medications.as_str()),
            ("Aetheric Abnormalities", self.aetheric_abnormalities.as_str()),
        ]
    }
}

impl VisitRecord {
    /// The fields shown in the visit pane, in display order.
    pub fn detail_fields(&self) -> [(&'static str, &str); 11] {
        [
            ("Presenting Complaint", self.presenting_complaint.as_str()),
            ("Current Symptoms", self.current_symptoms.as_str()),
            ("Recent Exposures", self.recent_exposures.as_str()),
            ("Attending Medic", self.attending_medic.as_str()),
            ("Clinical Summary", self.clinical_summary.as_str()),
            ("Diagnosis", self.diagnosis.as_str()),
            ("Procedures Performed", self.procedures_performed.as_str()),
            ("Treatment Plan", self.treatment_plan.as_str()),
            ("Follow-up", self.follow_up.as_str()),
            ("Discharge Status", self.discharge_status.as_str()),
            ("Additional Notes", self.additional_notes.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listable_requires_id_and_name() {
        let full = PatientRecord {
            patient_id: "p1".to_string(),
            patient_name: "Ada".to_string(),
            ..Default::default()
        };
        assert!(full.is_listable());

        let missing_id = PatientRecord {
            patient_name: "Ada".to_string(),
            ..Default::default()
        };
        assert!(!missing_id.is_listable());

        let missing_name = PatientRecord {
            patient_id: "p1".to_string(),
            ..Default::default()
        };
        assert!(!missing_name.is_listable());
    }

    #[test]
    fn test_general_fields_order() {
        let patient = PatientRecord {
            race: "Human".to_string(),
            gender: "F".to_string(),
            age: "34".to_string(),
            vanguard_position: "Scout".to_string(),
            date_updated: "2024-03-01".to_string(),
            ..Default::default()
        };
        let labels: Vec<&str> = patient.general_fields().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            ["Race", "Gender", "Age", "Vanguard Position", "Date Updated"]
        );
        assert_eq!(patient.general_fields()[3].1, "Scout");
    }

    #[test]
    fn test_visit_detail_fields_order() {
        let visit = VisitRecord::default();
        let labels: Vec<&str> = visit.detail_fields().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            [
                "Presenting Complaint",
                "Current Symptoms",
                "Recent Exposures",
                "Attending Medic",
                "Clinical Summary",
                "Diagnosis",
                "Procedures Performed",
                "Treatment Plan",
                "Follow-up",
                "Discharge Status",
                "Additional Notes",
            ]
        );
    }
}
