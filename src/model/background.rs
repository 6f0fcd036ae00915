//! Background records: conditions, medications, allergies, social history.

use super::lenient;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A known allergy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Allergy {
    pub id: String,
    pub patient_id: String,
    pub allergen: Option<String>,
    pub reaction: Option<String>,
    pub severity: Option<String>,
}

/// A chronic or past condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Condition {
    pub id: String,
    pub patient_id: String,
    pub condition_name: Option<String>,
    pub condition_status: Option<String>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub onset_date: Option<NaiveDateTime>,
    #[serde(rename = "type")]
    pub condition_type: Option<String>,
}

/// A current or past medication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Medication {
    pub id: String,
    pub patient_id: String,
    pub drug_name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    #[serde(rename = "type")]
    pub medication_type: Option<String>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub end_date: Option<NaiveDateTime>,
}

/// A lifestyle note (smoking, activity, diet, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialHistory {
    pub id: String,
    pub patient_id: String,
    pub category: Option<String>,
    pub value: Option<String>,
    pub notes: Option<String>,
}

impl_patient_scoped!(Allergy, Condition, Medication, SocialHistory);
