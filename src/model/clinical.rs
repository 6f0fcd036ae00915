//! Care-episode records: surgeries, follow-ups, imaging, labs, notes, visits.

use super::lenient;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A surgical procedure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Surgery {
    pub id: String,
    pub patient_id: String,
    pub procedure_name: Option<String>,
    pub procedure_type: Option<String>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub surgery_date: Option<NaiveDateTime>,
    pub hospital_name: Option<String>,
    pub surgeon_name: Option<String>,
    pub first_assistant: Option<String>,
    pub second_assistant: Option<String>,
    pub dissection_by: Option<String>,
    pub camera_man: Option<String>,
    pub operative_notes: Option<String>,
    pub summary_notes: Option<String>,
}

/// A post-operative follow-up call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Followup {
    pub id: String,
    pub patient_id: String,
    #[serde(deserialize_with = "lenient::datetime")]
    pub call_date: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub scheduled_visit_date: Option<NaiveDateTime>,
    pub medication_adherence: Option<Value>,
    pub diet_notes: Option<String>,
    pub activity_level: Option<String>,
    pub bowel_movement: Option<String>,
    pub urine_frequency: Option<String>,
    pub symptoms: Option<Value>,
    pub spirometer: Option<String>,
}

/// An imaging study.
///
/// `report` is free text that may carry JSON, or structured JSON outright.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Imaging {
    pub id: String,
    pub patient_id: String,
    pub study_name: Option<String>,
    pub modality: Option<String>,
    pub category: Option<String>,
    pub report: Option<Value>,
    pub impression: Option<String>,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub study_date: Option<NaiveDateTime>,
}

/// A lab panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lab {
    pub id: String,
    pub patient_id: String,
    pub test_name: Option<String>,
    pub results: Option<Value>,
    pub category: Option<String>,
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub lab_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

/// A narrative note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Note {
    pub id: String,
    pub patient_id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub is_pinned: Option<bool>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub created_at: Option<NaiveDateTime>,
}

/// A clinic visit with vitals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Visit {
    pub id: String,
    pub patient_id: String,
    pub urgent_purpose: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub weight: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub bmi: Option<f64>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub visit_date: Option<NaiveDateTime>,
    pub visit_type: Option<String>,
    pub wound_status: Option<String>,
    pub clinical_findings: Option<String>,
    pub new_prescriptions: Option<Value>,
    pub investigations_ordered: Option<Value>,
    pub recommendations: Option<String>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub next_appointment_date: Option<NaiveDateTime>,
}

impl_patient_scoped!(Surgery, Followup, Imaging, Lab, Note, Visit);
