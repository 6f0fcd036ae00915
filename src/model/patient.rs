//! Patient demographics and intake snapshot.

use super::lenient;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Clinical status of a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    /// Under active care.
    Active,
    /// Care is complicated.
    Complicated,
    /// Deceased.
    Deceased,
    /// Any other status.
    #[serde(other)]
    Other,
}

impl PatientStatus {
    /// Label as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Complicated => "Complicated",
            Self::Deceased => "Deceased",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A patient row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Patient {
    pub id: String,
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub national_id: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub age: Option<i64>,
    pub gender: Option<String>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub dob: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub optional_phone: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub height: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub initial_weight: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub initial_bmi: Option<f64>,
    pub clinic_address: Option<String>,
    pub residency: Option<String>,
    pub referral: Option<String>,
    pub call_center_agent: Option<String>,
    pub status: Option<PatientStatus>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub first_visit_date: Option<NaiveDateTime>,
}

impl Patient {
    /// Name shown in the title block: the primary name, else the localized
    /// name, else "Unnamed patient".
    pub fn display_name(&self) -> &str {
        non_blank(&self.name)
            .or_else(|| non_blank(&self.name_ar))
            .unwrap_or("Unnamed patient")
    }

    /// Name used to derive the export file name.
    pub fn file_stem(&self) -> &str {
        non_blank(&self.name).unwrap_or("patient")
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
