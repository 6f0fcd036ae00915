//! In-memory record store loaded from a JSON dataset.

use super::RecordStore;
use crate::error::{Error, Result};
use crate::model::{
    Allergy, Condition, Followup, Imaging, Lab, Medication, Note, Patient, PatientScoped,
    SocialHistory, Surgery, Visit,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A dump of the clinic tables.
///
/// Every category is a flat list; records point at their patient through
/// `patientId`. Missing tables are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub patients: Vec<Patient>,
    pub allergies: Vec<Allergy>,
    pub conditions: Vec<Condition>,
    pub medications: Vec<Medication>,
    pub social_history: Vec<SocialHistory>,
    pub surgeries: Vec<Surgery>,
    pub followups: Vec<Followup>,
    pub imaging: Vec<Imaging>,
    pub labs: Vec<Lab>,
    pub notes: Vec<Note>,
    pub visits: Vec<Visit>,
}

/// Record store backed by a [`Dataset`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Dataset,
}

impl MemoryStore {
    /// Wrap a dataset, rejecting duplicate or blank patient ids.
    pub fn new(data: Dataset) -> Result<Self> {
        let mut seen = HashSet::new();
        for patient in &data.patients {
            if patient.id.trim().is_empty() {
                return Err(Error::InvalidDataset("patient with blank id".to_string()));
            }
            if !seen.insert(patient.id.as_str()) {
                return Err(Error::InvalidDataset(format!(
                    "duplicate patient id '{}'",
                    patient.id
                )));
            }
        }
        log::debug!("Loaded dataset with {} patients", data.patients.len());
        Ok(Self { data })
    }

    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Load a dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.data
    }
}

fn scoped<T: PatientScoped + Clone>(records: &[T], patient_id: &str) -> Vec<T> {
    records
        .iter()
        .filter(|r| r.patient_id() == patient_id)
        .cloned()
        .collect()
}

impl RecordStore for MemoryStore {
    async fn patient(&self, patient_id: &str) -> Result<Option<Patient>> {
        Ok(self.data.patients.iter().find(|p| p.id == patient_id).cloned())
    }

    async fn allergies(&self, patient_id: &str) -> Result<Vec<Allergy>> {
        Ok(scoped(&self.data.allergies, patient_id))
    }

    async fn conditions(&self, patient_id: &str) -> Result<Vec<Condition>> {
        Ok(scoped(&self.data.conditions, patient_id))
    }

    async fn medications(&self, patient_id: &str) -> Result<Vec<Medication>> {
        Ok(scoped(&self.data.medications, patient_id))
    }

    async fn social_history(&self, patient_id: &str) -> Result<Vec<SocialHistory>> {
        Ok(scoped(&self.data.social_history, patient_id))
    }

    async fn surgeries(&self, patient_id: &str) -> Result<Vec<Surgery>> {
        Ok(scoped(&self.data.surgeries, patient_id))
    }

    async fn followups(&self, patient_id: &str) -> Result<Vec<Followup>> {
        Ok(scoped(&self.data.followups, patient_id))
    }

    async fn imaging(&self, patient_id: &str) -> Result<Vec<Imaging>> {
        Ok(scoped(&self.data.imaging, patient_id))
    }

    async fn labs(&self, patient_id: &str) -> Result<Vec<Lab>> {
        Ok(scoped(&self.data.labs, patient_id))
    }

    async fn notes(&self, patient_id: &str) -> Result<Vec<Note>> {
        Ok(scoped(&self.data.notes, patient_id))
    }

    async fn visits(&self, patient_id: &str) -> Result<Vec<Visit>> {
        Ok(scoped(&self.data.visits, patient_id))
    }
}
