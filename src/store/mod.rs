//! Record store collaborator.
//!
//! The export engine never owns clinical data: it asks a [`RecordStore`] for
//! one patient row and for the per-category record lists scoped to that
//! patient. Lists come back in fetch order.

mod memory;

pub use memory::{Dataset, MemoryStore};

use crate::error::Result;
use crate::model::{
    Allergy, Condition, Followup, Imaging, Lab, Medication, Note, Patient, SocialHistory, Surgery,
    Visit,
};

/// Read access to patients and their clinical records.
///
/// Implementations report infrastructure failures as [`crate::Error::Store`];
/// an absent patient is `Ok(None)`, not an error.
#[allow(async_fn_in_trait)]
pub trait RecordStore: Send + Sync {
    /// Fetch one patient by id.
    async fn patient(&self, patient_id: &str) -> Result<Option<Patient>>;

    /// Allergies of a patient.
    async fn allergies(&self, patient_id: &str) -> Result<Vec<Allergy>>;

    /// Conditions of a patient.
    async fn conditions(&self, patient_id: &str) -> Result<Vec<Condition>>;

    /// Medications of a patient.
    async fn medications(&self, patient_id: &str) -> Result<Vec<Medication>>;

    /// Social history entries of a patient.
    async fn social_history(&self, patient_id: &str) -> Result<Vec<SocialHistory>>;

    /// Surgeries of a patient.
    async fn surgeries(&self, patient_id: &str) -> Result<Vec<Surgery>>;

    /// Follow-up calls of a patient.
    async fn followups(&self, patient_id: &str) -> Result<Vec<Followup>>;

    /// Imaging studies of a patient.
    async fn imaging(&self, patient_id: &str) -> Result<Vec<Imaging>>;

    /// Lab results of a patient.
    async fn labs(&self, patient_id: &str) -> Result<Vec<Lab>>;

    /// Notes of a patient.
    async fn notes(&self, patient_id: &str) -> Result<Vec<Note>>;

    /// Visits of a patient.
    async fn visits(&self, patient_id: &str) -> Result<Vec<Visit>>;
}
