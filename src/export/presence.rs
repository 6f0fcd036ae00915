//! Which sections have anything to show for a patient.

use crate::error::Result;
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};

/// Per-section flag: true when the section would render at least one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPresence {
    pub overview: bool,
    pub background: bool,
    pub surgery: bool,
    pub follow_up: bool,
    pub imaging: bool,
    pub labs: bool,
    pub notes: bool,
    pub visits: bool,
}

impl SectionPresence {
    /// Whether any section has data.
    pub fn any(&self) -> bool {
        self.overview
            || self.background
            || self.surgery
            || self.follow_up
            || self.imaging
            || self.labs
            || self.notes
            || self.visits
    }
}

/// Report which sections have data. A blank id is all-false, not an error.
pub async fn section_presence<S: RecordStore>(store: &S, patient_id: &str) -> Result<SectionPresence> {
    let id = patient_id.trim();
    if id.is_empty() {
        return Ok(SectionPresence::default());
    }

    let (
        patient,
        allergies,
        conditions,
        medications,
        social_history,
        surgeries,
        followups,
        imaging,
        labs,
        notes,
        visits,
    ) = tokio::try_join!(
        store.patient(id),
        store.allergies(id),
        store.conditions(id),
        store.medications(id),
        store.social_history(id),
        store.surgeries(id),
        store.followups(id),
        store.imaging(id),
        store.labs(id),
        store.notes(id),
        store.visits(id),
    )?;

    Ok(SectionPresence {
        overview: patient.is_some(),
        background: !allergies.is_empty()
            || !conditions.is_empty()
            || !medications.is_empty()
            || !social_history.is_empty(),
        surgery: !surgeries.is_empty(),
        follow_up: !followups.is_empty(),
        imaging: !imaging.is_empty(),
        labs: !labs.is_empty(),
        notes: !notes.is_empty(),
        visits: !visits.is_empty(),
    })
}
