//! Export request, failures and the wire response.

use crate::render::SectionId;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A caller's export request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportRequest {
    /// Patient to export
    pub patient_id: String,
    /// Requested section identifiers, in any order
    pub sections: Vec<String>,
}

impl ExportRequest {
    /// Create a request from section identifiers.
    pub fn new<I, S>(patient_id: impl Into<String>, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patient_id: patient_id.into(),
            sections: sections.into_iter().map(Into::into).collect(),
        }
    }

    /// Check the request and resolve its sections into canonical order.
    ///
    /// Duplicates collapse and unknown identifiers are dropped with a warning.
    pub fn validate(&self) -> std::result::Result<ValidatedRequest, ExportFailure> {
        let patient_id = self.patient_id.trim();
        if patient_id.is_empty() {
            return Err(ExportFailure::InvalidPatientId);
        }

        let mut sections = BTreeSet::new();
        for raw in &self.sections {
            match SectionId::from_str(raw.trim()) {
                Some(id) => {
                    sections.insert(id);
                },
                None if raw.trim().is_empty() => {},
                None => log::warn!("Ignoring unknown export section '{}'", raw),
            }
        }
        if sections.is_empty() {
            return Err(ExportFailure::NoSections);
        }

        Ok(ValidatedRequest {
            patient_id: patient_id.to_string(),
            sections: sections.into_iter().collect(),
        })
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Trimmed patient id
    pub patient_id: String,
    /// Distinct sections in canonical order
    pub sections: Vec<SectionId>,
}

impl ValidatedRequest {
    /// Whether `id` was requested.
    pub fn includes(&self, id: SectionId) -> bool {
        self.sections.contains(&id)
    }
}

/// Reasons an export is refused. The message is meant for the end user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportFailure {
    #[error("A valid patient id is required.")]
    InvalidPatientId,

    #[error("Select at least one section to export.")]
    NoSections,

    #[error("Patient record not found.")]
    PatientNotFound,
}

/// A finished export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    /// Suggested download name
    pub file_name: String,
    /// PDF bytes
    pub bytes: Vec<u8>,
    /// Number of pages rendered
    pub page_count: usize,
}

impl ExportedDocument {
    /// PDF bytes as standard base64.
    pub fn base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Result of an export call that reached the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Exported(ExportedDocument),
    Rejected(ExportFailure),
}

impl ExportOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ExportOutcome::Exported(_))
    }

    /// The document, if the export succeeded.
    pub fn document(&self) -> Option<&ExportedDocument> {
        match self {
            ExportOutcome::Exported(doc) => Some(doc),
            ExportOutcome::Rejected(_) => None,
        }
    }

    /// The failure, if the export was refused.
    pub fn failure(&self) -> Option<&ExportFailure> {
        match self {
            ExportOutcome::Exported(_) => None,
            ExportOutcome::Rejected(failure) => Some(failure),
        }
    }
}

impl From<ExportFailure> for ExportOutcome {
    fn from(failure: ExportFailure) -> Self {
        ExportOutcome::Rejected(failure)
    }
}

/// JSON shape returned to remote callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ExportOutcome> for ExportResponse {
    fn from(outcome: &ExportOutcome) -> Self {
        match outcome {
            ExportOutcome::Exported(doc) => Self {
                ok: true,
                file_name: Some(doc.file_name.clone()),
                base64: Some(doc.base64()),
                error: None,
            },
            ExportOutcome::Rejected(failure) => Self {
                ok: false,
                file_name: None,
                base64: None,
                error: Some(failure.to_string()),
            },
        }
    }
}
