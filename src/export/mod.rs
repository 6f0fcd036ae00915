//! Export entry points.
//!
//! [`export_patient_pdf`] turns a request into a finished PDF or a
//! user-facing refusal; [`section_presence`] tells a caller which sections
//! are worth offering.

mod assembler;
mod filename;
mod presence;
mod request;

pub use assembler::{export_patient_pdf, render_document, FetchPlan};
pub use filename::{export_file_name, sanitize_file_name};
pub use presence::{section_presence, SectionPresence};
pub use request::{
    ExportFailure, ExportOutcome, ExportRequest, ExportResponse, ExportedDocument, ValidatedRequest,
};
