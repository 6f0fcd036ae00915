//! Document assembly: validate, fetch, render, serialize.

use super::filename::export_file_name;
use super::request::{ExportFailure, ExportOutcome, ExportRequest, ExportedDocument};
use crate::config::ExportConfig;
use crate::error::Result;
use crate::render::{
    render_section, render_title_block, Document, RenderContext, SectionData, SectionId,
    SectionOptions,
};
use crate::store::RecordStore;
use crate::writer::PdfWriterConfig;
use std::future::Future;

/// Which record categories an export needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchPlan {
    pub background: bool,
    pub surgery: bool,
    pub followups: bool,
    pub imaging: bool,
    pub labs: bool,
    pub notes: bool,
    pub visits: bool,
}

impl FetchPlan {
    /// Categories read by `sections`. The patient row is always fetched.
    pub fn for_sections(sections: &[SectionId]) -> Self {
        let has = |id| sections.contains(&id);
        Self {
            background: has(SectionId::Background),
            surgery: has(SectionId::Surgery),
            followups: has(SectionId::FollowUp),
            imaging: has(SectionId::Imaging),
            labs: has(SectionId::Labs),
            notes: has(SectionId::Notes),
            visits: has(SectionId::Visits) || has(SectionId::Bmi),
        }
    }
}

async fn fetch_if<T, F>(wanted: bool, fetch: F) -> Result<Vec<T>>
where
    F: Future<Output = Result<Vec<T>>>,
{
    if wanted {
        fetch.await
    } else {
        Ok(Vec::new())
    }
}

/// Lay out the title block and `sections` (already in canonical order).
///
/// The visit summary embeds the small BMI chart only when the BMI section is
/// not part of the same document.
pub fn render_document(data: &SectionData, sections: &[SectionId], config: &ExportConfig) -> Document {
    let options = SectionOptions {
        embed_bmi_chart: !sections.contains(&SectionId::Bmi),
    };
    let mut ctx = RenderContext::new(config);
    render_title_block(&mut ctx, &data.patient, config);
    for section in sections {
        render_section(&mut ctx, *section, data, &options);
    }
    ctx.into_document()
}

/// Export one patient's record as a PDF.
///
/// Request problems and a missing patient come back as
/// [`ExportOutcome::Rejected`]; store failures propagate as `Err`. Either way
/// no partial document is returned.
pub async fn export_patient_pdf<S: RecordStore>(
    store: &S,
    request: &ExportRequest,
    config: &ExportConfig,
) -> Result<ExportOutcome> {
    let request = match request.validate() {
        Ok(validated) => validated,
        Err(failure) => {
            log::info!("Export rejected: {}", failure);
            return Ok(failure.into());
        },
    };
    let id = request.patient_id.as_str();
    let plan = FetchPlan::for_sections(&request.sections);
    log::debug!("Export of {} with sections {:?}, fetch plan {:?}", id, request.sections, plan);

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
        fetch_if(plan.background, store.allergies(id)),
        fetch_if(plan.background, store.conditions(id)),
        fetch_if(plan.background, store.medications(id)),
        fetch_if(plan.background, store.social_history(id)),
        fetch_if(plan.surgery, store.surgeries(id)),
        fetch_if(plan.followups, store.followups(id)),
        fetch_if(plan.imaging, store.imaging(id)),
        fetch_if(plan.labs, store.labs(id)),
        fetch_if(plan.notes, store.notes(id)),
        fetch_if(plan.visits, store.visits(id)),
    )?;

    let Some(patient) = patient else {
        log::info!("Export rejected: patient {} not found", id);
        return Ok(ExportFailure::PatientNotFound.into());
    };

    let data = SectionData {
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
    };
    let document = render_document(&data, &request.sections, config);
    let page_count = document.page_count();

    let pdf_config = PdfWriterConfig::default()
        .with_title(format!("{} - {}", config.product_name, data.patient.display_name()))
        .with_subject(config.subtitle.clone())
        .with_compress(config.compress);
    let bytes = document.to_pdf(pdf_config)?;
    let file_name = export_file_name(data.patient.file_stem(), &config.file_suffix);

    log::info!(
        "Exported {} ({} pages, {} bytes) as {}",
        id,
        page_count,
        bytes.len(),
        file_name
    );

    Ok(ExportOutcome::Exported(ExportedDocument {
        file_name,
        bytes,
        page_count,
    }))
}
