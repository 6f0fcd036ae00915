//! Section renderers.
//!
//! Each exportable section maps to one renderer function through
//! [`SectionId::renderer`]. Renderers draw a heading, a one-sentence intro,
//! then either an empty-state sentence or one bulleted block per record.

use super::chart::{bmi_series, draw_bmi_chart, ChartOptions};
use super::context::{RenderContext, TextStyle};
use super::format::{fmt, format_day, has_text, structured_lines};
use crate::config::ExportConfig;
use crate::layout::palette;
use crate::model::{
    Allergy, Condition, Followup, Imaging, Lab, Medication, Note, Patient, SocialHistory, Surgery,
    Visit,
};
use serde::{Deserialize, Serialize};

/// Identifier of an exportable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    Overview,
    Background,
    Surgery,
    FollowUp,
    Imaging,
    Labs,
    Notes,
    Visits,
    Bmi,
}

/// Signature shared by every section renderer.
pub type SectionRenderer = fn(&mut RenderContext, &SectionData, &SectionOptions);

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Background => "background",
            Self::Surgery => "surgery",
            Self::FollowUp => "followUp",
            Self::Imaging => "imaging",
            Self::Labs => "labs",
            Self::Notes => "notes",
            Self::Visits => "visits",
            Self::Bmi => "bmi",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "overview" => Some(Self::Overview),
            "background" => Some(Self::Background),
            "surgery" => Some(Self::Surgery),
            "followUp" => Some(Self::FollowUp),
            "imaging" => Some(Self::Imaging),
            "labs" => Some(Self::Labs),
            "notes" => Some(Self::Notes),
            "visits" => Some(Self::Visits),
            "bmi" => Some(Self::Bmi),
            _ => None,
        }
    }

    /// All sections in canonical render order.
    pub fn all() -> &'static [SectionId] {
        &[
            Self::Overview,
            Self::Background,
            Self::Surgery,
            Self::FollowUp,
            Self::Imaging,
            Self::Labs,
            Self::Notes,
            Self::Visits,
            Self::Bmi,
        ]
    }

    /// Heading drawn above the section.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Patient Snapshot",
            Self::Background => "Clinical Background",
            Self::Surgery => "Surgery Timeline",
            Self::FollowUp => "Follow-Up Log",
            Self::Imaging => "Imaging Review",
            Self::Labs => "Lab Results",
            Self::Notes => "Clinical Notes",
            Self::Visits => "Visit Summary",
            Self::Bmi => "BMI Trend",
        }
    }

    /// Sentence drawn under the heading.
    pub fn intro(&self) -> &'static str {
        match self {
            Self::Overview => {
                "Snapshot of demographics and initial measurements captured during intake."
            },
            Self::Background => {
                "Highlights of chronic conditions, current therapies, allergies, and lifestyle notes."
            },
            Self::Surgery => "Documented procedures and operative summaries.",
            Self::FollowUp => "Post-op check-ins and structured follow-up calls.",
            Self::Imaging => "Key imaging studies and impressions.",
            Self::Labs => "Lab panels and flagged findings.",
            Self::Notes => "Narrative notes and team observations.",
            Self::Visits => "Visit-level vitals, plans, and follow-through.",
            Self::Bmi => {
                "Trend line shows recorded BMI measurements from documented visits. Use this view to discuss progress and targets."
            },
        }
    }

    /// Renderer for this section.
    pub fn renderer(self) -> SectionRenderer {
        match self {
            Self::Overview => render_overview,
            Self::Background => render_background,
            Self::Surgery => render_surgery,
            Self::FollowUp => render_followups,
            Self::Imaging => render_imaging,
            Self::Labs => render_labs,
            Self::Notes => render_notes,
            Self::Visits => render_visits,
            Self::Bmi => render_bmi,
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the renderers read, fetched up front.
///
/// Categories that were not fetched are empty.
#[derive(Debug, Clone, Default)]
pub struct SectionData {
    pub patient: Patient,
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

/// Per-export switches shared by the renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionOptions {
    /// Draw the small BMI chart at the end of the visit summary.
    pub embed_bmi_chart: bool,
}

/// Run the renderer for `id`.
pub fn render_section(
    ctx: &mut RenderContext,
    id: SectionId,
    data: &SectionData,
    options: &SectionOptions,
) {
    log::debug!("Rendering section {}", id);
    (id.renderer())(ctx, data, options);
}

/// Product name, subtitle, divider and patient identity lines.
pub fn render_title_block(ctx: &mut RenderContext, patient: &Patient, config: &ExportConfig) {
    ctx.draw_text_line(
        &config.product_name,
        TextStyle::bold(20.0).with_color(palette::BRAND),
    );
    ctx.draw_text_line(
        &config.subtitle,
        TextStyle::regular(13.0).with_color(palette::SUBTITLE),
    );
    ctx.advance(4.0);
    ctx.draw_rule(1.0, palette::TITLE_RULE);
    ctx.advance(16.0);
    ctx.draw_key_value("Patient", patient.display_name());
    ctx.draw_key_value("Patient ID", &patient.id);
    ctx.draw_key_value("Generated", &format_day(config.generated_date()));
    ctx.advance(12.0);
}

fn heading(ctx: &mut RenderContext, id: SectionId) {
    ctx.draw_section_title(id.title());
    ctx.draw_wrapped_text(id.intro(), 10.5, 0.0, None);
    ctx.advance(6.0);
}

fn empty_state(ctx: &mut RenderContext, message: &str) {
    ctx.draw_wrapped_text(message, 10.5, 0.0, None);
}

fn detail(ctx: &mut RenderContext, text: &str) {
    ctx.draw_wrapped_text(text, 10.0, 16.0, Some(palette::MUTED));
}

fn subheading(ctx: &mut RenderContext, text: &str) {
    ctx.draw_text_line(text, TextStyle::bold(12.0).with_color(palette::SUBHEADING));
}

fn render_overview(ctx: &mut RenderContext, data: &SectionData, _options: &SectionOptions) {
    heading(ctx, SectionId::Overview);
    let patient = &data.patient;
    ctx.draw_key_value("Age", &fmt(&patient.age));
    ctx.draw_key_value("Gender", &fmt(&patient.gender));
    ctx.draw_key_value("Date of Birth", &fmt(&patient.dob));
    ctx.draw_key_value("Phone", &fmt(&patient.phone));
    ctx.draw_key_value("Alternate Phone", &fmt(&patient.optional_phone));
    ctx.draw_key_value("Height (cm)", &fmt(&patient.height));
    ctx.draw_key_value("Initial Weight (kg)", &fmt(&patient.initial_weight));
    ctx.draw_key_value("Initial BMI", &fmt(&patient.initial_bmi));
    ctx.draw_key_value("Status", &fmt(&patient.status));
    ctx.draw_key_value("First Visit", &fmt(&patient.first_visit_date));
    ctx.advance(8.0);
}

fn render_background(ctx: &mut RenderContext, data: &SectionData, _options: &SectionOptions) {
    heading(ctx, SectionId::Background);

    if !data.conditions.is_empty() {
        subheading(ctx, "Conditions");
        for condition in &data.conditions {
            ctx.draw_bullet(&format!(
                "{} ({})",
                fmt(&condition.condition_name),
                fmt(&condition.condition_status)
            ));
            detail(
                ctx,
                &format!(
                    "Type: {} | Onset: {}",
                    fmt(&condition.condition_type),
                    fmt(&condition.onset_date)
                ),
            );
        }
        ctx.advance(8.0);
    }

    if !data.medications.is_empty() {
        subheading(ctx, "Medications");
        for med in &data.medications {
            ctx.draw_bullet(&format!(
                "{} {} - {}",
                fmt(&med.drug_name),
                fmt(&med.dosage),
                fmt(&med.frequency)
            ));
            detail(
                ctx,
                &format!(
                    "Type: {} | Start: {} | End: {}",
                    fmt(&med.medication_type),
                    fmt(&med.start_date),
                    fmt(&med.end_date)
                ),
            );
        }
        ctx.advance(8.0);
    }

    if !data.allergies.is_empty() {
        subheading(ctx, "Allergies");
        for allergy in &data.allergies {
            ctx.draw_bullet(&format!("{} - {}", fmt(&allergy.allergen), fmt(&allergy.reaction)));
            detail(ctx, &format!("Severity: {}", fmt(&allergy.severity)));
        }
        ctx.advance(8.0);
    }

    if !data.social_history.is_empty() {
        subheading(ctx, "Lifestyle");
        for item in &data.social_history {
            ctx.draw_bullet(&format!("{}: {}", fmt(&item.category), fmt(&item.value)));
            if has_text(&item.notes) {
                detail(ctx, &format!("Notes: {}", fmt(&item.notes)));
            }
        }
        ctx.advance(8.0);
    }

    if data.conditions.is_empty()
        && data.medications.is_empty()
        && data.allergies.is_empty()
        && data.social_history.is_empty()
    {
        empty_state(ctx, "No background items recorded yet.");
    }
}

fn render_surgery(ctx: &mut RenderContext, data: &SectionData, _options: &SectionOptions) {
    heading(ctx, SectionId::Surgery);
    if data.surgeries.is_empty() {
        empty_state(ctx, "No surgical entries recorded.");
        return;
    }
    for surgery in &data.surgeries {
        ctx.draw_bullet(&format!(
            "{} ({})",
            fmt(&surgery.procedure_name),
            fmt(&surgery.procedure_type)
        ));
        detail(
            ctx,
            &format!(
                "Date: {} | Hospital: {}",
                fmt(&surgery.surgery_date),
                fmt(&surgery.hospital_name)
            ),
        );
        if has_text(&surgery.summary_notes) {
            detail(ctx, &format!("Summary: {}", fmt(&surgery.summary_notes)));
        }
    }
    ctx.advance(8.0);
}

fn render_followups(ctx: &mut RenderContext, data: &SectionData, _options: &SectionOptions) {
    heading(ctx, SectionId::FollowUp);
    if data.followups.is_empty() {
        empty_state(ctx, "No follow-up entries recorded.");
        return;
    }
    for followup in &data.followups {
        ctx.draw_bullet(&format!("Call Date: {}", fmt(&followup.call_date)));
        detail(
            ctx,
            &format!(
                "Scheduled Visit: {} | Activity: {}",
                fmt(&followup.scheduled_visit_date),
                fmt(&followup.activity_level)
            ),
        );
        detail(
            ctx,
            &format!(
                "Diet Notes: {} | Bowel: {}",
                fmt(&followup.diet_notes),
                fmt(&followup.bowel_movement)
            ),
        );
    }
    ctx.advance(8.0);
}

fn render_imaging(ctx: &mut RenderContext, data: &SectionData, _options: &SectionOptions) {
    heading(ctx, SectionId::Imaging);
    if data.imaging.is_empty() {
        empty_state(ctx, "No imaging studies recorded.");
        return;
    }
    for study in &data.imaging {
        ctx.draw_bullet(&format!("{} ({})", fmt(&study.study_name), fmt(&study.modality)));
        detail(
            ctx,
            &format!(
                "Category: {} | Date: {}",
                fmt(&study.category),
                fmt(&study.study_date)
            ),
        );
        if has_text(&study.impression) {
            detail(ctx, &format!("Impression: {}", fmt(&study.impression)));
        }
        if let Some(report) = &study.report {
            for line in structured_lines(report) {
                detail(ctx, &line);
            }
        }
    }
    ctx.advance(8.0);
}

fn render_labs(ctx: &mut RenderContext, data: &SectionData, _options: &SectionOptions) {
    heading(ctx, SectionId::Labs);
    if data.labs.is_empty() {
        empty_state(ctx, "No lab results recorded.");
        return;
    }
    for lab in &data.labs {
        ctx.draw_bullet(&format!("{} ({})", fmt(&lab.test_name), fmt(&lab.status)));
        detail(
            ctx,
            &format!("Category: {} | Date: {}", fmt(&lab.category), fmt(&lab.lab_date)),
        );
        if let Some(results) = &lab.results {
            for line in structured_lines(results) {
                detail(ctx, &line);
            }
        }
        if has_text(&lab.notes) {
            detail(ctx, &format!("Notes: {}", fmt(&lab.notes)));
        }
    }
    ctx.advance(8.0);
}

fn render_notes(ctx: &mut RenderContext, data: &SectionData, _options: &SectionOptions) {
    heading(ctx, SectionId::Notes);
    if data.notes.is_empty() {
        empty_state(ctx, "No notes recorded.");
        return;
    }
    for note in &data.notes {
        ctx.draw_bullet(&format!("{} ({})", fmt(&note.title), fmt(&note.category)));
        if has_text(&note.content) {
            detail(ctx, &fmt(&note.content));
        }
    }
    ctx.advance(8.0);
}

fn render_visits(ctx: &mut RenderContext, data: &SectionData, options: &SectionOptions) {
    heading(ctx, SectionId::Visits);
    if data.visits.is_empty() {
        empty_state(ctx, "No visit records found.");
        return;
    }

    // Undated visits sort first.
    let mut visits: Vec<&Visit> = data.visits.iter().collect();
    visits.sort_by_key(|visit| visit.visit_date);

    for visit in visits {
        ctx.draw_bullet(&format!("Visit Date: {}", fmt(&visit.visit_date)));
        detail(
            ctx,
            &format!(
                "Type: {} | Weight: {} | BMI: {}",
                fmt(&visit.visit_type),
                fmt(&visit.weight),
                fmt(&visit.bmi)
            ),
        );
        if has_text(&visit.clinical_findings) {
            detail(ctx, &format!("Findings: {}", fmt(&visit.clinical_findings)));
        }
        if has_text(&visit.recommendations) {
            detail(ctx, &format!("Plan: {}", fmt(&visit.recommendations)));
        }
    }

    if options.embed_bmi_chart {
        ctx.advance(8.0);
        draw_bmi_chart(ctx, &bmi_series(&data.visits), &ChartOptions::embedded());
    }
}

fn render_bmi(ctx: &mut RenderContext, data: &SectionData, _options: &SectionOptions) {
    ctx.new_page();
    ctx.draw_section_title(SectionId::Bmi.title());
    ctx.draw_wrapped_text(SectionId::Bmi.intro(), 10.5, 0.0, None);
    ctx.advance(8.0);
    draw_bmi_chart(ctx, &bmi_series(&data.visits), &ChartOptions::standalone());
}
