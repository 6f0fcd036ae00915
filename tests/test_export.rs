//! End-to-end export tests against the in-memory store.

use clinic_export::error::Error;
use clinic_export::export::{render_document, ExportResponse};
use clinic_export::model::{
    Allergy, Condition, Followup, Imaging, Lab, Medication, Note, Patient, SocialHistory, Surgery,
    Visit,
};
use clinic_export::{
    export_patient_pdf, section_presence, ExportConfig, ExportFailure, ExportOutcome,
    ExportRequest, MemoryStore, RecordStore, Result, SectionId,
};

const DATASET: &str = r#"{
    "patients": [
        {"id": "p-1", "name": "Jane Doe", "age": 44, "gender": "Female", "status": "Active"},
        {"id": "p-2", "name": "Omar  Haddad", "height": "172.5"},
        {"id": "p-3"}
    ],
    "surgeries": [
        {"patientId": "p-1", "procedureName": "Sleeve Gastrectomy", "procedureType": "Laparoscopic",
         "surgeryDate": "2024-01-12", "hospitalName": "City Hospital"}
    ],
    "visits": [
        {"patientId": "p-2", "bmi": 31.2, "visitDate": "2024-01-01"},
        {"patientId": "p-2", "bmi": 29.8, "visitDate": "2024-02-01"},
        {"patientId": "p-2", "bmi": "28.0", "visitDate": "2024-03-01"},
        {"patientId": "p-2", "bmi": 26.5, "visitDate": "2024-04-01"},
        {"patientId": "p-2", "bmi": 25.1, "visitDate": "2024-05-01"}
    ]
}"#;

fn store() -> MemoryStore {
    MemoryStore::from_json(DATASET).expect("dataset should load")
}

fn config() -> ExportConfig {
    ExportConfig::default().with_compress(false)
}

fn exported(outcome: &ExportOutcome) -> &clinic_export::ExportedDocument {
    outcome.document().expect("export should succeed")
}

#[tokio::test]
async fn test_background_empty_surgery_single_entry() {
    let request = ExportRequest::new("p-1", ["surgery", "background"]);
    let outcome = export_patient_pdf(&store(), &request, &config()).await.unwrap();
    let doc = exported(&outcome);
    let pdf = String::from_utf8_lossy(&doc.bytes);

    assert!(pdf.starts_with("%PDF-"));
    assert!(pdf.contains("(No background items recorded yet.) Tj"));
    assert_eq!(pdf.matches("(Sleeve Gastrectomy \\(Laparoscopic\\)) Tj").count(), 1);

    let background = pdf.find("(Clinical Background) Tj").unwrap();
    let surgery = pdf.find("(Surgery Timeline) Tj").unwrap();
    assert!(background < surgery, "sections must follow canonical order");
}

#[tokio::test]
async fn test_bmi_section_chart() {
    let store = store();
    let request = ExportRequest::new("p-2", ["bmi"]);
    let outcome = export_patient_pdf(&store, &request, &config()).await.unwrap();
    let doc = exported(&outcome);
    assert_eq!(doc.page_count, 2, "bmi section starts on its own page");
    assert_eq!(doc.file_name, "Omar-Haddad-export.pdf");

    let data = clinic_export::render::SectionData {
        patient: store.patient("p-2").await.unwrap().unwrap(),
        visits: store.visits("p-2").await.unwrap(),
        ..Default::default()
    };
    let series = clinic_export::render::bmi_series(&data.visits);
    let axis = clinic_export::render::BmiAxis::for_readings(&series);
    assert!((axis.min - 16.5).abs() < 1e-9);
    assert!((axis.max - 33.2).abs() < 1e-9);

    let document = render_document(&data, &[SectionId::Bmi], &config());
    let chart_page = &document.pages()[1];
    let circles = chart_page
        .ops()
        .iter()
        .filter(|op| matches!(op, clinic_export::render::DrawOp::Circle { .. }))
        .count();
    let segments = chart_page
        .ops()
        .iter()
        .filter(|op| {
            matches!(op, clinic_export::render::DrawOp::Line { thickness, .. } if *thickness == 2.0)
        })
        .count();
    assert_eq!(circles, 5);
    assert_eq!(segments, 4);
}

#[tokio::test]
async fn test_empty_sections_rejected() {
    let request = ExportRequest::new("p-1", Vec::<String>::new());
    let outcome = export_patient_pdf(&store(), &request, &config()).await.unwrap();
    assert_eq!(outcome.failure(), Some(&ExportFailure::NoSections));
    assert!(outcome.document().is_none());

    let response = ExportResponse::from(&outcome);
    assert!(!response.ok);
    assert_eq!(response.error.as_deref(), Some("Select at least one section to export."));
    assert!(response.base64.is_none());
}

#[tokio::test]
async fn test_unknown_patient_rejected() {
    let request = ExportRequest::new("p-404", ["overview"]);
    let outcome = export_patient_pdf(&store(), &request, &config()).await.unwrap();
    assert_eq!(outcome.failure(), Some(&ExportFailure::PatientNotFound));
    assert_eq!(
        ExportFailure::PatientNotFound.to_string(),
        "Patient record not found."
    );
}

#[tokio::test]
async fn test_blank_patient_id_rejected() {
    let request = ExportRequest::new("", ["overview"]);
    let outcome = export_patient_pdf(&store(), &request, &config()).await.unwrap();
    assert_eq!(outcome.failure(), Some(&ExportFailure::InvalidPatientId));
}

#[tokio::test]
async fn test_unnamed_patient_file_name_and_metadata() {
    let request = ExportRequest::new("p-3", ["overview"]);
    let outcome = export_patient_pdf(&store(), &request, &config()).await.unwrap();
    let doc = exported(&outcome);
    assert_eq!(doc.file_name, "patient-export.pdf");

    let pdf = String::from_utf8_lossy(&doc.bytes);
    assert!(pdf.contains("(Unnamed patient) Tj"));
    assert!(pdf.contains("/Title (AI Clinic - Unnamed patient)"));
    assert!(pdf.contains("/Subject (Patient Care Export)"));
}

#[tokio::test]
async fn test_visits_without_bmi_embed_chart() {
    let request = ExportRequest::new("p-2", ["visits"]);
    let outcome = export_patient_pdf(&store(), &request, &config()).await.unwrap();
    let pdf = String::from_utf8_lossy(&exported(&outcome).bytes).to_string();
    assert!(pdf.contains("(BMI Trend \\(embedded\\)) Tj"));

    let request = ExportRequest::new("p-2", ["visits", "bmi"]);
    let outcome = export_patient_pdf(&store(), &request, &config()).await.unwrap();
    let pdf = String::from_utf8_lossy(&exported(&outcome).bytes).to_string();
    assert!(!pdf.contains("(embedded\\)"));
    assert!(pdf.contains("(BMI Trend) Tj"));
}

#[tokio::test]
async fn test_response_carries_base64_pdf() {
    let request = ExportRequest::new("p-1", ["overview"]);
    let outcome = export_patient_pdf(&store(), &request, &ExportConfig::default())
        .await
        .unwrap();
    let response = ExportResponse::from(&outcome);
    assert!(response.ok);
    assert_eq!(response.file_name.as_deref(), Some("Jane-Doe-export.pdf"));
    // "%PDF-" in base64
    assert!(response.base64.unwrap().starts_with("JVBERi0"));
}

#[tokio::test]
async fn test_presence() {
    let store = store();
    let jane = section_presence(&store, "p-1").await.unwrap();
    assert!(jane.overview);
    assert!(jane.surgery);
    assert!(!jane.background);
    assert!(!jane.visits);

    let nobody = section_presence(&store, "p-404").await.unwrap();
    assert!(!nobody.any());
}

#[tokio::test]
async fn test_written_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let request = ExportRequest::new("p-1", SectionId::all().iter().map(|id| id.as_str()));
    let outcome = export_patient_pdf(&store(), &request, &ExportConfig::default())
        .await
        .unwrap();
    let doc = exported(&outcome);
    let path = dir.path().join(&doc.file_name);
    std::fs::write(&path, &doc.bytes).unwrap();
    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF-"));
    assert!(written.ends_with(b"%%EOF"));
}

/// Store whose visit table is unreachable.
struct FlakyStore {
    inner: MemoryStore,
}

impl RecordStore for FlakyStore {
    async fn patient(&self, patient_id: &str) -> Result<Option<Patient>> {
        self.inner.patient(patient_id).await
    }
    async fn allergies(&self, patient_id: &str) -> Result<Vec<Allergy>> {
        self.inner.allergies(patient_id).await
    }
    async fn conditions(&self, patient_id: &str) -> Result<Vec<Condition>> {
        self.inner.conditions(patient_id).await
    }
    async fn medications(&self, patient_id: &str) -> Result<Vec<Medication>> {
        self.inner.medications(patient_id).await
    }
    async fn social_history(&self, patient_id: &str) -> Result<Vec<SocialHistory>> {
        self.inner.social_history(patient_id).await
    }
    async fn surgeries(&self, patient_id: &str) -> Result<Vec<Surgery>> {
        self.inner.surgeries(patient_id).await
    }
    async fn followups(&self, patient_id: &str) -> Result<Vec<Followup>> {
        self.inner.followups(patient_id).await
    }
    async fn imaging(&self, patient_id: &str) -> Result<Vec<Imaging>> {
        self.inner.imaging(patient_id).await
    }
    async fn labs(&self, patient_id: &str) -> Result<Vec<Lab>> {
        self.inner.labs(patient_id).await
    }
    async fn notes(&self, patient_id: &str) -> Result<Vec<Note>> {
        self.inner.notes(patient_id).await
    }
    async fn visits(&self, _patient_id: &str) -> Result<Vec<Visit>> {
        Err(Error::Store("visits table unavailable".to_string()))
    }
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let store = FlakyStore { inner: store() };

    let request = ExportRequest::new("p-2", ["bmi"]);
    let err = export_patient_pdf(&store, &request, &config()).await.unwrap_err();
    assert!(matches!(err, Error::Store(_)));

    // visits are not fetched for these sections
    let request = ExportRequest::new("p-1", ["overview", "surgery"]);
    let outcome = export_patient_pdf(&store, &request, &config()).await.unwrap();
    assert!(outcome.is_ok());
}
