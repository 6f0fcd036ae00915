//! Export a patient record to PDF
//!
//! Loads a JSON dataset into the in-memory store and exports one patient.
//!
//! Usage:
//!   clinic-export <dataset.json> <patient-id>
//!   clinic-export <dataset.json> <patient-id> --sections overview,visits,bmi --output-dir out
//!   clinic-export <dataset.json> <patient-id> --presence

use clinic_export::{
    export_patient_pdf, section_presence, ExportConfig, ExportOutcome, ExportRequest,
    MemoryStore, SectionId,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

struct CliArgs {
    dataset: PathBuf,
    patient_id: String,
    sections: Vec<String>,
    output_dir: PathBuf,
    presence: bool,
}

impl CliArgs {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut positional = Vec::new();
        let mut sections = None;
        let mut output_dir = PathBuf::from(".");
        let mut presence = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--sections" => {
                    i += 1;
                    if i < args.len() {
                        sections = Some(
                            args[i]
                                .split(',')
                                .map(|s| s.trim().to_string())
                                .collect::<Vec<_>>(),
                        );
                    }
                },
                "--output-dir" => {
                    i += 1;
                    if i < args.len() {
                        output_dir = PathBuf::from(&args[i]);
                    }
                },
                "--presence" => {
                    presence = true;
                },
                other => positional.push(other.to_string()),
            }
            i += 1;
        }

        if positional.len() != 2 {
            return Err(
                "usage: clinic-export <dataset.json> <patient-id> [--sections a,b] [--output-dir DIR] [--presence]"
                    .to_string(),
            );
        }
        let patient_id = positional.pop().unwrap_or_default();
        let dataset = PathBuf::from(positional.pop().unwrap_or_default());

        let sections = sections.unwrap_or_else(|| {
            SectionId::all()
                .iter()
                .map(|id| id.as_str().to_string())
                .collect()
        });

        Ok(Self {
            dataset,
            patient_id,
            sections,
            output_dir,
            presence,
        })
    }
}

async fn run(args: CliArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let store = MemoryStore::from_path(&args.dataset)?;

    if args.presence {
        let presence = section_presence(&store, &args.patient_id).await?;
        println!("{}", serde_json::to_string_pretty(&presence)?);
        return Ok(ExitCode::SUCCESS);
    }

    let start = Instant::now();
    let request = ExportRequest::new(args.patient_id, args.sections);
    match export_patient_pdf(&store, &request, &ExportConfig::default()).await? {
        ExportOutcome::Exported(doc) => {
            fs::create_dir_all(&args.output_dir)?;
            let path = args.output_dir.join(&doc.file_name);
            fs::write(&path, &doc.bytes)?;
            println!(
                "Wrote {} ({} pages, {} bytes) in {:?}",
                path.display(),
                doc.page_count,
                doc.bytes.len(),
                start.elapsed()
            );
            Ok(ExitCode::SUCCESS)
        },
        ExportOutcome::Rejected(reason) => {
            eprintln!("Export failed: {}", reason);
            Ok(ExitCode::from(2))
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match CliArgs::from_args() {
        Ok(args) => args,
        Err(usage) => {
            eprintln!("{}", usage);
            return ExitCode::from(64);
        },
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        },
    };

    match runtime.block_on(run(args)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
