use clap::Args;
use tht_diagnosis::config::AppConfig;
use tht_diagnosis::diagnosis::{
    about, describe, list_symptoms, recommendations, DiagnosisError, DiagnosisReport,
    DiagnosisRequest, DiseaseCatalog, RankedEntry,
};
use tht_diagnosis::error::AppError;

const CHART_WIDTH: usize = 40;

#[derive(Args, Debug, Default)]
pub(crate) struct DiagnoseArgs {
    /// Symptom name or its number from `symptoms`; repeat for each symptom
    #[arg(short, long = "symptom", value_name = "SYMPTOM")]
    pub(crate) symptoms: Vec<String>,
    /// Minimum number of symptoms required (1-5, defaults to APP_MIN_SYMPTOMS)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub(crate) min_symptoms: Option<u8>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DiseaseArgs {
    /// Disease name, e.g. "Polip Hidung"
    pub(crate) name: String,
}

pub(crate) fn run_symptoms() {
    println!("Gejala yang dikenali");
    for (index, symptom) in list_symptoms().iter().enumerate() {
        println!("{:>3}. {}", index + 1, symptom);
    }
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let DiagnoseArgs {
        symptoms,
        min_symptoms,
        json,
    } = args;

    let default_min_symptoms = AppConfig::load()?.diagnosis.min_symptoms;
    let request = DiagnosisRequest {
        symptoms: symptoms.iter().map(|raw| resolve_symptom(raw)).collect(),
        min_symptoms: min_symptoms.map(usize::from),
    };

    match DiagnosisReport::build(request, default_min_symptoms) {
        Ok(report) if json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Ok(report) => {
            render_report(&report);
            Ok(())
        }
        Err(DiagnosisError::Gate(rejected)) => {
            println!("{rejected}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn run_disease(args: DiseaseArgs) -> Result<(), AppError> {
    let catalog = DiseaseCatalog::standard();
    let disease = catalog
        .get(args.name.trim())
        .ok_or_else(|| DiagnosisError::UnknownDisease(args.name.clone()))?;

    println!("{} ({} kasus tercatat)", disease.name, disease.total_cases);
    if let Some(description) = describe(&disease.name) {
        println!("Deskripsi: {description}");
    }

    println!("\nGejala tercatat");
    for (symptom, count) in &disease.symptom_counts {
        println!("- {symptom}: {count}");
    }

    println!("\nRekomendasi Tindakan");
    for action in recommendations(&disease.name) {
        println!("• {action}");
    }

    Ok(())
}

pub(crate) fn run_about() {
    let content = about();
    println!("{}", content.title);
    println!("{}", content.welcome);
    println!("\nTentang Aplikasi\n{}", content.purpose);
    println!("\nMetodologi\n{}", content.methodology);
    println!("\nBatasan");
    for limitation in content.limitations {
        println!("- {limitation}");
    }
    println!("\nTentang Pengembang\n{}", content.developer_note);
}

/// Map a 1-based selection number onto the vocabulary; other input passes through.
pub(crate) fn resolve_symptom(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| list_symptoms().get(index))
        .map(|symptom| symptom.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

pub(crate) fn render_report(report: &DiagnosisReport) {
    println!("Hasil Diagnosis");
    println!("Gejala: {}", report.selected_symptoms.join(", "));

    println!("\nProbabilitas Diagnosis Penyakit");
    for line in chart_lines(&report.ranking) {
        println!("{line}");
    }

    println!("\nPenyakit yang paling mungkin: {}", report.top_disease);
    if let Some(description) = report.description {
        println!("Deskripsi: {description}");
    }

    println!("\nRekomendasi Tindakan");
    for action in report.recommendations {
        println!("• {action}");
    }

    println!("\n{}", report.disclaimer);
}

/// Horizontal bar chart scaled to the highest score.
pub(crate) fn chart_lines(ranking: &[RankedEntry]) -> Vec<String> {
    let label_width = ranking
        .iter()
        .map(|entry| entry.disease.chars().count())
        .max()
        .unwrap_or(0);
    let peak = ranking
        .iter()
        .map(|entry| entry.score)
        .fold(0.0_f64, f64::max);

    ranking
        .iter()
        .map(|entry| {
            let bar = if peak > 0.0 {
                ((entry.score / peak) * CHART_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!(
                "{:<label_width$}  {:.4}  {:>5.1}%  {}",
                entry.disease,
                entry.score,
                entry.share * 100.0,
                "█".repeat(bar),
            )
        })
        .collect()
}
