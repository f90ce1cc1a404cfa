use super::catalog::SYMPTOM_VOCABULARY;
use super::domain::{DiseaseCatalog, Observation, UnknownSymptom};
use super::engine::NaiveBayesEngine;
use super::gate::{GateRejected, SymptomGate, ThresholdOutOfRange};
use super::guidance::{self, DISCLAIMER};
use super::ranking::{RankedDiagnosis, RankedEntry};
use serde::{Deserialize, Serialize};

/// Rank the standard catalog against `selected`, refusing selections below `min_required`.
///
/// Symptom names are not checked against the vocabulary here; unlisted names
/// simply contribute a zero count.
pub fn diagnose<I, S>(selected: I, min_required: usize) -> Result<RankedDiagnosis, GateRejected>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let observation = Observation::new(selected);
    SymptomGate::new(min_required).check(&observation)?;

    let catalog = DiseaseCatalog::standard();
    Ok(NaiveBayesEngine::standard()
        .score(&catalog, &observation)
        .rank())
}

/// Incoming diagnosis request as submitted by a form or API client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub min_symptoms: Option<usize>,
}

/// Everything a front end needs to render a diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisReport {
    pub selected_symptoms: Vec<String>,
    pub min_symptoms: usize,
    pub ranking: Vec<RankedEntry>,
    pub top_disease: String,
    pub description: Option<&'static str>,
    pub recommendations: &'static [&'static str],
    pub disclaimer: &'static str,
}

impl DiagnosisReport {
    /// Validate, gate, score and annotate a request against the standard catalog.
    pub fn build(
        request: DiagnosisRequest,
        default_min_symptoms: usize,
    ) -> Result<Self, DiagnosisError> {
        let DiagnosisRequest {
            symptoms,
            min_symptoms,
        } = request;

        let gate = SymptomGate::bounded(min_symptoms.unwrap_or(default_min_symptoms))?;
        let observation = Observation::from_vocabulary(symptoms, &SYMPTOM_VOCABULARY)?;
        gate.check(&observation)?;

        let catalog = DiseaseCatalog::standard();
        let ranking = NaiveBayesEngine::standard()
            .score(&catalog, &observation)
            .rank();

        Self::from_ranking(observation, gate, ranking)
    }

    pub fn from_ranking(
        observation: Observation,
        gate: SymptomGate,
        ranking: RankedDiagnosis,
    ) -> Result<Self, DiagnosisError> {
        let top_disease = ranking
            .top_disease()
            .map(str::to_string)
            .ok_or(DiagnosisError::EmptyCatalog)?;

        Ok(Self {
            selected_symptoms: observation.symptoms().to_vec(),
            min_symptoms: gate.min_required(),
            description: guidance::describe(&top_disease),
            recommendations: guidance::recommendations(&top_disease),
            ranking: ranking.into_entries(),
            top_disease,
            disclaimer: DISCLAIMER,
        })
    }
}

/// Error raised while turning a request into a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosisError {
    #[error(transparent)]
    Gate(#[from] GateRejected),
    #[error(transparent)]
    UnknownSymptom(#[from] UnknownSymptom),
    #[error(transparent)]
    Threshold(#[from] ThresholdOutOfRange),
    #[error("unknown disease '{0}'")]
    UnknownDisease(String),
    #[error("no diseases available to rank")]
    EmptyCatalog,
}
