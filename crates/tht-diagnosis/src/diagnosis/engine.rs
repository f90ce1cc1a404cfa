use super::catalog::SYMPTOM_VOCABULARY;
use super::domain::{DiseaseCatalog, DiseaseProfile, Observation};
use super::ranking::RankedDiagnosis;
use serde::Serialize;

/// Naive Bayes scorer with Laplace (add-one) smoothing over the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaiveBayesEngine {
    vocabulary_size: usize,
}

impl NaiveBayesEngine {
    pub fn new(vocabulary_size: usize) -> Self {
        Self { vocabulary_size }
    }

    /// Engine sized for the shipped symptom vocabulary.
    pub fn standard() -> Self {
        Self::new(SYMPTOM_VOCABULARY.len())
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Unnormalized posterior `prior * likelihood` for every disease, in catalog order.
    pub fn score(&self, catalog: &DiseaseCatalog, observation: &Observation) -> PosteriorScores {
        let total_cases = catalog.total_cases() as f64;

        let entries = catalog
            .diseases()
            .iter()
            .map(|disease| {
                let prior = if total_cases > 0.0 {
                    f64::from(disease.total_cases) / total_cases
                } else {
                    0.0
                };
                let likelihood = self.likelihood(disease, observation);

                PosteriorScore {
                    disease: disease.name.clone(),
                    prior,
                    likelihood,
                    score: prior * likelihood,
                }
            })
            .collect();

        PosteriorScores { entries }
    }

    fn likelihood(&self, disease: &DiseaseProfile, observation: &Observation) -> f64 {
        let denominator = f64::from(disease.total_cases) + self.vocabulary_size as f64;
        if denominator <= 0.0 {
            return if observation.is_empty() { 1.0 } else { 0.0 };
        }

        observation
            .symptoms()
            .iter()
            .map(|symptom| (f64::from(disease.symptom_count(symptom)) + 1.0) / denominator)
            .product()
    }
}

/// Posterior contribution computed for one disease.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosteriorScore {
    pub disease: String,
    pub prior: f64,
    pub likelihood: f64,
    pub score: f64,
}

/// Per-disease posterior scores. These are relative weights, not probabilities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosteriorScores {
    entries: Vec<PosteriorScore>,
}

impl PosteriorScores {
    pub fn entries(&self) -> &[PosteriorScore] {
        &self.entries
    }

    pub fn get(&self, disease: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.disease == disease)
            .map(|entry| entry.score)
    }

    /// Sum of all scores; the evidence term for normalization.
    pub fn evidence(&self) -> f64 {
        self.entries.iter().map(|entry| entry.score).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rank(&self) -> RankedDiagnosis {
        RankedDiagnosis::from_scores(self)
    }
}
