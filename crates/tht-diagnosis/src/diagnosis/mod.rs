//! Symptom-based screening for ear-nose-throat diseases.
//!
//! A fixed [`DiseaseCatalog`] of case counts feeds the [`NaiveBayesEngine`],
//! which produces unnormalized posterior scores. [`RankedDiagnosis`] orders
//! them, and the [`guidance`] tables annotate the top result.

mod catalog;
pub mod domain;
mod engine;
mod gate;
pub mod guidance;
mod ranking;
pub mod router;
mod service;

pub use catalog::{list_symptoms, SYMPTOM_VOCABULARY};
pub use domain::{DiseaseCatalog, DiseaseProfile, Observation, UnknownSymptom};
pub use engine::{NaiveBayesEngine, PosteriorScore, PosteriorScores};
pub use gate::{
    GateRejected, SymptomGate, ThresholdOutOfRange, DEFAULT_MIN_SYMPTOMS, MIN_SYMPTOMS_CEILING,
    MIN_SYMPTOMS_FLOOR,
};
pub use guidance::{about, describe, recommendations, AboutContent, DISCLAIMER};
pub use ranking::{RankedDiagnosis, RankedEntry};
pub use router::{diagnosis_router, DiseaseView};
pub use service::{diagnose, DiagnosisError, DiagnosisReport, DiagnosisRequest};
