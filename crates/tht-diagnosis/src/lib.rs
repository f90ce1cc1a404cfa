//! Naive Bayes decision support for ear-nose-throat (THT) symptom screening.
//!
//! The scoring core lives in [`diagnosis`]; [`config`], [`telemetry`] and
//! [`error`] carry the ambient service concerns shared with the API binary.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod telemetry;

pub use diagnosis::{describe, diagnose, list_symptoms, recommendations};
