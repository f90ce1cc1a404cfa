use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use super::catalog::list_symptoms;
use super::domain::DiseaseCatalog;
use super::guidance::{self, about};
use super::service::{DiagnosisError, DiagnosisReport, DiagnosisRequest};
use crate::config::DiagnosisConfig;

/// Router builder exposing the symptom vocabulary, disease guidance and scoring.
pub fn diagnosis_router(config: DiagnosisConfig) -> Router {
    Router::new()
        .route("/api/v1/symptoms", get(symptoms_handler))
        .route("/api/v1/diseases", get(diseases_handler))
        .route("/api/v1/diseases/:name", get(disease_handler))
        .route("/api/v1/diagnosis", post(diagnosis_handler))
        .route("/api/v1/about", get(about_handler))
        .with_state(Arc::new(config))
}

/// Public view of one catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseView {
    pub name: String,
    pub total_cases: u32,
    pub description: Option<&'static str>,
    pub recommendations: &'static [&'static str],
}

impl DiseaseView {
    fn lookup(catalog: &DiseaseCatalog, name: &str) -> Option<Self> {
        catalog.get(name).map(|disease| Self {
            name: disease.name.clone(),
            total_cases: disease.total_cases,
            description: guidance::describe(&disease.name),
            recommendations: guidance::recommendations(&disease.name),
        })
    }
}

pub(crate) async fn symptoms_handler() -> Json<serde_json::Value> {
    Json(json!({ "symptoms": list_symptoms() }))
}

pub(crate) async fn diseases_handler() -> Json<Vec<DiseaseView>> {
    let catalog = DiseaseCatalog::standard();
    let views = catalog
        .names()
        .filter_map(|name| DiseaseView::lookup(&catalog, name))
        .collect();
    Json(views)
}

pub(crate) async fn disease_handler(Path(name): Path<String>) -> Response {
    let catalog = DiseaseCatalog::standard();
    match DiseaseView::lookup(&catalog, &name) {
        Some(view) => (StatusCode::OK, Json(view)).into_response(),
        None => diagnosis_error_response(DiagnosisError::UnknownDisease(name)),
    }
}

pub(crate) async fn about_handler() -> Json<guidance::AboutContent> {
    Json(about())
}

pub(crate) async fn diagnosis_handler(
    State(config): State<Arc<DiagnosisConfig>>,
    payload: Result<Json<DiagnosisRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let payload = json!({ "error": rejection.body_text() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match DiagnosisReport::build(request, config.min_symptoms) {
        Ok(report) => {
            debug!(
                top_disease = %report.top_disease,
                selected = report.selected_symptoms.len(),
                "diagnosis computed"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => diagnosis_error_response(err),
    }
}

pub(crate) fn diagnosis_error_response(err: DiagnosisError) -> Response {
    match err {
        DiagnosisError::Gate(rejected) => {
            warn!(
                required = rejected.required,
                selected = rejected.selected,
                "diagnosis gated"
            );
            let payload = json!({
                "warning": rejected.to_string(),
                "required": rejected.required,
                "selected": rejected.selected,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        DiagnosisError::UnknownSymptom(_) | DiagnosisError::Threshold(_) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        DiagnosisError::UnknownDisease(_) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        DiagnosisError::EmptyCatalog => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
