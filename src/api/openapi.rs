//! OpenAPI document endpoint

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::{assessment, dataset, error, health};
use crate::model::{PatientProfile, RiskAssessment};
use crate::service::insights::{DatasetSummary, PlotPoint};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Diabetes Risk Predictor",
        description = "AI-backed diabetes risk assessment and Pima Indians dataset insights"
    ),
    paths(
        assessment::create_assessment,
        dataset::dataset_summary,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        PatientProfile,
        RiskAssessment,
        DatasetSummary,
        PlotPoint,
        dataset::DatasetInsightsResponse,
        error::ErrorResponse,
        health::HealthStatus,
        health::ReadinessStatus,
        health::DatasetHealth,
    )),
    tags(
        (name = "assessments", description = "AI risk assessment"),
        (name = "dataset", description = "Historical dataset insights"),
        (name = "health", description = "Liveness and readiness checks")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI JSON document
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json);
}
