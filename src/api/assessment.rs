//! REST API endpoint for AI risk assessments

use actix_web::{HttpResponse, post, web};

use crate::api::error::{ApiError, ErrorResponse};
use crate::model::{PatientProfile, RiskAssessment};
use crate::service::RiskAssessmentService;

/// Assess diabetes risk for a patient profile
#[utoipa::path(
    post,
    path = "/v1/assessments",
    request_body = PatientProfile,
    responses(
        (status = 200, description = "Risk assessment generated", body = RiskAssessment),
        (status = 400, description = "Malformed patient profile", body = ErrorResponse),
        (status = 502, description = "The generative model failed or replied off-schema", body = ErrorResponse)
    ),
    tag = "assessments"
)]
#[post("/v1/assessments")]
pub async fn create_assessment(
    service: web::Data<RiskAssessmentService>,
    profile: web::Json<PatientProfile>,
) -> Result<HttpResponse, ApiError> {
    let assessment = service.assess(&profile).await?;
    Ok(HttpResponse::Ok().json(assessment))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

/// Configure assessment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(create_assessment);
}
