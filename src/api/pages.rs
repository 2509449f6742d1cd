//! HTML pages: predictor form, prediction submission and data insights

use actix_web::error::InternalError;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::model::PatientProfile;
use crate::service::assessment::PredictionState;
use crate::service::insights::{DatasetSummary, plot_points};
use crate::service::{DatasetStore, RiskAssessmentService};
use crate::view;
use crate::view::chart::render_scatter_svg;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// Predictor tab with the default form values
#[get("/")]
pub async fn predictor_form() -> impl Responder {
    html(view::predictor_page(
        &PatientProfile::default(),
        &PredictionState::default(),
    ))
}

/// Submit the form and render the result or the error banner
#[post("/predict")]
pub async fn submit_prediction(
    service: web::Data<RiskAssessmentService>,
    form: web::Form<PatientProfile>,
) -> impl Responder {
    let profile = form.into_inner();
    let mut state = PredictionState::default();

    service.submit(&mut state, &profile).await;

    html(view::predictor_page(&profile, &state))
}

/// Data insights tab
#[get("/insights")]
pub async fn insights(store: web::Data<DatasetStore>) -> impl Responder {
    let records = store.records().await;
    let summary = DatasetSummary::compute(&records);
    let points = plot_points(&records);

    html(view::insights_page(summary.as_ref(), &points))
}

/// The scatter plot as a standalone SVG document
#[get("/insights/chart.svg")]
pub async fn insights_chart(store: web::Data<DatasetStore>) -> impl Responder {
    let records = store.records().await;

    HttpResponse::Ok()
        .content_type("image/svg+xml")
        .body(render_scatter_svg(&plot_points(&records)))
}

/// Undecodable submissions re-render the form with the error banner
fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        tracing::warn!(error = %err, "Rejected prediction form submission");

        let mut state = PredictionState::default();
        state.reject(format!("Invalid form submission: {}", err));
        let page = view::predictor_page(&PatientProfile::default(), &state);

        InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .content_type(ContentType::html())
                .body(page),
        )
        .into()
    })
}

/// Configure page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .service(predictor_form)
        .service(submit_prediction)
        .service(insights)
        .service(insights_chart);
}
