//! REST API endpoint for dataset insights

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::service::DatasetStore;
use crate::service::insights::{DatasetSummary, PlotPoint, plot_points};

/// Aggregates and plot projection of the historical dataset
#[derive(Debug, Serialize, ToSchema)]
pub struct DatasetInsightsResponse {
    /// Absent while the dataset is empty
    pub summary: Option<DatasetSummary>,
    /// First 150 records as (BMI, glucose) markers
    pub points: Vec<PlotPoint>,
}

/// Get summary statistics and scatter plot data
#[utoipa::path(
    get,
    path = "/v1/dataset/summary",
    responses(
        (status = 200, description = "Dataset insights computed", body = DatasetInsightsResponse)
    ),
    tag = "dataset"
)]
#[get("/v1/dataset/summary")]
pub async fn dataset_summary(store: web::Data<DatasetStore>) -> impl Responder {
    let records = store.records().await;

    HttpResponse::Ok().json(DatasetInsightsResponse {
        summary: DatasetSummary::compute(&records),
        points: plot_points(&records),
    })
}

/// Configure dataset routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dataset_summary);
}
