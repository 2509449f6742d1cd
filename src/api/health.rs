//! Health check endpoints for liveness and readiness checks

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::service::DatasetStore;

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessStatus {
    pub status: String,
    pub version: String,
    pub dataset: DatasetHealth,
}

#[derive(Serialize, ToSchema)]
pub struct DatasetHealth {
    /// "loaded", "empty" or "loading"
    pub status: String,
    pub record_count: usize,
    /// RFC 3339 time the dataset was loaded
    pub loaded_at: Option<String>,
}

/// Liveness endpoint
///
/// Always returns 200 OK if the service is running.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/health/live")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness endpoint
///
/// Returns 200 OK once the one-time dataset load has finished, whether or not
/// it produced any records. An empty dataset only degrades the dashboard.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessStatus),
        (status = 503, description = "Dataset load still in progress", body = ReadinessStatus)
    ),
    tag = "health"
)]
#[get("/health/ready")]
pub async fn readiness(store: web::Data<DatasetStore>) -> impl Responder {
    let dataset = store.status().await;

    let dataset_status = match (dataset.finished, dataset.record_count) {
        (false, _) => "loading",
        (true, 0) => "empty",
        (true, _) => "loaded",
    };

    let status = ReadinessStatus {
        status: if dataset.finished { "ready" } else { "not_ready" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: DatasetHealth {
            status: dataset_status.to_string(),
            record_count: dataset.record_count,
            loaded_at: dataset.loaded_at.map(|t| t.to_rfc3339()),
        },
    };

    if dataset.finished {
        HttpResponse::Ok().json(status)
    } else {
        HttpResponse::ServiceUnavailable().json(status)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(liveness).service(readiness);
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn test_liveness() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health/live").to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_not_ready_while_loading() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(DatasetStore::new()))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/health/ready").to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["dataset"]["status"], "loading");
    }

    #[actix_web::test]
    async fn test_ready_with_empty_dataset_after_failure() {
        let store = DatasetStore::new();
        store.mark_failed().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/health/ready").to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["dataset"]["status"], "empty");
        assert!(body["dataset"]["loaded_at"].is_null());
    }
}
