use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod model;
mod service;
mod view;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let state = AppState::new(&config).map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize application");
        std::io::Error::other(e)
    })?;

    state.spawn_dataset_load();

    let risk_assessment_service = web::Data::new(state.risk_assessment_service);
    let dataset_store = web::Data::new(state.dataset_store);

    tracing::info!(
        model = %config.analysis.model,
        dataset = %config.dataset.url,
        "Starting Diabetes Risk Predictor on {}",
        bind_addr
    );

    HttpServer::new(move || {
        App::new()
            .app_data(risk_assessment_service.clone())
            .app_data(dataset_store.clone())
            .configure(api::pages::configure)
            .configure(api::assessment::configure)
            .configure(api::dataset::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
