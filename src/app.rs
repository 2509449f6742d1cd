//! Application state and service initialization
//!
//! This module centralizes service construction so `main` only deals with the
//! HTTP server lifecycle.

use std::sync::Arc;

use crate::model::Config;
use crate::service::{DatasetLoader, DatasetStore, GeminiClient, RiskAssessmentService};

/// Environment variables checked for the Gemini API key, in order
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Application state containing all services and shared resources
pub struct AppState {
    /// AI risk assessment service
    pub risk_assessment_service: RiskAssessmentService,
    /// Historical dataset, empty until the loader finishes
    pub dataset_store: DatasetStore,
    /// One-shot dataset loader
    pub dataset_loader: DatasetLoader,
}

impl AppState {
    /// Build application state
    ///
    /// Fails when no Gemini API key is configured. The dataset is not loaded
    /// here; see [`AppState::spawn_dataset_load`].
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = resolve_api_key(|name| std::env::var(name).ok())?;

        let client = GeminiClient::new(&api_key, &config.analysis)
            .map_err(|_| AppError::InvalidConfig("Invalid Gemini client configuration"))?;

        Ok(Self {
            risk_assessment_service: RiskAssessmentService::new(Arc::new(client)),
            dataset_store: DatasetStore::new(),
            dataset_loader: DatasetLoader::new(&config.dataset.url),
        })
    }

    /// Load the dataset in the background, exactly once per process
    pub fn spawn_dataset_load(&self) -> tokio::task::JoinHandle<()> {
        let loader = self.dataset_loader.clone();
        let store = self.dataset_store.clone();

        tokio::spawn(async move { loader.load_into(&store).await })
    }
}

fn resolve_api_key(lookup: impl Fn(&str) -> Option<String>) -> Result<String, AppError> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or(AppError::MissingConfig("GEMINI_API_KEY"))
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
