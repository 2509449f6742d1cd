//! Diabetes risk assessment service using a hosted generative model
//!
//! Turns a patient profile into a prompt, asks the model once for a
//! structured assessment, and validates what comes back.

use std::sync::Arc;

use crate::model::{PatientProfile, RiskAssessment};
use crate::service::assessment::prompts::{RISK_SYSTEM_PROMPT, build_risk_prompt};
use crate::service::assessment::validation::validate_assessment;
use crate::service::llm::GenerativeModel;

pub mod error;
pub mod prompts;
pub mod state;
pub mod validation;

pub use error::AssessmentError;
pub use state::PredictionState;

/// Service for assessing diabetes risk from biometric measurements
#[derive(Clone)]
pub struct RiskAssessmentService {
    model: Arc<dyn GenerativeModel>,
}

impl RiskAssessmentService {
    /// Creates a new assessment service backed by `model`
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        tracing::info!(
            model = %model.model_name(),
            "Risk assessment service initialized"
        );

        Self { model }
    }

    /// Request a risk assessment for `profile`
    ///
    /// Issues exactly one model call. Transport errors, replies that do not
    /// deserialize and out-of-range values all fail with [`AssessmentError`].
    pub async fn assess(&self, profile: &PatientProfile) -> Result<RiskAssessment, AssessmentError> {
        let start_time = std::time::Instant::now();

        let prompt = build_risk_prompt(profile);
        let prompt_length = prompt.len();

        tracing::debug!(
            model = %self.model.model_name(),
            prompt_length = prompt_length,
            "Initiating model call for risk assessment"
        );

        let assessment = match self
            .model
            .extract_assessment(RISK_SYSTEM_PROMPT, &prompt)
            .await
        {
            Ok(assessment) => assessment,
            Err(e) => {
                tracing::error!(
                    model = %self.model.model_name(),
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "Model call for risk assessment failed"
                );
                return Err(AssessmentError::ModelFailed(e));
            }
        };

        validate_assessment(&assessment).map_err(|e| {
            tracing::error!(
                model = %self.model.model_name(),
                elapsed_ms = start_time.elapsed().as_millis(),
                error = %e,
                "Extracted risk assessment failed validation"
            );
            AssessmentError::InvalidReply(e)
        })?;

        tracing::info!(
            model = %self.model.model_name(),
            elapsed_ms = start_time.elapsed().as_millis(),
            risk_percentage = assessment.risk_percentage,
            band = %assessment.band(),
            recommendations = assessment.recommendations.len(),
            "Risk assessment completed"
        );

        Ok(assessment)
    }

    /// Drive one submission through `state`
    pub async fn submit(&self, state: &mut PredictionState, profile: &PatientProfile) {
        state.begin();
        let outcome = self.assess(profile).await;
        state.finish(outcome);
    }
}
