//! Error types for risk assessment

use thiserror::Error;

use crate::service::assessment::validation::ReplyError;
use crate::service::llm::LlmError;

/// Message shown to the user for every analysis failure
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to generate AI analysis. Please check your inputs.";

/// Error type for risk assessment
///
/// Every variant displays the same generic message; the underlying cause is
/// only available through [`std::error::Error::source`] for logging.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("{}", ANALYSIS_FAILED_MESSAGE)]
    ModelFailed(#[source] LlmError),

    #[error("{}", ANALYSIS_FAILED_MESSAGE)]
    InvalidReply(#[source] ReplyError),
}
