//! Validation of extracted risk assessments
//!
//! Shape and types are enforced when the reply is deserialized; this checks
//! what the schema cannot express.

use crate::model::RiskAssessment;

/// Why an extracted assessment was rejected
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReplyError {
    #[error("Risk percentage {0} is outside 0-100")]
    PercentageOutOfRange(f64),
}

/// Check an extracted assessment before it is shown
pub fn validate_assessment(assessment: &RiskAssessment) -> Result<(), ReplyError> {
    if !(0.0..=100.0).contains(&assessment.risk_percentage) {
        return Err(ReplyError::PercentageOutOfRange(
            assessment.risk_percentage,
        ));
    }

    Ok(())
}
