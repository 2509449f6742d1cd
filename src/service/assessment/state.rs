//! Per-submission prediction state
//!
//! `Idle -> Requesting -> Done | Failed`. A new submission clears the previous
//! error; a success replaces the previous result; a failure keeps it.

use crate::model::RiskAssessment;
use crate::service::assessment::AssessmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionPhase {
    #[default]
    Idle,
    Requesting,
    Done,
    Failed,
}

/// What the predictor page shows: phase, last result, last error
#[derive(Debug, Clone, Default)]
pub struct PredictionState {
    phase: PredictionPhase,
    result: Option<RiskAssessment>,
    error: Option<String>,
}

impl PredictionState {
    pub fn phase(&self) -> PredictionPhase {
        self.phase
    }

    pub fn result(&self) -> Option<&RiskAssessment> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter the requesting state
    pub fn begin(&mut self) {
        self.phase = PredictionPhase::Requesting;
        self.error = None;
    }

    /// Leave the requesting state with the outcome of the model call
    pub fn finish(&mut self, outcome: Result<RiskAssessment, AssessmentError>) {
        match outcome {
            Ok(assessment) => {
                self.result = Some(assessment);
                self.phase = PredictionPhase::Done;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.phase = PredictionPhase::Failed;
            }
        }
    }

    /// Show an error that did not come from the model (e.g. an undecodable form)
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.phase = PredictionPhase::Failed;
    }
}
