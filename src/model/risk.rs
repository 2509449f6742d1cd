use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Structured result of a single AI risk analysis
///
/// All four fields are required. A model reply missing any of them is
/// rejected rather than partially accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Estimated risk, 0-100
    #[schemars(description = "Estimated probability of diabetes as a percentage from 0 to 100")]
    pub risk_percentage: f64,
    /// Qualitative label chosen by the model (e.g. "Moderate")
    #[schemars(description = "Short qualitative risk label (e.g. 'Low', 'Moderate', 'High')")]
    pub risk_level: String,
    #[schemars(
        description = "Brief explanation of why the risk is high or low based on WHO/ADA standards"
    )]
    pub explanation: String,
    #[schemars(description = "The most critical parameters the patient should monitor")]
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    pub fn band(&self) -> RiskBand {
        RiskBand::from_percentage(self.risk_percentage)
    }
}

/// Presentation tier derived from the risk percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Low below 30, medium below 70, high otherwise
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 30.0 {
            RiskBand::Low
        } else if percentage < 70.0 {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }

    /// CSS class for the headline percentage
    pub fn text_class(&self) -> &'static str {
        match self {
            RiskBand::Low => "text-green-600",
            RiskBand::Medium => "text-amber-600",
            RiskBand::High => "text-red-600",
        }
    }

    /// CSS classes for the result panel background and border
    pub fn panel_class(&self) -> &'static str {
        match self {
            RiskBand::Low => "bg-green-50 border-green-200",
            RiskBand::Medium => "bg-amber-50 border-amber-200",
            RiskBand::High => "bg-red-50 border-red-200",
        }
    }

    /// CSS class for the status dot next to the headline
    pub fn dot_class(&self) -> &'static str {
        match self {
            RiskBand::Low => "bg-green-600",
            RiskBand::Medium => "bg-amber-600",
            RiskBand::High => "bg-red-600",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskBand::Low => write!(f, "low"),
            RiskBand::Medium => write!(f, "medium"),
            RiskBand::High => write!(f, "high"),
        }
    }
}
