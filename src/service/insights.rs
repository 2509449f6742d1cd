//! Aggregate statistics and plot projection over the historical dataset
//!
//! Everything here is derived and stateless; it is recomputed from the record
//! slice on every request.

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::BiometricRecord;

/// Number of records projected into the scatter plot
pub const PLOT_SAMPLE_SIZE: usize = 150;

/// Marker size for diabetic patients
const DIABETIC_MARKER_SIZE: u32 = 50;
/// Marker size for non-diabetic patients
const NON_DIABETIC_MARKER_SIZE: u32 = 20;

/// Scalar aggregates shown on the summary cards
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DatasetSummary {
    pub record_count: usize,
    /// Arithmetic mean glucose (mg/dL)
    pub mean_glucose: f64,
    /// Arithmetic mean BMI (kg/m²)
    pub mean_bmi: f64,
    /// Percentage of records with outcome 1
    pub diabetes_rate: f64,
}

impl DatasetSummary {
    /// Compute the aggregates, `None` for an empty dataset
    pub fn compute(records: &[BiometricRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let total = records.len() as f64;
        let glucose_sum: f64 = records.iter().map(|r| r.glucose as f64).sum();
        let bmi_sum: f64 = records.iter().map(|r| r.bmi).sum();
        let diabetic = records.iter().filter(|r| r.is_diabetic()).count() as f64;

        Some(Self {
            record_count: records.len(),
            mean_glucose: glucose_sum / total,
            mean_bmi: bmi_sum / total,
            diabetes_rate: diabetic / total * 100.0,
        })
    }

    pub fn mean_glucose_display(&self) -> String {
        one_decimal(self.mean_glucose)
    }

    pub fn mean_bmi_display(&self) -> String {
        one_decimal(self.mean_bmi)
    }

    pub fn diabetes_rate_display(&self) -> String {
        one_decimal(self.diabetes_rate)
    }
}

/// Format with exactly one decimal place, rounding exact halves away from zero
pub fn one_decimal(value: f64) -> String {
    // Only odd multiples of 0.25 are exact ties at one decimal; `{:.1}` would
    // round those half to even. Ties go away from zero, so work on the
    // magnitude and restore the sign.
    let magnitude = value.abs();
    let quarters = magnitude * 4.0;
    let digits = if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
        format!("{:.1}", magnitude + 0.05)
    } else {
        format!("{:.1}", magnitude)
    };

    if value < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// One marker of the glucose vs BMI scatter plot
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlotPoint {
    /// BMI
    pub x: f64,
    /// Glucose
    pub y: f64,
    /// Marker size
    pub z: u32,
    pub outcome: i32,
}

impl PlotPoint {
    pub fn is_diabetic(&self) -> bool {
        self.outcome == 1
    }
}

/// Project the first [`PLOT_SAMPLE_SIZE`] records into plot points
pub fn plot_points(records: &[BiometricRecord]) -> Vec<PlotPoint> {
    records
        .iter()
        .take(PLOT_SAMPLE_SIZE)
        .map(|r| PlotPoint {
            x: r.bmi,
            y: r.glucose as f64,
            z: if r.is_diabetic() {
                DIABETIC_MARKER_SIZE
            } else {
                NON_DIABETIC_MARKER_SIZE
            },
            outcome: r.outcome,
        })
        .collect()
}
