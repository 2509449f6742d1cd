//! Prompts for diabetes risk assessment

use crate::model::PatientProfile;

/// System prompt for the risk extractor
pub const RISK_SYSTEM_PROMPT: &str = "You are a clinical decision-support assistant. \
Estimate diabetes risk from the measurements you are given, ground the explanation in WHO/ADA \
reference ranges, and submit the result with the provided tool.";

/// Build the analysis prompt embedding the patient's measurements
pub fn build_risk_prompt(profile: &PatientProfile) -> String {
    format!(
        r#"Analyze the following patient data for diabetes risk.
Context: This is based on the Pima Indians Diabetes Dataset parameters.

Patient Data:
- Pregnancies: {pregnancies}
- Glucose: {glucose} mg/dL
- Blood Pressure: {blood_pressure} mm Hg
- Skin Thickness: {skin_thickness} mm
- Insulin: {insulin} mu U/ml
- BMI: {bmi}
- Diabetes Pedigree Function: {pedigree}
- Age: {age} years

Task:
1. Provide a risk percentage (0-100%).
2. Give a brief explanation of why the risk is high or low based on medical standards (WHO/ADA).
3. Suggest the most critical parameters that the user should monitor.
4. Provide a JSON response format."#,
        pregnancies = profile.pregnancies,
        glucose = profile.glucose,
        blood_pressure = profile.blood_pressure,
        skin_thickness = profile.skin_thickness,
        insulin = profile.insulin,
        bmi = profile.bmi,
        pedigree = profile.diabetes_pedigree_function,
        age = profile.age,
    )
}
