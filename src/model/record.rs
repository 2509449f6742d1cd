use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the Pima Indians Diabetes dataset
///
/// Fields follow the dataset's column order, which is also the order the
/// CSV loader deserializes them in. Values are not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct BiometricRecord {
    pub pregnancies: i32,
    /// Plasma glucose concentration (mg/dL)
    pub glucose: i32,
    /// Diastolic blood pressure (mm Hg)
    pub blood_pressure: i32,
    /// Triceps skin fold thickness (mm)
    pub skin_thickness: i32,
    /// 2-hour serum insulin (mu U/ml)
    pub insulin: i32,
    /// Body mass index (kg/m²)
    #[serde(rename = "BMI")]
    pub bmi: f64,
    pub diabetes_pedigree_function: f64,
    pub age: i32,
    /// 1 when the patient was diagnosed diabetic, 0 otherwise
    pub outcome: i32,
}

impl BiometricRecord {
    pub fn is_diabetic(&self) -> bool {
        self.outcome == 1
    }
}

/// The eight clinical measurements a user enters in the prediction form
///
/// The fields of a [`BiometricRecord`] without the diagnosis outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PatientProfile {
    pub pregnancies: i32,
    pub glucose: i32,
    pub blood_pressure: i32,
    pub skin_thickness: i32,
    pub insulin: i32,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    pub diabetes_pedigree_function: f64,
    pub age: i32,
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            pregnancies: 0,
            glucose: 100,
            blood_pressure: 70,
            skin_thickness: 20,
            insulin: 80,
            bmi: 25.0,
            diabetes_pedigree_function: 0.5,
            age: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_uses_dataset_column_names() {
        let json = serde_json::to_value(PatientProfile::default()).unwrap();

        assert_eq!(json["Pregnancies"], 0);
        assert_eq!(json["Glucose"], 100);
        assert_eq!(json["BloodPressure"], 70);
        assert_eq!(json["SkinThickness"], 20);
        assert_eq!(json["Insulin"], 80);
        assert_eq!(json["BMI"], 25.0);
        assert_eq!(json["DiabetesPedigreeFunction"], 0.5);
        assert_eq!(json["Age"], 30);
        assert!(json.get("Outcome").is_none());
    }
}
