//! Risk assessment form

use crate::model::PatientProfile;
use crate::view::escape;

const INPUT_CLASSES: &str = "w-full p-2 border border-slate-200 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none transition-all";
const LABEL_CLASSES: &str = "block text-sm font-medium text-slate-700 mb-1";

/// One numeric input; `name` is the dataset column the value is submitted as
struct Field {
    name: &'static str,
    label: &'static str,
    step: &'static str,
    value: String,
}

fn fields(profile: &PatientProfile) -> [Field; 8] {
    [
        Field {
            name: "Pregnancies",
            label: "Pregnancies",
            step: "1",
            value: profile.pregnancies.to_string(),
        },
        Field {
            name: "Glucose",
            label: "Glucose (mg/dL)",
            step: "1",
            value: profile.glucose.to_string(),
        },
        Field {
            name: "BloodPressure",
            label: "Blood Pressure (mm Hg)",
            step: "1",
            value: profile.blood_pressure.to_string(),
        },
        Field {
            name: "SkinThickness",
            label: "Skin Thickness (mm)",
            step: "1",
            value: profile.skin_thickness.to_string(),
        },
        Field {
            name: "Insulin",
            label: "Insulin (mu U/ml)",
            step: "1",
            value: profile.insulin.to_string(),
        },
        Field {
            name: "BMI",
            label: "BMI (kg/m²)",
            step: "0.1",
            value: profile.bmi.to_string(),
        },
        Field {
            name: "DiabetesPedigreeFunction",
            label: "Pedigree Function",
            step: "0.001",
            value: profile.diabetes_pedigree_function.to_string(),
        },
        Field {
            name: "Age",
            label: "Age",
            step: "1",
            value: profile.age.to_string(),
        },
    ]
}

/// Swaps the button into its pending state while the POST is in flight
///
/// The page is rendered only once the model call has finished, so this script
/// is the only thing that ever shows the pending state.
const SUBMIT_SCRIPT: &str = r#"<script>
document.getElementById("predictor-form").addEventListener("submit", function () {
  var button = document.getElementById("predict-button");
  button.disabled = true;
  button.textContent = "Analyzing...";
});
</script>"#;

/// Render the form pre-filled with `profile`
pub fn render_form(profile: &PatientProfile) -> String {
    let mut html = String::from(
        r#"<form id="predictor-form" method="post" action="/predict" class="space-y-4 bg-white p-6 rounded-xl shadow-sm border border-slate-100"><h2 class="text-xl font-bold text-slate-800 mb-4">Risk Assessment Form</h2><div class="grid grid-cols-1 md:grid-cols-2 gap-4">"#,
    );

    for field in fields(profile) {
        html.push_str(&format!(
            r#"<div><label for="{name}" class="{LABEL_CLASSES}">{label}</label><input type="number" id="{name}" name="{name}" step="{step}" value="{value}" class="{INPUT_CLASSES}" required></div>"#,
            name = field.name,
            label = escape(field.label),
            step = field.step,
            value = escape(&field.value),
        ));
    }

    html.push_str(
        r#"</div><button type="submit" id="predict-button" class="w-full mt-6 bg-blue-600 hover:bg-blue-700 text-white font-semibold py-3 px-4 rounded-lg transition-colors disabled:bg-blue-300">Generate Prediction</button></form>"#,
    );
    html.push_str(SUBMIT_SCRIPT);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_has_eight_required_inputs_with_defaults() {
        let html = render_form(&PatientProfile::default());

        assert_eq!(html.matches("<input").count(), 8);
        assert_eq!(html.matches(" required>").count(), 8);
        assert!(html.contains(r#"name="Glucose" step="1" value="100""#));
        assert!(html.contains(r#"name="BMI" step="0.1" value="25""#));
        assert!(html.contains(r#"name="DiabetesPedigreeFunction" step="0.001" value="0.5""#));
        assert!(html.contains(">Generate Prediction</button>"));
    }

    #[test]
    fn test_form_keeps_submitted_values() {
        let profile = PatientProfile {
            glucose: 155,
            bmi: 31.7,
            ..PatientProfile::default()
        };

        let html = render_form(&profile);

        assert!(html.contains(r#"name="Glucose" step="1" value="155""#));
        assert!(html.contains(r#"name="BMI" step="0.1" value="31.7""#));
    }

    #[test]
    fn test_pending_state_is_left_to_the_script() {
        let html = render_form(&PatientProfile::default());

        assert!(!html.contains(" disabled>"));
        assert!(html.contains(r#"button.textContent = "Analyzing...";"#));
        assert!(html.ends_with("</script>"));
    }
}
