//! Server-side HTML rendering
//!
//! The page shell (header, tabs, footer) wraps one of two tab bodies: the
//! predictor (form, error banner, result panel) or the data insights
//! dashboard.

pub mod chart;
pub mod dashboard;
pub mod form;
pub mod result;

use crate::model::PatientProfile;
use crate::service::assessment::error::ANALYSIS_FAILED_MESSAGE;
use crate::service::assessment::state::{PredictionPhase, PredictionState};
use crate::service::insights::{DatasetSummary, PlotPoint};

/// The two tabs of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Predictor,
    Insights,
}

impl Tab {
    fn heading(&self) -> &'static str {
        match self {
            Tab::Predictor => "Risk Prediction Engine",
            Tab::Insights => "Historical Data Analysis",
        }
    }

    fn subtitle(&self) -> &'static str {
        match self {
            Tab::Predictor => {
                "Input biometric markers to evaluate potential diabetes risk using Gemini AI."
            }
            Tab::Insights => {
                "Statistical visualization of the Pima Indians Diabetes dataset patterns."
            }
        }
    }
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Full predictor page
pub fn predictor_page(profile: &PatientProfile, state: &PredictionState) -> String {
    let mut body = String::from(
        r#"<div class="grid grid-cols-1 lg:grid-cols-12 gap-8 items-start"><div class="lg:col-span-5">"#,
    );
    body.push_str(&form::render_form(profile));
    if state.phase() == PredictionPhase::Failed {
        body.push_str(&error_banner(state.error().unwrap_or(ANALYSIS_FAILED_MESSAGE)));
    }
    body.push_str(r#"</div><div class="lg:col-span-7">"#);
    match state.result() {
        Some(assessment) => body.push_str(&result::render_result(assessment)),
        None => body.push_str(result::PLACEHOLDER),
    }
    body.push_str("</div></div>");

    layout(Tab::Predictor, &body)
}

/// Full data insights page
pub fn insights_page(summary: Option<&DatasetSummary>, points: &[PlotPoint]) -> String {
    layout(Tab::Insights, &dashboard::render_dashboard(summary, points))
}

fn error_banner(message: &str) -> String {
    format!(
        r#"<div role="alert" class="mt-4 p-4 bg-red-50 border border-red-200 text-red-700 rounded-lg flex items-center space-x-2"><span>{}</span></div>"#,
        escape(message)
    )
}

fn tab_link(tab: Tab, active: Tab, href: &str, label: &str) -> String {
    let class = if tab == active {
        "bg-white text-blue-600 shadow-sm"
    } else {
        "text-slate-500 hover:text-slate-700"
    };
    format!(
        r#"<a href="{href}" class="px-4 py-1.5 rounded-md text-sm font-medium transition-all {class}">{label}</a>"#
    )
}

fn layout(active: Tab, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Diabetes Predictor AI</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-slate-50">
<div class="min-h-screen pb-20">
<header class="bg-white border-b border-slate-200 sticky top-0 z-50">
<div class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
<div class="flex items-center space-x-2"><div class="w-8 h-8 bg-blue-600 rounded-lg"></div><h1 class="text-xl font-bold text-slate-800 hidden sm:block">Diabetes Predictor AI</h1></div>
<nav class="flex space-x-1 bg-slate-100 p-1 rounded-lg">{predictor}{insights}</nav>
</div>
</header>
<main class="max-w-6xl mx-auto px-4 py-8">
<div class="mb-8">
<h2 class="text-3xl font-extrabold text-slate-900 tracking-tight">{heading}</h2>
<p class="text-slate-600 mt-2">{subtitle}</p>
</div>
{body}
</main>
<footer class="mt-12 py-10 border-t border-slate-200 bg-white">
<div class="max-w-6xl mx-auto px-4 grid grid-cols-1 md:grid-cols-2 gap-8 text-sm text-slate-500">
<div><h4 class="font-bold text-slate-800 mb-4 uppercase tracking-wider text-xs">About the Dataset</h4>
<p class="leading-relaxed">This app utilizes the Pima Indians Diabetes Dataset, which records diagnostic measurements for female patients of Pima Indian heritage. It includes features like Glucose levels, BMI, and Insulin to predict diabetes outcomes.</p></div>
<div><h4 class="font-bold text-slate-800 mb-4 uppercase tracking-wider text-xs">Medical Disclaimer</h4>
<p class="leading-relaxed">This tool is for educational purposes only. It uses machine learning models and AI to provide risk estimates and should not be used as a substitute for professional medical advice, diagnosis, or treatment.</p></div>
</div>
</footer>
</div>
</body>
</html>
"#,
        predictor = tab_link(Tab::Predictor, active, "/", "Predictor"),
        insights = tab_link(Tab::Insights, active, "/insights", "Data Insights"),
        heading = active.heading(),
        subtitle = active.subtitle(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskAssessment;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_idle_predictor_page_shows_placeholder() {
        let page = predictor_page(&PatientProfile::default(), &PredictionState::default());

        assert!(page.contains("Risk Prediction Engine"));
        assert!(page.contains("Ready for Analysis"));
        assert!(!page.contains("role=\"alert\""));
        assert!(page.contains(r#"href="/" class="px-4 py-1.5 rounded-md text-sm font-medium transition-all bg-white text-blue-600"#));
    }

    #[test]
    fn test_error_banner_is_shown() {
        let mut state = PredictionState::default();
        state.reject(ANALYSIS_FAILED_MESSAGE);

        let page = predictor_page(&PatientProfile::default(), &state);

        assert!(page.contains("role=\"alert\""));
        assert!(page.contains("Failed to generate AI analysis. Please check your inputs."));
    }

    #[test]
    fn test_result_replaces_placeholder() {
        let mut state = PredictionState::default();
        state.begin();
        state.finish(Ok(RiskAssessment {
            risk_percentage: 15.0,
            risk_level: "Low".to_string(),
            explanation: "All markers in range.".to_string(),
            recommendations: vec!["Annual check-up".to_string()],
        }));

        let page = predictor_page(&PatientProfile::default(), &state);

        assert!(!page.contains("Ready for Analysis"));
        assert!(page.contains("All markers in range."));
    }

    #[test]
    fn test_insights_page_marks_insights_tab_active() {
        let page = insights_page(None, &[]);

        assert!(page.contains("Historical Data Analysis"));
        assert!(page.contains(r#"href="/insights" class="px-4 py-1.5 rounded-md text-sm font-medium transition-all bg-white text-blue-600"#));
    }
}
