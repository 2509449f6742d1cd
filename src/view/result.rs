//! Risk assessment result panel

use crate::model::RiskAssessment;
use crate::view::escape;

/// Shown in place of the result before the first successful submission
pub const PLACEHOLDER: &str = r#"<div class="h-full border-2 border-dashed border-slate-200 rounded-xl flex flex-col items-center justify-center p-12 text-center text-slate-400"><h3 class="text-lg font-medium text-slate-600 mb-2">Ready for Analysis</h3><p class="max-w-xs">Fill out the form to the left and click "Generate Prediction" to receive your AI-powered risk assessment.</p></div>"#;

/// Render an assessment; every recommendation is listed
pub fn render_result(assessment: &RiskAssessment) -> String {
    let band = assessment.band();

    let recommendations: String = assessment
        .recommendations
        .iter()
        .map(|rec| {
            format!(
                r#"<li class="flex items-start space-x-2 bg-white/50 p-3 rounded-lg text-slate-700 text-sm"><span class="text-blue-500 font-bold">•</span><span>{}</span></li>"#,
                escape(rec)
            )
        })
        .collect();

    format!(
        r#"<div class="mt-6 p-6 rounded-xl border {panel}" data-risk-band="{band}">
<div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-6 gap-4">
<div><h3 class="text-sm font-semibold uppercase tracking-wider text-slate-500 mb-1">Risk Assessment Result</h3>
<p class="text-4xl font-bold {text}">{percentage}% <span class="text-2xl font-normal text-slate-600 ml-2">({level})</span></p></div>
<div class="bg-white px-4 py-2 rounded-full shadow-sm border border-slate-100 flex items-center space-x-2"><div class="w-3 h-3 rounded-full animate-pulse {dot}"></div><span class="text-sm font-medium text-slate-700">AI Verified Analysis</span></div>
</div>
<div class="space-y-6">
<div><h4 class="font-bold text-slate-800 mb-2">Medical Reasoning</h4><p class="text-slate-700 leading-relaxed">{explanation}</p></div>
<div><h4 class="font-bold text-slate-800 mb-3">Health Recommendations</h4><ul class="grid grid-cols-1 md:grid-cols-2 gap-3">{recommendations}</ul></div>
</div>
</div>"#,
        panel = band.panel_class(),
        text = band.text_class(),
        dot = band.dot_class(),
        percentage = assessment.risk_percentage,
        level = escape(&assessment.risk_level),
        explanation = escape(&assessment.explanation),
    )
}
