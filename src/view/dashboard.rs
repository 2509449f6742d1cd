//! Data insights tab: summary cards and the scatter plot

use crate::service::insights::{DatasetSummary, PLOT_SAMPLE_SIZE, PlotPoint};
use crate::view::chart::render_scatter_svg;

const EMPTY_STATE: &str = r#"<div class="p-12 text-center text-slate-400 border-2 border-dashed border-slate-200 rounded-xl">The historical dataset is not available.</div>"#;

fn card(title: &str, value: &str, unit: &str, value_class: &str) -> String {
    format!(
        r#"<div class="bg-white p-4 rounded-xl border border-slate-100 shadow-sm"><p class="text-slate-500 text-sm font-medium">{title}</p><p class="text-2xl font-bold {value_class}">{value} <span class="text-xs font-normal text-slate-400">{unit}</span></p></div>"#
    )
}

/// Render the dashboard; an empty dataset renders only the empty-state note
pub fn render_dashboard(summary: Option<&DatasetSummary>, points: &[PlotPoint]) -> String {
    let Some(summary) = summary else {
        return EMPTY_STATE.to_string();
    };

    let cards = [
        card(
            "Avg. Glucose",
            &summary.mean_glucose_display(),
            "mg/dL",
            "text-blue-600",
        ),
        card("Avg. BMI", &summary.mean_bmi_display(), "kg/m²", "text-indigo-600"),
        card(
            "Diabetes Rate",
            &format!("{}%", summary.diabetes_rate_display()),
            "in dataset",
            "text-rose-600",
        ),
    ]
    .concat();

    format!(
        r#"<div class="space-y-6">
<div class="grid grid-cols-1 md:grid-cols-3 gap-4">{cards}</div>
<div class="bg-white p-6 rounded-xl border border-slate-100 shadow-sm">
<h3 class="text-lg font-bold text-slate-800 mb-6 flex items-center space-x-2"><span>Dataset Correlation: Glucose vs BMI</span><span class="text-xs font-normal text-slate-400 bg-slate-100 px-2 py-0.5 rounded">Sample size: {sample}</span></h3>
<div class="h-[400px] w-full">{chart}</div>
<div class="flex justify-center space-x-6 mt-4 text-sm font-medium">
<div class="flex items-center space-x-2"><div class="w-3 h-3 rounded-full bg-rose-500 opacity-60"></div><span>Diabetic</span></div>
<div class="flex items-center space-x-2"><div class="w-3 h-3 rounded-full bg-blue-500 opacity-60"></div><span>Non-Diabetic</span></div>
</div>
</div>
</div>"#,
        sample = PLOT_SAMPLE_SIZE,
        chart = render_scatter_svg(points),
    )
}
