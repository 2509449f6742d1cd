//! Glucose vs BMI scatter plot rendered as standalone SVG

use std::f64::consts::PI;

use crate::service::insights::PlotPoint;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;
const TICK_COUNT: usize = 4;

pub const DIABETIC_COLOR: &str = "#e11d48";
pub const NON_DIABETIC_COLOR: &str = "#2563eb";
const POINT_OPACITY: f64 = 0.6;

/// Linear mapping from a data range onto a pixel range
#[derive(Debug, Clone, Copy)]
struct Axis {
    max: f64,
    start_px: f64,
    end_px: f64,
}

impl Axis {
    fn new(data_max: f64, start_px: f64, end_px: f64) -> Self {
        Self {
            max: nice_ceiling(data_max),
            start_px,
            end_px,
        }
    }

    fn project(&self, value: f64) -> f64 {
        self.start_px + (value / self.max) * (self.end_px - self.start_px)
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=TICK_COUNT).map(move |i| self.max * i as f64 / TICK_COUNT as f64)
    }
}

/// Smallest of 1, 2, 2.5, 5, 10 times a power of ten at or above `value`
fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powf(value.log10().floor());
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}

/// Marker radius whose area tracks the point's size value
fn marker_radius(z: u32) -> f64 {
    (2.0 * z as f64 / PI).sqrt()
}

/// Render the scatter plot (x = BMI, y = glucose)
pub fn render_scatter_svg(points: &[PlotPoint]) -> String {
    let x_axis = Axis::new(
        points.iter().map(|p| p.x).fold(0.0, f64::max),
        MARGIN_LEFT,
        WIDTH - MARGIN_RIGHT,
    );
    let y_axis = Axis::new(
        points.iter().map(|p| p.y).fold(0.0, f64::max),
        HEIGHT - MARGIN_BOTTOM,
        MARGIN_TOP,
    );

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="100%" height="100%" role="img" aria-label="Glucose vs BMI scatter plot">"#,
        w = WIDTH,
        h = HEIGHT
    );

    // grid and tick labels
    for tick in x_axis.ticks() {
        let x = x_axis.project(tick);
        svg.push_str(&format!(
            r##"<line x1="{x:.1}" y1="{top}" x2="{x:.1}" y2="{bottom}" stroke="#cbd5e1" stroke-dasharray="3 3" opacity="0.5"/>"##,
            top = MARGIN_TOP,
            bottom = HEIGHT - MARGIN_BOTTOM
        ));
        svg.push_str(&format!(
            r##"<text x="{x:.1}" y="{y}" text-anchor="middle" font-size="12" fill="#64748b">{label}</text>"##,
            y = HEIGHT - MARGIN_BOTTOM + 18.0,
            label = tick
        ));
    }
    for tick in y_axis.ticks() {
        let y = y_axis.project(tick);
        svg.push_str(&format!(
            r##"<line x1="{left}" y1="{y:.1}" x2="{right}" y2="{y:.1}" stroke="#cbd5e1" stroke-dasharray="3 3" opacity="0.5"/>"##,
            left = MARGIN_LEFT,
            right = WIDTH - MARGIN_RIGHT
        ));
        svg.push_str(&format!(
            r##"<text x="{x}" y="{y:.1}" text-anchor="end" dominant-baseline="middle" font-size="12" fill="#64748b">{label}</text>"##,
            x = MARGIN_LEFT - 8.0,
            label = tick
        ));
    }

    // axis titles
    svg.push_str(&format!(
        r##"<text x="{x:.1}" y="{y}" text-anchor="middle" font-size="13" fill="#334155">BMI (kg/m²)</text>"##,
        x = (MARGIN_LEFT + WIDTH - MARGIN_RIGHT) / 2.0,
        y = HEIGHT - 8.0
    ));
    svg.push_str(&format!(
        r##"<text x="18" y="{y:.1}" text-anchor="middle" font-size="13" fill="#334155" transform="rotate(-90 18 {y:.1})">Glucose (mg/dL)</text>"##,
        y = (MARGIN_TOP + HEIGHT - MARGIN_BOTTOM) / 2.0
    ));

    for point in points {
        let color = if point.is_diabetic() {
            DIABETIC_COLOR
        } else {
            NON_DIABETIC_COLOR
        };
        svg.push_str(&format!(
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.2}" fill="{color}" fill-opacity="{opacity}"><title>BMI {x}, Glucose {y}</title></circle>"#,
            cx = x_axis.project(point.x),
            cy = y_axis.project(point.y),
            r = marker_radius(point.z),
            opacity = POINT_OPACITY,
            x = point.x,
            y = point.y
        ));
    }

    svg.push_str("</svg>");
    svg
}
