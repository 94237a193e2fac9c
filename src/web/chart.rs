//! Inline SVG bar chart.
//!
//! Bars share one vertical axis with zero as the baseline, so negative
//! values (possible for an unclamped prediction) hang below it.

use std::fmt::Write;

use super::html::escape;
use super::styles::DashboardTheme;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_X: f64 = 24.0;
const GAP: f64 = 24.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Render bars as a standalone `<svg>` element.
#[must_use]
pub fn render_bar_chart(title: &str, bars: &[Bar]) -> String {
    let top = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let bottom = bars.iter().map(|b| b.value).fold(0.0_f64, f64::min);
    let span = if top - bottom > 0.0 { top - bottom } else { 1.0 };

    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let y_of = |v: f64| MARGIN_TOP + (top - v) / span * plot_h;
    let baseline = y_of(0.0);

    let n = bars.len().max(1) as f64;
    let bar_w = (WIDTH - 2.0 * MARGIN_X - GAP * (n - 1.0)) / n;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg class="chart" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{title}">"#,
        title = escape(title)
    );
    let _ = write!(svg, "<title>{}</title>", escape(title));

    for (i, bar) in bars.iter().enumerate() {
        let x = MARGIN_X + i as f64 * (bar_w + GAP);
        let y = y_of(bar.value).min(baseline);
        let h = (y_of(bar.value) - baseline).abs();
        let cx = x + bar_w / 2.0;

        let _ = write!(
            svg,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{}"/>"#,
            escape(&bar.color)
        );
        let _ = write!(
            svg,
            r#"<text x="{cx:.1}" y="{:.1}" fill="{}" font-size="12" text-anchor="middle">{:.2}</text>"#,
            (y - 6.0).max(12.0),
            DashboardTheme::TEXT_PRIMARY,
            bar.value
        );
        let _ = write!(
            svg,
            r#"<text x="{cx:.1}" y="{:.1}" fill="{}" font-size="12" text-anchor="middle">{}</text>"#,
            HEIGHT - MARGIN_BOTTOM / 2.0 + 4.0,
            DashboardTheme::TEXT_SECONDARY,
            escape(&bar.label)
        );
    }

    let _ = write!(
        svg,
        r#"<line x1="{MARGIN_X}" y1="{baseline:.1}" x2="{:.1}" y2="{baseline:.1}" stroke="{}"/>"#,
        WIDTH - MARGIN_X,
        DashboardTheme::TEXT_MUTED
    );
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_rect_per_bar() {
        let svg = render_bar_chart(
            "Inputs vs prediction",
            &[
                Bar::new("param1", 70.0, "#3B82F6"),
                Bar::new("param2", 0.5, "#3B82F6"),
                Bar::new("param3", 30.0, "#3B82F6"),
                Bar::new("Predicted RUL", 512.25, "#10B981"),
            ],
        );

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 4);
        assert!(svg.contains("512.25"));
        assert!(svg.contains("Predicted RUL"));
    }

    #[test]
    fn test_negative_values_render() {
        let svg = render_bar_chart("t", &[Bar::new("a", -40.0, "#000"), Bar::new("b", 10.0, "#000")]);
        assert!(svg.contains("-40.00"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_all_zero_values_do_not_divide_by_zero() {
        let svg = render_bar_chart("t", &[Bar::new("a", 0.0, "#000")]);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let svg = render_bar_chart("<t>", &[Bar::new("<b>", 1.0, "#000")]);
        assert!(!svg.contains("<b>"));
        assert!(svg.contains("&lt;b&gt;"));
    }
}
