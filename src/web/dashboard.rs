//! Form-based dashboard.
//!
//! `GET /dashboard/` shows the empty form and a prompt. Submitting the form
//! (`POST /dashboard/`) runs the same inference path as the JSON API and
//! renders a text summary plus a bar chart. No chart is drawn until a
//! submission carries all three values.

use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;

use super::chart::{render_bar_chart, Bar};
use super::html::{escape, page};
use super::styles::DashboardTheme;
use super::SharedService;
use crate::application::InferenceService;
use crate::domain::{FeatureVector, ModelSummary, RulPrediction, FEATURE_NAMES, N_FEATURES};
use crate::ports::Regressor;

/// Shown instead of a chart until every input is filled.
pub const PROMPT: &str = "Enter all three parameters and press Predict.";

const TITLE: &str = "Remaining Useful Life Dashboard";

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardForm {
    pub param1: Option<String>,
    pub param2: Option<String>,
    pub param3: Option<String>,
}

impl DashboardForm {
    fn fields(&self) -> [Option<&str>; N_FEATURES] {
        [
            self.param1.as_deref(),
            self.param2.as_deref(),
            self.param3.as_deref(),
        ]
    }
}

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// No complete submission yet
    Idle,
    /// Inputs present but unusable
    Invalid { message: String },
    /// Prediction available
    Complete { prediction: RulPrediction },
}

/// Turn a form submission into a dashboard state.
pub fn evaluate<R: Regressor>(service: &InferenceService<R>, form: &DashboardForm) -> DashboardState {
    let fields = form.fields();
    if fields
        .iter()
        .any(|f| f.map_or(true, |s| s.trim().is_empty()))
    {
        return DashboardState::Idle;
    }

    let mut values = [0.0; N_FEATURES];
    for (i, raw) in fields.iter().enumerate() {
        let raw = raw.unwrap_or_default().trim();
        match raw.parse::<f64>() {
            Ok(v) => values[i] = v,
            Err(_) => {
                return DashboardState::Invalid {
                    message: format!("{} must be a number, got \"{raw}\"", FEATURE_NAMES[i]),
                }
            }
        }
    }

    match service.predict(FeatureVector::from(values)) {
        Ok(prediction) => DashboardState::Complete { prediction },
        Err(e) => DashboardState::Invalid {
            message: e.to_string(),
        },
    }
}

fn render_form(form: &DashboardForm) -> String {
    let mut inputs = String::new();
    for (i, value) in form.fields().iter().enumerate() {
        let name = FEATURE_NAMES[i];
        inputs.push_str(&format!(
            "<label for=\"{name}\">Parameter {n}</label>\n\
             <input type=\"number\" step=\"any\" id=\"{name}\" name=\"{name}\" value=\"{value}\">\n",
            n = i + 1,
            value = escape(value.unwrap_or_default()),
        ));
    }

    format!(
        "<form method=\"post\" action=\"/dashboard/\">\n{inputs}<button type=\"submit\" id=\"predict\">Predict</button>\n</form>\n"
    )
}

fn render_result(state: &DashboardState) -> String {
    match state {
        DashboardState::Idle => format!("<p class=\"prompt\" id=\"output\">{PROMPT}</p>"),
        DashboardState::Invalid { message } => {
            format!("<p class=\"error\" id=\"output\">{}</p>", escape(message))
        }
        DashboardState::Complete { prediction } => {
            let f = prediction.features;
            let band_color = DashboardTheme::hex(prediction.band.color());
            let summary = format!(
                "<p id=\"output\">Predicted remaining useful life: <strong>{:.2} hours</strong> \
                 <span style=\"color: {band_color}\">[{}] {}</span><br>\
                 Inputs: param1={}, param2={}, param3={}</p>",
                prediction.hours,
                prediction.band,
                prediction.band.description(),
                f.param1,
                f.param2,
                f.param3,
            );

            let bars = [
                Bar::new("Parameter 1", f.param1, DashboardTheme::INFO),
                Bar::new("Parameter 2", f.param2, DashboardTheme::INFO),
                Bar::new("Parameter 3", f.param3, DashboardTheme::INFO),
                Bar::new("Predicted RUL", prediction.hours, band_color),
            ];
            format!(
                "{summary}\n{}",
                render_bar_chart("Inputs and predicted RUL", &bars)
            )
        }
    }
}

/// Render the full dashboard page.
#[must_use]
pub fn render_dashboard(form: &DashboardForm, state: &DashboardState, summary: &ModelSummary) -> String {
    let body = format!(
        "<h1>{TITLE}</h1>\n{form}<section class=\"panel\">\n{result}\n</section>\n\
         <footer>Model trained {trained} on {n} samples ({sv} support vectors, training RMSE {rmse:.2} h)</footer>",
        form = render_form(form),
        result = render_result(state),
        trained = summary.trained_at.format("%Y-%m-%d %H:%M:%S UTC"),
        n = summary.n_samples,
        sv = summary.n_support_vectors,
        rmse = summary.train_rmse,
    );
    page(TITLE, &body)
}

/// `GET /dashboard/`
pub async fn show(State(service): State<SharedService>) -> Html<String> {
    Html(render_dashboard(
        &DashboardForm::default(),
        &DashboardState::Idle,
        service.summary(),
    ))
}

/// `POST /dashboard/`
pub async fn submit(
    State(service): State<SharedService>,
    Form(form): Form<DashboardForm>,
) -> Html<String> {
    let state = evaluate(&*service, &form);
    if let DashboardState::Complete { prediction } = &state {
        tracing::info!(
            "Dashboard prediction: {:.2}h ({})",
            prediction.hours,
            prediction.band
        );
    }
    Html(render_dashboard(&form, &state, service.summary()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Standardization;

    struct FixedRegressor(f64);

    impl Regressor for FixedRegressor {
        fn predict(&self, _x: &[f64; N_FEATURES]) -> f64 {
            self.0
        }
    }

    fn summary() -> ModelSummary {
        ModelSummary {
            n_samples: 10,
            n_support_vectors: 4,
            gamma: 0.3,
            train_rmse: 1.5,
            iterations: 3,
            trained_at: chrono::Utc::now(),
        }
    }

    fn service(hours: f64) -> InferenceService<FixedRegressor> {
        InferenceService::from_parts(
            Standardization {
                mean: [0.0; N_FEATURES],
                scale: [1.0; N_FEATURES],
            },
            FixedRegressor(hours),
            summary(),
        )
    }

    fn form(a: &str, b: &str, c: &str) -> DashboardForm {
        DashboardForm {
            param1: Some(a.into()),
            param2: Some(b.into()),
            param3: Some(c.into()),
        }
    }

    #[test]
    fn test_blank_fields_stay_idle() {
        let svc = service(300.0);
        assert_eq!(evaluate(&svc, &DashboardForm::default()), DashboardState::Idle);
        assert_eq!(evaluate(&svc, &form("1", " ", "3")), DashboardState::Idle);
    }

    #[test]
    fn test_non_numeric_is_invalid() {
        let state = evaluate(&service(300.0), &form("1", "abc", "3"));
        match state {
            DashboardState::Invalid { message } => assert!(message.contains("param2")),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_nan_is_invalid() {
        let state = evaluate(&service(300.0), &form("NaN", "1", "3"));
        assert!(matches!(state, DashboardState::Invalid { .. }));
    }

    #[test]
    fn test_complete_submission() {
        let state = evaluate(&service(321.5), &form("1", "2.5", "-3"));
        match &state {
            DashboardState::Complete { prediction } => {
                assert!((prediction.hours - 321.5).abs() < f64::EPSILON);
                assert_eq!(prediction.features, FeatureVector::new(1.0, 2.5, -3.0));
            }
            other => panic!("unexpected state {other:?}"),
        }

        let html = render_dashboard(&form("1", "2.5", "-3"), &state, &summary());
        assert!(html.contains("321.50 hours"));
        assert!(html.contains("<svg"));
        assert!(html.contains("value=\"2.5\""));
    }

    #[test]
    fn test_idle_page_has_prompt_and_no_chart() {
        let html = render_dashboard(&DashboardForm::default(), &DashboardState::Idle, &summary());
        assert!(html.contains(PROMPT));
        assert!(!html.contains("<svg"));
        assert!(html.contains("id=\"predict\""));
    }

    #[test]
    fn test_echoed_values_are_escaped() {
        let html = render_dashboard(
            &form("\"><script>", "1", "2"),
            &DashboardState::Idle,
            &summary(),
        );
        assert!(!html.contains("<script>"));
    }
}
