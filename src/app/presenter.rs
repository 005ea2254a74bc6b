//! The current session: three text fields and the last successful render.
//!
//! Both front-ends go through the presenter, so the workflow lives in one place:
//! text fields -> parse/validate -> compute -> layout -> explanation.
//!
//! A failed `visualize` never touches the previous render.

use crate::calc::{compute_input, parse_input};
use crate::domain::{BayesResult, DiagramLayout, ProbabilityField};
use crate::error::BayesError;
use crate::layout::layout;
use crate::report::format_explanation;

/// Everything needed to draw one diagram and its results panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Render {
    pub result: BayesResult,
    pub layout: DiagramLayout,
    pub explanation: String,
}

fn build_render(result: BayesResult, canvas_width: u32, canvas_height: u32) -> Render {
    let layout = layout(&result, canvas_width, canvas_height);
    tracing::debug!(
        split = layout.column_h_split,
        fill_h = layout.fill_height_h,
        fill_not_h = layout.fill_height_not_h,
        "diagram layout"
    );
    Render {
        explanation: format_explanation(&result),
        result,
        layout,
    }
}

#[derive(Debug, Clone)]
pub struct Presenter {
    fields: [String; 3],
    canvas_width: u32,
    canvas_height: u32,
    current: Option<Render>,
}

impl Presenter {
    /// A session with the default field texts.
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            fields: ProbabilityField::ALL.map(|f| f.default_text().to_string()),
            canvas_width,
            canvas_height,
            current: None,
        }
    }

    pub fn with_fields(mut self, prior: &str, likelihood_h: &str, likelihood_not_h: &str) -> Self {
        self.fields = [
            prior.to_string(),
            likelihood_h.to_string(),
            likelihood_not_h.to_string(),
        ];
        self
    }

    pub fn field(&self, field: ProbabilityField) -> &str {
        &self.fields[field.index()]
    }

    pub fn set_field(&mut self, field: ProbabilityField, text: impl Into<String>) {
        self.fields[field.index()] = text.into();
    }

    pub fn field_mut(&mut self, field: ProbabilityField) -> &mut String {
        &mut self.fields[field.index()]
    }

    /// Restore the default texts. The current render is kept until the next `visualize`.
    pub fn reset_fields(&mut self) {
        self.fields = ProbabilityField::ALL.map(|f| f.default_text().to_string());
    }

    /// The last successful render, if any.
    pub fn current(&self) -> Option<&Render> {
        self.current.as_ref()
    }

    /// Handle the "Visualize" action.
    pub fn visualize(&mut self) -> Result<&Render, BayesError> {
        let [prior, likelihood_h, likelihood_not_h] = &self.fields;
        let outcome = parse_input(prior, likelihood_h, likelihood_not_h).and_then(compute_input);

        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "rejected input");
                return Err(err);
            }
        };

        tracing::info!(
            prior = result.input.prior(),
            likelihood_h = result.input.likelihood_given_h(),
            likelihood_not_h = result.input.likelihood_given_not_h(),
            posterior = result.posterior,
            "rendered"
        );
        let render = build_render(result, self.canvas_width, self.canvas_height);
        Ok(&*self.current.insert(render))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_defaults_and_no_render() {
        let p = Presenter::new(600, 600);
        assert_eq!(p.field(ProbabilityField::Prior), "0.1");
        assert_eq!(p.field(ProbabilityField::Likelihood), "0.9");
        assert_eq!(p.field(ProbabilityField::FalsePositive), "0.2");
        assert!(p.current().is_none());
    }

    #[test]
    fn visualize_defaults() {
        let mut p = Presenter::new(600, 600);
        let render = p.visualize().unwrap();
        assert_eq!(render.layout.column_h_split, 60);
        assert!(render.explanation.ends_with("P(H | e) = 0.333\n"));
        assert!(p.current().is_some());
    }

    #[test]
    fn failure_keeps_previous_render() {
        let mut p = Presenter::new(600, 600);
        let first = p.visualize().unwrap().clone();

        p.set_field(ProbabilityField::Prior, "1.5");
        let err = p.visualize().unwrap_err();
        assert_eq!(err.field(), Some(ProbabilityField::Prior));
        assert_eq!(p.current(), Some(&first));

        p.set_field(ProbabilityField::Prior, "0");
        p.set_field(ProbabilityField::FalsePositive, "0");
        assert_eq!(p.visualize().unwrap_err(), BayesError::UndefinedPosterior);
        assert_eq!(p.current(), Some(&first));

        p.set_field(ProbabilityField::Prior, "hello");
        assert!(matches!(p.visualize(), Err(BayesError::InvalidInput { .. })));
        assert_eq!(p.current(), Some(&first));
    }

    #[test]
    fn success_replaces_render() {
        let mut p = Presenter::new(600, 600).with_fields("0.5", "0.5", "0.5");
        p.visualize().unwrap();
        assert_eq!(p.current().unwrap().result.posterior, 0.5);

        p.field_mut(ProbabilityField::Prior).replace_range(.., "0.25");
        p.visualize().unwrap();
        assert_eq!(p.current().unwrap().result.posterior, 0.25);
        assert_eq!(p.current().unwrap().layout.column_h_split, 150);
    }

    #[test]
    fn reset_restores_default_text() {
        let mut p = Presenter::new(600, 600).with_fields("a", "b", "c");
        p.reset_fields();
        assert_eq!(p.field(ProbabilityField::Likelihood), "0.9");
    }
}
