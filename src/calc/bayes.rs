use crate::domain::{BayesInput, BayesResult, ProbabilityField};
use crate::error::BayesError;

impl BayesInput {
    /// Validate three probabilities. Each must be finite and within `[0, 1]`.
    pub fn new(prior: f64, likelihood_given_h: f64, likelihood_given_not_h: f64) -> Result<Self, BayesError> {
        check_probability(ProbabilityField::Prior, prior)?;
        check_probability(ProbabilityField::Likelihood, likelihood_given_h)?;
        check_probability(ProbabilityField::FalsePositive, likelihood_given_not_h)?;
        // `-0.0` passes the range check; store it as `+0.0` so nothing prints as negative.
        Ok(Self {
            prior: prior + 0.0,
            likelihood_given_h: likelihood_given_h + 0.0,
            likelihood_given_not_h: likelihood_given_not_h + 0.0,
        })
    }
}

fn check_probability(field: ProbabilityField, value: f64) -> Result<(), BayesError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BayesError::InvalidInput {
            field,
            value: value.to_string(),
        })
    }
}

/// Apply Bayes' theorem.
///
/// Fails with `InvalidInput` for out-of-range or non-finite arguments and with
/// `UndefinedPosterior` when `P(e ∩ H) + P(e ∩ ¬H)` is exactly zero.
pub fn compute(prior: f64, likelihood_h: f64, likelihood_not_h: f64) -> Result<BayesResult, BayesError> {
    let input = BayesInput::new(prior, likelihood_h, likelihood_not_h)?;
    compute_input(input)
}

/// Same as [`compute`] for an already validated input.
pub fn compute_input(input: BayesInput) -> Result<BayesResult, BayesError> {
    let not_prior = 1.0 - input.prior;
    let joint_h = input.prior * input.likelihood_given_h;
    let joint_not_h = not_prior * input.likelihood_given_not_h;
    let evidence = joint_h + joint_not_h;

    if evidence == 0.0 {
        return Err(BayesError::UndefinedPosterior);
    }

    Ok(BayesResult {
        input,
        not_prior,
        joint_h,
        joint_not_h,
        evidence,
        posterior: joint_h / evidence,
    })
}

/// Parse the three text fields of the UI into a validated input.
///
/// Surrounding whitespace is ignored. Anything `f64::from_str` rejects, and
/// anything outside `[0, 1]` (including `NaN`/`inf`), is `InvalidInput` for
/// the first offending field.
pub fn parse_input(prior: &str, likelihood_h: &str, likelihood_not_h: &str) -> Result<BayesInput, BayesError> {
    let prior = parse_field(ProbabilityField::Prior, prior)?;
    let likelihood_h = parse_field(ProbabilityField::Likelihood, likelihood_h)?;
    let likelihood_not_h = parse_field(ProbabilityField::FalsePositive, likelihood_not_h)?;
    BayesInput::new(prior, likelihood_h, likelihood_not_h)
}

fn parse_field(field: ProbabilityField, text: &str) -> Result<f64, BayesError> {
    let trimmed = text.trim();
    let value = trimmed.parse::<f64>().map_err(|_| BayesError::InvalidInput {
        field,
        value: trimmed.to_string(),
    })?;
    check_probability(field, value)?;
    Ok(value)
}
