use thiserror::Error;

use crate::domain::ProbabilityField;

/// Calculator failures. These are user-facing: the TUI shows them in a modal
/// dialog and `bayes calc` prints them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BayesError {
    /// A field is non-numeric, not finite, or outside `[0, 1]`.
    #[error("{field} must be a probability between 0 and 1 (got '{value}')")]
    InvalidInput { field: ProbabilityField, value: String },

    /// P(e ∩ H) + P(e ∩ ¬H) is exactly zero.
    #[error("P(e) is zero, so P(H | e) is undefined: the evidence is impossible under both H and ¬H")]
    UndefinedPosterior,
}

impl BayesError {
    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            BayesError::InvalidInput { .. } => "Invalid input",
            BayesError::UndefinedPosterior => "Undefined posterior",
        }
    }

    pub fn field(&self) -> Option<ProbabilityField> {
        match self {
            BayesError::InvalidInput { field, .. } => Some(*field),
            BayesError::UndefinedPosterior => None,
        }
    }
}

/// Process-level error: a message plus the exit code `bayes` terminates with.
///
/// - `2`: invalid input, undefined posterior, bad configuration
/// - `4`: I/O, terminal, or rendering failures
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<BayesError> for AppError {
    fn from(err: BayesError) -> Self {
        AppError::new(2, format!("{}: {err}", err.title()))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bayes_error_maps_to_exit_code_2() {
        let err: AppError = BayesError::UndefinedPosterior.into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Undefined posterior: "));

        let err: AppError = BayesError::InvalidInput {
            field: ProbabilityField::Prior,
            value: "abc".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "Invalid input: P(H) must be a probability between 0 and 1 (got 'abc')"
        );
    }
}
