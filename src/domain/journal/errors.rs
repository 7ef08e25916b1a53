//! Journal-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors surfaced to the presentation layer by journal operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// The chosen option is not one of the decision's outcomes.
    #[error("Chosen option '{chosen}' is not one of the outcomes: [{}]", .allowed.join(", "))]
    OutcomeNotAllowed { chosen: String, allowed: Vec<String> },

    /// A field failed value-object validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl JournalError {
    pub fn outcome_not_allowed(chosen: impl Into<String>, allowed: &[String]) -> Self {
        JournalError::OutcomeNotAllowed {
            chosen: chosen.into(),
            allowed: allowed.to_vec(),
        }
    }

    /// Stable code for logs.
    pub fn code(&self) -> ErrorCode {
        match self {
            JournalError::OutcomeNotAllowed { .. } => ErrorCode::OutcomeNotAllowed,
            JournalError::Validation(err) => ErrorCode::from(err),
        }
    }

    /// User-facing message, suitable for display next to the form.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_not_allowed_lists_every_outcome() {
        let allowed = vec!["Move".to_string(), "Stay".to_string()];
        let err = JournalError::outcome_not_allowed("Relocate", &allowed);

        assert_eq!(
            err.message(),
            "Chosen option 'Relocate' is not one of the outcomes: [Move, Stay]"
        );
        assert_eq!(err.code(), ErrorCode::OutcomeNotAllowed);
    }

    #[test]
    fn validation_variant_is_transparent() {
        let err = JournalError::from(ValidationError::empty_field("title"));
        assert_eq!(err.message(), "Field 'title' cannot be empty");
        assert_eq!(err.code(), ErrorCode::EmptyField);
    }
}
