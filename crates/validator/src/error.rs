//! Error types
//!
//! Invalid entities are never errors: they produce a
//! [`ValidationResult`] with failures. The types here cover the two places an
//! `Err` does appear: a rule set that was declared wrongly, and a caller that
//! asks to turn a failed result into a `Result` for `?` propagation.

use std::borrow::Cow;

use crate::result::ValidationResult;

/// A rule set could not be built from its declaration.
///
/// These are programmer errors in the rule table, surfaced once at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// The builder finished without a single rule.
    #[error("rule set '{name}' declares no rules")]
    EmptyRuleSet {
        /// Name of the rule set.
        name: Cow<'static, str>,
    },

    /// A field chain was declared but attached no rule.
    #[error("field '{field}' declares no rules")]
    EmptyField {
        /// Name of the field.
        field: Cow<'static, str>,
    },

    /// A message override came before any rule of its field chain.
    #[error("message override on field '{field}' has no rule to apply to")]
    OrphanMessage {
        /// Name of the field.
        field: Cow<'static, str>,
    },
}

/// Returned by [`ValidationResult::into_result`] when the entity is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed with {} failure(s)", .result.failure_count())]
pub struct ValidationFailed {
    result: ValidationResult,
}

impl ValidationFailed {
    pub(crate) fn new(result: ValidationResult) -> Self {
        Self { result }
    }

    /// The failed result.
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Consumes the error and returns the failed result.
    pub fn into_inner(self) -> ValidationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Failure;

    #[test]
    fn test_build_error_display() {
        let error = BuildError::OrphanMessage {
            field: Cow::Borrowed("Gtin"),
        };
        assert_eq!(
            error.to_string(),
            "message override on field 'Gtin' has no rule to apply to"
        );

        let error = BuildError::EmptyRuleSet {
            name: Cow::Borrowed("product"),
        };
        assert!(error.to_string().contains("'product'"));
    }

    #[test]
    fn test_validation_failed_display() {
        let result: ValidationResult = [
            Failure::new("Gtin", "mandatory", "Gtin is mandatory"),
            Failure::new("Language", "must", "Language is ISO 639-1"),
        ]
        .into_iter()
        .collect();

        let error = ValidationFailed::new(result.clone());
        assert_eq!(error.to_string(), "validation failed with 2 failure(s)");
        assert_eq!(error.into_inner(), result);
    }
}
