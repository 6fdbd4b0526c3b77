//! Aggregated outcome of one validation pass
//!
//! A [`ValidationResult`] is the ordered list of every [`Failure`] a rule set
//! produced for one entity. Validity is not stored next to the list: it is
//! computed from it, so the two can never disagree.

use std::borrow::Cow;
use std::fmt;

use crate::error::ValidationFailed;
use crate::rule::Rule;

// ============================================================================
// FAILURE
// ============================================================================

/// One failed rule.
///
/// # Examples
///
/// ```rust
/// use catalog_validator::result::Failure;
///
/// let failure = Failure::new("Gtin", "mandatory", "Property Gtin is mandatory");
/// assert_eq!(failure.to_string(), "[Gtin] Property Gtin is mandatory");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Failure {
    /// Name of the field the failed rule is bound to.
    field: Cow<'static, str>,

    /// Code of the failed predicate, e.g. `"mandatory"`.
    code: Cow<'static, str>,

    /// Resolved, human-readable message.
    message: Cow<'static, str>,
}

impl Failure {
    /// Creates a failure entry.
    pub fn new(
        field: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Builds the entry a failed `rule` reports.
    pub fn from_rule<T>(rule: &Rule<T>) -> Self {
        Self {
            field: rule.field_cow().clone(),
            code: rule.code_cow().clone(),
            message: rule.message().resolved().clone(),
        }
    }

    /// Name of the failed field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Code of the failed predicate.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The resolved message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Every failure one validation pass produced, in rule declaration order.
///
/// # Examples
///
/// ```rust
/// use catalog_validator::result::{Failure, ValidationResult};
///
/// let passed = ValidationResult::valid();
/// assert!(passed.is_valid());
///
/// let failed: ValidationResult =
///     std::iter::once(Failure::new("Gtin", "mandatory", "Gtin is mandatory")).collect();
/// assert!(!failed.is_valid());
/// assert!(failed.contains_message("Gtin is mandatory"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    failures: Vec<Failure>,
}

impl ValidationResult {
    /// A result with no failures.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Wraps an already ordered list of failures.
    #[must_use]
    pub fn from_failures(failures: Vec<Failure>) -> Self {
        Self { failures }
    }

    /// `true` if and only if no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failures, in the order the rules were declared.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Number of failed rules.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Messages of all failures, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(Failure::message)
    }

    /// Failures reported for `field`.
    pub fn failures_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Failure> + 'a {
        self.failures.iter().filter(move |f| f.field() == field)
    }

    /// Returns `true` if some failure reports exactly `message`.
    #[must_use]
    pub fn contains_message(&self, message: &str) -> bool {
        self.messages().any(|m| m == message)
    }

    /// Converts to a `Result` so invalid entities can be propagated with `?`.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationFailed> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationFailed::new(self))
        }
    }

    /// Converts the result to a JSON value, e.g. for an API error payload.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        json!({
            "is_valid": self.is_valid(),
            "failures": self
                .failures
                .iter()
                .map(|f| json!({ "field": f.field, "code": f.code, "message": f.message }))
                .collect::<Vec<_>>(),
        })
    }
}

impl FromIterator<Failure> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = Failure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("Validation passed");
        }

        writeln!(f, "Validation failed with {} error(s):", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("failures", &self.failures)?;
        state.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
