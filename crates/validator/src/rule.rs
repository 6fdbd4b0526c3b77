//! A predicate bound to one field of an entity
//!
//! A [`Rule`] pairs a field accessor with a [`Predicate`] over the field's
//! value and the message reported when the predicate rejects it. Rules are
//! type-erased over the field type so that a
//! [`RuleSet`](crate::rule_set::RuleSet) can hold checks on fields of
//! different types in one ordered list.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::Predicate;
use crate::message::Message;

type Check<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Validates one field of `T` with one predicate.
///
/// # Examples
///
/// ```rust
/// use catalog_validator::rule::Rule;
/// use catalog_validator::validators::mandatory;
///
/// struct Seller {
///     id: Option<String>,
/// }
///
/// let rule = Rule::new("SellerId", |s: &Seller| &s.id, mandatory::<String>());
///
/// assert!(rule.evaluate(&Seller { id: Some("seller1".into()) }));
/// assert!(!rule.evaluate(&Seller { id: None }));
/// assert_eq!(rule.failure_message(), "'SellerId' must not be empty.");
/// ```
pub struct Rule<T> {
    field: Cow<'static, str>,
    code: Cow<'static, str>,
    message: Message,
    check: Check<T>,
}

impl<T: 'static> Rule<T> {
    /// Binds `predicate` to the field that `accessor` reads.
    ///
    /// The predicate's default message is rendered for `field` once, here.
    pub fn new<U, F, P>(field: impl Into<Cow<'static, str>>, accessor: F, predicate: P) -> Self
    where
        U: ?Sized + 'static,
        F: Fn(&T) -> &U + Send + Sync + 'static,
        P: Predicate<Input = U> + Send + Sync + 'static,
    {
        let field = field.into();
        let message = Message::new(predicate.message().render(&field));
        let code = predicate.code();

        Self {
            field,
            code,
            message,
            check: Box::new(move |entity: &T| predicate.test(accessor(entity))),
        }
    }
}

impl<T> Rule<T> {
    /// Replaces the failure message of this rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.message.override_with(text);
        self
    }

    pub(crate) fn override_message(&mut self, text: impl Into<Cow<'static, str>>) {
        self.message.override_with(text);
    }

    /// Returns `true` if `entity` satisfies the rule.
    #[inline]
    pub fn evaluate(&self, entity: &T) -> bool {
        (self.check)(entity)
    }

    /// The text reported when the rule fails.
    pub fn failure_message(&self) -> &str {
        crate::message::resolve(self)
    }

    /// Name of the validated field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Code of the underlying predicate.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The message with its default and override.
    pub fn message(&self) -> &Message {
        &self.message
    }

    pub(crate) fn field_cow(&self) -> &Cow<'static, str> {
        &self.field
    }

    pub(crate) fn code_cow(&self) -> &Cow<'static, str> {
        &self.code
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("code", &self.code)
            .field("message", &self.message)
            .field("check", &"<function>")
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{mandatory, must};

    #[derive(Default)]
    struct Listing {
        title: Option<String>,
        tags: Option<Vec<String>>,
    }

    #[test]
    fn test_rule_reads_its_field() {
        let rule = Rule::new("Title", |l: &Listing| &l.title, mandatory::<String>());

        assert!(!rule.evaluate(&Listing::default()));
        assert!(rule.evaluate(&Listing {
            title: Some("Lamp".into()),
            ..Listing::default()
        }));
    }

    #[test]
    fn test_rule_absent_value_is_plain_input() {
        let rule = Rule::new(
            "Tags",
            |l: &Listing| &l.tags,
            must(
                |tags: &Option<Vec<String>>| tags.as_ref().is_none_or(|t| t.len() <= 2),
                "at most two tags",
            ),
        );

        assert!(rule.evaluate(&Listing::default()));
        assert!(!rule.evaluate(&Listing {
            tags: Some(vec!["a".into(), "b".into(), "c".into()]),
            ..Listing::default()
        }));
    }

    #[test]
    fn test_rule_renders_default_message_for_field() {
        let rule = Rule::new("Title", |l: &Listing| &l.title, mandatory::<String>());
        assert_eq!(rule.field(), "Title");
        assert_eq!(rule.code(), "mandatory");
        assert_eq!(rule.failure_message(), "'Title' must not be empty.");
        assert!(!rule.message().is_overridden());
    }

    #[test]
    fn test_rule_with_message_overrides_default() {
        let rule = Rule::new("Title", |l: &Listing| &l.title, mandatory::<String>())
            .with_message("Property Title is mandatory");

        assert_eq!(rule.failure_message(), "Property Title is mandatory");
        assert_eq!(rule.message().default_text(), "'Title' must not be empty.");
    }

    #[test]
    fn test_debug_hides_closure() {
        let rule = Rule::new("Title", |l: &Listing| &l.title, mandatory::<String>());
        let debug = format!("{rule:?}");
        assert!(debug.contains("Title"));
        assert!(debug.contains("<function>"));
    }
}
