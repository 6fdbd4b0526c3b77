//! Failure messages and their resolution
//!
//! Every [`Rule`] carries a [`Message`]: the default text its predicate
//! produced, plus an optional override installed while the rule set was being
//! built. [`resolve`] picks the text that ends up in a
//! [`Failure`](crate::result::Failure).
//!
//! Overrides are set once, at construction time, and are never re-derived
//! during evaluation.

use std::borrow::Cow;
use std::fmt;

use crate::rule::Rule;

/// Placeholder substituted with the field name by [`MessageTemplate::render`].
pub const FIELD_PLACEHOLDER: &str = "{field}";

// ============================================================================
// MESSAGE TEMPLATE
// ============================================================================

/// A message that may mention the field it is reported for.
///
/// # Examples
///
/// ```rust
/// use catalog_validator::message::MessageTemplate;
///
/// let template = MessageTemplate::new("Property {field} is mandatory");
/// assert_eq!(template.render("Gtin"), "Property Gtin is mandatory");
///
/// let fixed = MessageTemplate::new("Too many pictures");
/// assert_eq!(fixed.render("Pictures"), "Too many pictures");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageTemplate(Cow<'static, str>);

impl MessageTemplate {
    /// Creates a template. `{field}` marks where the field name goes.
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self(template.into())
    }

    /// Returns `true` if the template references the field name.
    pub fn is_templated(&self) -> bool {
        self.0.contains(FIELD_PLACEHOLDER)
    }

    /// Substitutes the field name. Untemplated text is returned as-is
    /// without allocating.
    pub fn render(&self, field: &str) -> Cow<'static, str> {
        if self.is_templated() {
            Cow::Owned(self.0.replace(FIELD_PLACEHOLDER, field))
        } else {
            self.0.clone()
        }
    }
}

impl From<&'static str> for MessageTemplate {
    fn from(template: &'static str) -> Self {
        Self::new(template)
    }
}

impl From<String> for MessageTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// MESSAGE
// ============================================================================

/// The failure message attached to a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    default: Cow<'static, str>,
    overridden: Option<Cow<'static, str>>,
}

impl Message {
    /// Creates a message that reports its default text.
    pub fn new(default: impl Into<Cow<'static, str>>) -> Self {
        Self {
            default: default.into(),
            overridden: None,
        }
    }

    /// Replaces the reported text. Only reachable while a rule is still
    /// owned by its builder.
    pub(crate) fn override_with(&mut self, text: impl Into<Cow<'static, str>>) {
        self.overridden = Some(text.into());
    }

    /// The text the predicate supplied.
    pub fn default_text(&self) -> &str {
        &self.default
    }

    /// The override, if one was installed.
    pub fn overridden(&self) -> Option<&str> {
        self.overridden.as_deref()
    }

    /// Returns `true` if an override replaced the default text.
    pub fn is_overridden(&self) -> bool {
        self.overridden.is_some()
    }

    /// The text that is reported on failure.
    pub fn resolved(&self) -> &Cow<'static, str> {
        self.overridden.as_ref().unwrap_or(&self.default)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resolved())
    }
}

/// Returns the text a failed `rule` reports: its override when one was
/// installed, its default message otherwise.
pub fn resolve<T>(rule: &Rule<T>) -> &str {
    rule.message().resolved()
}

// ============================================================================
// TESTS
// ============================================================================
