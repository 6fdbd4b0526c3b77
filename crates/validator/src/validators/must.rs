//! Custom predicate validators
//!
//! [`Must`] wraps an arbitrary `Fn(&U) -> bool` together with the message it
//! reports. The function sees the raw field, so for `Option` fields it must
//! decide itself whether `None` passes.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::Predicate;
use crate::message::MessageTemplate;

/// Default code of a [`Must`] check.
pub const MUST_CODE: &str = "must";

/// Validates a field with a caller-supplied function.
///
/// # Examples
///
/// ```rust
/// use catalog_validator::foundation::Predicate;
/// use catalog_validator::validators::must;
///
/// let check = must(
///     |v: &Option<String>| v.as_deref().is_none_or(|s| s.len() < 5),
///     "If provided, '{field}' is shorter than 5 characters",
/// );
/// assert!(check.test(&None));
/// assert!(!check.test(&Some("longer".to_string())));
/// ```
pub struct Must<U: ?Sized, F> {
    predicate: F,
    code: Cow<'static, str>,
    message: MessageTemplate,
    _phantom: PhantomData<fn(&U)>,
}

impl<U: ?Sized, F> Must<U, F>
where
    F: Fn(&U) -> bool,
{
    /// Creates a custom check reporting `message` on failure.
    pub fn new(predicate: F, message: impl Into<MessageTemplate>) -> Self {
        Self {
            predicate,
            code: Cow::Borrowed(MUST_CODE),
            message: message.into(),
            _phantom: PhantomData,
        }
    }

    /// Replaces the check's code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }
}

impl<U: ?Sized, F: Clone> Clone for Must<U, F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            code: self.code.clone(),
            message: self.message.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<U: ?Sized, F> fmt::Debug for Must<U, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Must")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<U: ?Sized, F> Predicate for Must<U, F>
where
    F: Fn(&U) -> bool,
{
    type Input = U;

    fn test(&self, input: &Self::Input) -> bool {
        (self.predicate)(input)
    }

    fn code(&self) -> Cow<'static, str> {
        self.code.clone()
    }

    fn message(&self) -> MessageTemplate {
        self.message.clone()
    }
}

/// Creates a [`Must`] check.
pub fn must<U: ?Sized, F>(predicate: F, message: impl Into<MessageTemplate>) -> Must<U, F>
where
    F: Fn(&U) -> bool,
{
    Must::new(predicate, message)
}
