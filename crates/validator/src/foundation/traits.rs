//! Core traits for the validation system
//!
//! This module defines the value-level [`Predicate`] trait that every check
//! bound to a field implements, and the [`IsBlank`] helper used by the
//! canned presence checks.

use std::borrow::Cow;

use crate::message::MessageTemplate;

// ============================================================================
// PREDICATE TRAIT
// ============================================================================

/// A single check over one field value.
///
/// Predicates never fail with an error: an absent value (`None`) is an
/// ordinary input and each predicate decides whether it passes. The outcome
/// is a plain `bool`; turning a `false` into a report entry is the job of
/// the [`Rule`](crate::rule::Rule) that owns the predicate.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use catalog_validator::foundation::Predicate;
/// use catalog_validator::message::MessageTemplate;
///
/// struct Even;
///
/// impl Predicate for Even {
///     type Input = Option<u32>;
///
///     fn test(&self, input: &Self::Input) -> bool {
///         input.is_some_and(|n| n % 2 == 0)
///     }
///
///     fn code(&self) -> Cow<'static, str> {
///         Cow::Borrowed("even")
///     }
///
///     fn message(&self) -> MessageTemplate {
///         MessageTemplate::new("'{field}' must be even")
///     }
/// }
///
/// assert!(Even.test(&Some(4)));
/// assert!(!Even.test(&None));
/// ```
pub trait Predicate {
    /// The field type the predicate inspects.
    ///
    /// `?Sized` so that accessors may hand out `&str` or `&[T]` views.
    type Input: ?Sized;

    /// Returns `true` when the value satisfies the check.
    fn test(&self, input: &Self::Input) -> bool;

    /// Stable identifier of the check, e.g. `"mandatory"`.
    fn code(&self) -> Cow<'static, str>;

    /// Default failure message. May reference the field via `{field}`.
    fn message(&self) -> MessageTemplate;
}

// ============================================================================
// BLANKNESS
// ============================================================================

/// Values that can be "blank": empty, or carrying nothing but whitespace.
///
/// Text is blank when it is empty or consists only of Unicode whitespace.
/// Collections are blank when they hold no elements.
pub trait IsBlank {
    /// Returns `true` if the value is empty or whitespace-only.
    fn is_blank(&self) -> bool;
}

impl IsBlank for str {
    #[inline]
    fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }
}

impl IsBlank for String {
    #[inline]
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl IsBlank for Cow<'_, str> {
    #[inline]
    fn is_blank(&self) -> bool {
        self.as_ref().is_blank()
    }
}

impl<T> IsBlank for [T] {
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsBlank for Vec<T> {
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsBlank + ?Sized> IsBlank for &T {
    #[inline]
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

// ============================================================================
// TESTS
// ============================================================================
