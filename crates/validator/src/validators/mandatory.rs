//! Presence validators for `Option` fields
//!
//! # Validators
//!
//! - [`Mandatory`] - the value is present and not blank
//!
//! # Examples
//!
//! ```rust
//! use catalog_validator::foundation::Predicate;
//! use catalog_validator::validators::mandatory;
//!
//! let check = mandatory::<String>();
//! assert!(check.test(&Some("ref".to_string())));
//! assert!(!check.test(&Some("   ".to_string())));
//! assert!(!check.test(&None));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{IsBlank, Predicate};
use crate::message::MessageTemplate;

/// Default text of a failed [`Mandatory`] check.
pub const MANDATORY_MESSAGE: &str = "'{field}' must not be empty.";

/// Validates that an `Option` is `Some` and its content is not blank.
///
/// Text must be non-empty and not whitespace-only; collections must hold at
/// least one element.
///
/// # Type Parameters
///
/// * `T` - The inner type of the `Option`
pub struct Mandatory<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Mandatory<T> {
    /// Creates the check.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Mandatory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Mandatory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Mandatory<T> {}

impl<T> fmt::Debug for Mandatory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mandatory")
    }
}

impl<T: IsBlank> Predicate for Mandatory<T> {
    type Input = Option<T>;

    fn test(&self, input: &Self::Input) -> bool {
        input.as_ref().is_some_and(|value| !value.is_blank())
    }

    fn code(&self) -> Cow<'static, str> {
        Cow::Borrowed("mandatory")
    }

    fn message(&self) -> MessageTemplate {
        MessageTemplate::new(MANDATORY_MESSAGE)
    }
}

/// Creates a [`Mandatory`] check.
///
/// # Type Parameters
///
/// * `T` - The inner type of the `Option` being validated
#[must_use]
pub const fn mandatory<T>() -> Mandatory<T> {
    Mandatory::new()
}
