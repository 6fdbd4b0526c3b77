//! Built-in predicates
//!
//! - **Presence**: [`Mandatory`] (present and not blank)
//! - **Custom**: [`Must`] (any `Fn(&U) -> bool` with its own message)
//!
//! # Examples
//!
//! ```rust
//! use catalog_validator::foundation::Predicate;
//! use catalog_validator::validators::{mandatory, must};
//!
//! let present = mandatory::<String>();
//! let two_chars = must(
//!     |v: &Option<String>| v.as_deref().is_some_and(|s| s.chars().count() == 2),
//!     "'{field}' has two characters",
//! );
//!
//! let value = Some("de".to_string());
//! assert!(present.test(&value) && two_chars.test(&value));
//! ```

pub mod mandatory;
pub mod must;

pub use mandatory::{MANDATORY_MESSAGE, Mandatory, mandatory};
pub use must::{MUST_CODE, Must, must};
