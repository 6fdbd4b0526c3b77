//! # catalog-validator
//!
//! A declarative validation engine that evaluates every rule declared for an
//! entity and reports every violation, rather than stopping at the first one.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_validator::prelude::*;
//!
//! #[derive(Default)]
//! struct Product {
//!     gtin: Option<String>,
//!     language: Option<String>,
//! }
//!
//! let rules = RuleSet::builder("product")
//!     .rules_for("Gtin", |p: &Product| &p.gtin, |f| f.mandatory())
//!     .rules_for("Language", |p: &Product| &p.language, |f| {
//!         f.mandatory().must(
//!             |l: &Option<String>| l.as_deref().is_some_and(|l| l.len() == 2),
//!             "Language has two letters",
//!         )
//!     })
//!     .build()
//!     .unwrap();
//!
//! let result = rules.validate(&Product::default());
//! assert!(!result.is_valid());
//! assert_eq!(result.failure_count(), 3);
//! ```
//!
//! ## Building blocks
//!
//! - [`Predicate`](foundation::Predicate): one yes/no check over a field value
//! - [`Rule`](rule::Rule): a predicate bound to a named field, with its message
//! - [`message::resolve`]: default message or construction-time override
//! - [`RuleSet`](rule_set::RuleSet): the ordered rules of one entity type
//! - [`ValidationResult`](result::ValidationResult): every failure, in order
//! - [`Validatable`](validatable::Validatable): `entity.validate()` delegation
//!
//! ## Built-in predicates
//!
//! - [`Mandatory`](validators::Mandatory): present and not blank
//! - [`Must`](validators::Must): any `Fn(&U) -> bool`

pub mod error;
pub mod foundation;
pub mod message;
pub mod prelude;
pub mod result;
pub mod rule;
pub mod rule_set;
pub mod validatable;
pub mod validators;

pub use error::{BuildError, ValidationFailed};
pub use result::{Failure, ValidationResult};
pub use rule::Rule;
pub use rule_set::{FieldRules, RuleSet, RuleSetBuilder};
pub use validatable::Validatable;
