//! Entities that know how to validate themselves
//!
//! [`Validatable`] is the capability an entity type implements to expose
//! `validate()`. The entity does not own any validation logic: it names the
//! shared [`RuleSet`] for its type and delegates to it.

use crate::result::ValidationResult;
use crate::rule_set::RuleSet;

/// An entity type with an associated rule set.
///
/// # Examples
///
/// ```rust
/// use std::sync::LazyLock;
///
/// use catalog_validator::prelude::*;
///
/// struct Seller {
///     id: Option<String>,
/// }
///
/// static SELLER_RULES: LazyLock<RuleSet<Seller>> = LazyLock::new(|| {
///     RuleSet::builder("seller")
///         .rules_for("Id", |s: &Seller| &s.id, |f| f.mandatory())
///         .build()
///         .expect("seller rules are well-formed")
/// });
///
/// impl Validatable for Seller {
///     fn rule_set() -> &'static RuleSet<Self> {
///         &SELLER_RULES
///     }
/// }
///
/// assert!(Seller { id: Some("s-1".into()) }.validate().is_valid());
/// assert!(!Seller { id: None }.validate().is_valid());
/// ```
pub trait Validatable: Sized + 'static {
    /// The rule set shared by every instance of the type.
    fn rule_set() -> &'static RuleSet<Self>;

    /// Evaluates the type's rule set against `self`.
    fn validate(&self) -> ValidationResult {
        Self::rule_set().validate(self)
    }
}
