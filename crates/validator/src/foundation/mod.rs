//! Core validation traits
//!
//! - **Traits**: [`Predicate`], [`IsBlank`]
//!
//! A predicate answers one yes/no question about one field value. Everything
//! above it in the crate ([`Rule`](crate::rule::Rule),
//! [`RuleSet`](crate::rule_set::RuleSet)) only wires predicates to fields and
//! collects their verdicts.

pub mod traits;

pub use traits::{IsBlank, Predicate};
