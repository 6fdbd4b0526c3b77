//! Prelude module for convenient imports.
//!
//! `use catalog_validator::prelude::*;` brings in everything needed to
//! declare a rule set and inspect what it reports.

pub use crate::error::{BuildError, ValidationFailed};
pub use crate::foundation::{IsBlank, Predicate};
pub use crate::message::MessageTemplate;
pub use crate::result::{Failure, ValidationResult};
pub use crate::rule::Rule;
pub use crate::rule_set::{FieldRules, RuleSet, RuleSetBuilder};
pub use crate::validatable::Validatable;
pub use crate::validators::{Mandatory, Must, mandatory, must};
