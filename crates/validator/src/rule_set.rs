//! Ordered rule collections and their builder
//!
//! A [`RuleSet`] is "a validator" for one entity type: the ordered list of
//! every [`Rule`] that applies to it. [`RuleSet::validate`] evaluates all of
//! them, without stopping at the first failure, and aggregates the failures
//! into a [`ValidationResult`].
//!
//! Rule sets are declared through [`RuleSetBuilder`]. Each call to
//! [`RuleSetBuilder::rules_for`] opens a chain of independent checks on one
//! field; a field may be opened more than once, and rules are evaluated in
//! exactly the order they were declared.
//!
//! ```rust
//! use catalog_validator::prelude::*;
//!
//! #[derive(Default)]
//! struct Offer {
//!     sku: Option<String>,
//!     currency: Option<String>,
//! }
//!
//! let rules = RuleSet::builder("offer")
//!     .rules_for("Sku", |o: &Offer| &o.sku, |f| {
//!         f.mandatory().with_global_message("Property Sku is mandatory")
//!     })
//!     .rules_for("Currency", |o: &Offer| &o.currency, |f| {
//!         f.must(
//!             |c: &Option<String>| c.as_deref().is_some_and(|c| c.len() == 3),
//!             "Currency is a 3-letter code",
//!         )
//!     })
//!     .build()
//!     .unwrap();
//!
//! let result = rules.validate(&Offer::default());
//! assert_eq!(
//!     result.messages().collect::<Vec<_>>(),
//!     vec!["Property Sku is mandatory", "Currency is a 3-letter code"],
//! );
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::BuildError;
use crate::foundation::{IsBlank, Predicate};
use crate::message::MessageTemplate;
use crate::result::{Failure, ValidationResult};
use crate::rule::Rule;
use crate::validators::{mandatory, must};

// ============================================================================
// RULE SET
// ============================================================================

/// The ordered rules of one entity type.
///
/// Immutable once built; `Send + Sync`, so one instance can be shared by every
/// caller for the lifetime of the process.
pub struct RuleSet<T> {
    name: Cow<'static, str>,
    rules: Vec<Rule<T>>,
}

impl<T: 'static> RuleSet<T> {
    /// Starts declaring a rule set.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> RuleSetBuilder<T> {
        RuleSetBuilder::new(name)
    }
}

impl<T> RuleSet<T> {
    /// Evaluates every rule against `entity`.
    ///
    /// Each failing rule contributes one [`Failure`], in declaration order.
    /// Evaluation never short-circuits and never mutates anything.
    pub fn validate(&self, entity: &T) -> ValidationResult {
        let result: ValidationResult = self
            .rules
            .iter()
            .filter(|rule| !rule.evaluate(entity))
            .map(Failure::from_rule)
            .collect();

        tracing::debug!(
            rule_set = %self.name,
            rules = self.rules.len(),
            failures = result.failure_count(),
            "rule set evaluated"
        );

        result
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All rules, in evaluation order.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Rules bound to `field`, in evaluation order.
    pub fn rules_for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Rule<T>> + 'a {
        self.rules.iter().filter(move |rule| rule.field() == field)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false` for a built rule set.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Declares the rules of a [`RuleSet`].
///
/// Declaration problems are remembered and reported by [`build`](Self::build);
/// the first one wins.
pub struct RuleSetBuilder<T> {
    name: Cow<'static, str>,
    rules: Vec<Rule<T>>,
    error: Option<BuildError>,
}

impl<T: 'static> RuleSetBuilder<T> {
    /// Creates an empty builder.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            error: None,
        }
    }

    /// Declares a chain of rules on the field `accessor` reads.
    ///
    /// `configure` receives an empty [`FieldRules`] and returns it with its
    /// rules attached.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules_for<U, F, C>(
        mut self,
        field: impl Into<Cow<'static, str>>,
        accessor: F,
        configure: C,
    ) -> Self
    where
        U: ?Sized + 'static,
        F: Fn(&T) -> &U + Send + Sync + 'static,
        C: FnOnce(FieldRules<T, U>) -> FieldRules<T, U>,
    {
        let chain = configure(FieldRules::new(field.into(), accessor));

        if self.error.is_none() {
            self.error = chain.error();
        }
        self.rules.extend(chain.rules);
        self
    }

    /// Appends a single, already constructed rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Finishes the declaration.
    pub fn build(self) -> Result<RuleSet<T>, BuildError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.rules.is_empty() {
            return Err(BuildError::EmptyRuleSet { name: self.name });
        }

        tracing::trace!(rule_set = %self.name, rules = self.rules.len(), "rule set built");

        Ok(RuleSet {
            name: self.name,
            rules: self.rules,
        })
    }
}

impl<T> fmt::Debug for RuleSetBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSetBuilder")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .field("error", &self.error)
            .finish()
    }
}

// ============================================================================
// FIELD CHAIN
// ============================================================================

/// The chain of rules declared on one field.
///
/// Every rule in the chain is independent: a value can fail several of them
/// and each failure is reported.
pub struct FieldRules<T, U: ?Sized> {
    field: Cow<'static, str>,
    accessor: Arc<dyn Fn(&T) -> &U + Send + Sync>,
    rules: Vec<Rule<T>>,
    orphan_message: bool,
}

impl<T: 'static, U: ?Sized + 'static> FieldRules<T, U> {
    fn new<F>(field: Cow<'static, str>, accessor: F) -> Self
    where
        F: Fn(&T) -> &U + Send + Sync + 'static,
    {
        Self {
            field,
            accessor: Arc::new(accessor),
            rules: Vec::new(),
            orphan_message: false,
        }
    }

    /// Appends a rule using `predicate`.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<Input = U> + Send + Sync + 'static,
    {
        let accessor = Arc::clone(&self.accessor);
        self.rules.push(Rule::new(
            self.field.clone(),
            move |entity: &T| accessor(entity),
            predicate,
        ));
        self
    }

    /// Appends a custom predicate rule reporting `message`.
    #[must_use = "builder methods must be chained or built"]
    pub fn must<F>(self, predicate: F, message: impl Into<MessageTemplate>) -> Self
    where
        F: Fn(&U) -> bool + Send + Sync + 'static,
    {
        self.rule(must(predicate, message))
    }

    /// Replaces the message of the most recently added rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        match self.rules.last_mut() {
            Some(rule) => rule.override_message(text),
            None => self.orphan_message = true,
        }
        self
    }

    /// Replaces the message of every rule added to this chain so far.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_global_message(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        if self.rules.is_empty() {
            self.orphan_message = true;
            return self;
        }

        let text = text.into();
        for rule in &mut self.rules {
            rule.override_message(text.clone());
        }
        self
    }

    fn error(&self) -> Option<BuildError> {
        if self.orphan_message {
            Some(BuildError::OrphanMessage {
                field: self.field.clone(),
            })
        } else if self.rules.is_empty() {
            Some(BuildError::EmptyField {
                field: self.field.clone(),
            })
        } else {
            None
        }
    }
}

impl<T: 'static, V: IsBlank + 'static> FieldRules<T, Option<V>> {
    /// Appends a [`Mandatory`](crate::validators::Mandatory) rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn mandatory(self) -> Self {
        self.rule(mandatory::<V>())
    }
}

impl<T, U: ?Sized> fmt::Debug for FieldRules<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("field", &self.field)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
