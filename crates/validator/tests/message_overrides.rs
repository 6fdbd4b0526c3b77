//! Integration tests for message resolution through the public builder API.

use catalog_validator::message::{self, MessageTemplate};
use catalog_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Default)]
struct Account {
    login: Option<String>,
    email: Option<String>,
}

fn login(a: &Account) -> &Option<String> {
    &a.login
}

fn email(a: &Account) -> &Option<String> {
    &a.email
}

fn has_at_sign(email: &Option<String>) -> bool {
    email.as_deref().is_some_and(|e| e.contains('@'))
}

// ============================================================================
// DEFAULTS
// ============================================================================

#[test]
fn default_messages_name_their_field() {
    let rules: RuleSet<Account> = RuleSet::builder("account")
        .rules_for("Login", |a: &Account| &a.login, |f| f.mandatory())
        .rules_for("Email", |a: &Account| &a.email, |f| {
            f.must(has_at_sign, "'{field}' contains an @")
        })
        .build()
        .unwrap();

    let result = rules.validate(&Account::default());
    assert_eq!(
        result.messages().collect::<Vec<_>>(),
        vec!["'Login' must not be empty.", "'Email' contains an @"]
    );
}

// ============================================================================
// OVERRIDES
// ============================================================================

#[rstest]
#[case::single("Login", "Property Login is mandatory")]
#[case::other_field("Email", "Property Email is mandatory")]
fn global_message_replaces_canned_text(#[case] field: &'static str, #[case] expected: &str) {
    let template = MessageTemplate::new("Property {field} is mandatory");
    let accessor: fn(&Account) -> &Option<String> = match field {
        "Login" => login,
        _ => email,
    };

    let rules: RuleSet<Account> = RuleSet::builder("account")
        .rules_for(field, accessor, |f| {
            f.mandatory().with_global_message(template.render(field))
        })
        .build()
        .unwrap();

    let rule = &rules.rules()[0];
    assert_eq!(message::resolve(rule), expected);
    assert_eq!(rule.message().default_text(), format!("'{field}' must not be empty."));

    let result = rules.validate(&Account::default());
    assert_eq!(result.failures(), &[Failure::new(field, "mandatory", expected.to_string())]);
}

#[test]
fn override_is_fixed_at_build_time() {
    let rules: RuleSet<Account> = RuleSet::builder("account")
        .rules_for("Email", |a: &Account| &a.email, |f| {
            f.must(has_at_sign, "default").with_message("Email needs an @")
        })
        .build()
        .unwrap();

    let first = rules.validate(&Account::default());
    let second = rules.validate(&Account {
        email: Some("nope".into()),
        ..Account::default()
    });

    assert_eq!(first, second);
    assert_eq!(first.messages().collect::<Vec<_>>(), vec!["Email needs an @"]);
}

#[test]
fn rule_level_with_message_survives_in_rule_set() {
    let rule = Rule::new(
        "Login",
        |a: &Account| &a.login,
        mandatory::<String>(),
    )
    .with_message("Login is required");

    let rules = RuleSet::builder("account").rule(rule).build().unwrap();
    let result = rules.validate(&Account::default());

    assert!(result.contains_message("Login is required"));
    assert_eq!(result.failures()[0].code(), "mandatory");
}
