//! Validation rules for [`Product`]
//!
//! | Field | Rule |
//! |---|---|
//! | Reference, Language, Gtin, SellerId, CategoryId | mandatory |
//! | Language | ISO 639-1: two lowercase characters |
//! | Gtin | 7, 11, 12 or 13 characters, numeric |
//! | Description | if provided, not blank |
//! | Pictures | if provided, between 2 and 5 |
//! | CategoryId | 2, 4 or 6 uppercase characters |
//!
//! Rules are evaluated in that order and every failing one is reported.

use std::sync::LazyLock;

use catalog_validator::foundation::IsBlank;
use catalog_validator::message::MessageTemplate;
use catalog_validator::validators::must;
use catalog_validator::{BuildError, RuleSet, ValidationResult};

use crate::product::Product;

/// Mandatory-property message; `{field}` is replaced by the property name.
pub const MANDATORY_PROPERTY_MESSAGE: &str =
    "Property {field} is mandatory (a mandatory property is neither null nor empty nor blank)";

/// Reported when the language is not a two-letter lowercase code.
pub const LANGUAGE_ISO_639_MESSAGE: &str = "The Language is [ISO 639-1](https://en.wikipedia.org/wiki/List_of_ISO_639-1_codes) compliant (2 chars string, lower case)";

/// Reported when the GTIN has the wrong length or is not numeric.
pub const GTIN_FORMAT_MESSAGE: &str = "The Gtin allows GTIN-8, GTIN-12, GTIN-13 and GTIN-14 formats";

/// Reported when a provided description is empty or blank.
pub const DESCRIPTION_MESSAGE: &str = "If provided, the Description is neither empty nor blank";

/// Reported when a provided picture list has fewer than 2 or more than 5 entries.
pub const PICTURES_MESSAGE: &str = "If provided, there must be between 2 and 5 pictures";

/// Reported when the category is not 2, 4 or 6 uppercase characters.
pub const CATEGORY_ID_MESSAGE: &str = "The CategoryId is a sequence of 2, 4 or 6 uppercase letters";

/// Accepted GTIN lengths, in characters.
///
/// One less than the GTIN-8/12/13/14 digit counts the message names; kept
/// as-is because existing catalogs were validated against it.
pub const GTIN_LENGTHS: [usize; 4] = [7, 11, 12, 13];

/// Accepted category code lengths, in characters.
pub const CATEGORY_ID_LENGTHS: [usize; 3] = [2, 4, 6];

/// Inclusive bounds on the number of pictures.
pub const PICTURE_COUNT: std::ops::RangeInclusive<usize> = 2..=5;

/// Renders the mandatory-property message for `field`.
///
/// ```rust
/// assert_eq!(
///     catalog_product::mandatory_message("Gtin"),
///     "Property Gtin is mandatory (a mandatory property is neither null nor empty nor blank)",
/// );
/// ```
pub fn mandatory_message(field: &str) -> String {
    MessageTemplate::new(MANDATORY_PROPERTY_MESSAGE)
        .render(field)
        .into_owned()
}

static SHARED: LazyLock<ProductValidator> = LazyLock::new(|| {
    ProductValidator::new().expect("product rule table declares every field with at least one rule")
});

/// The rule set of [`Product`].
#[derive(Debug)]
pub struct ProductValidator {
    rules: RuleSet<Product>,
}

impl ProductValidator {
    /// Builds the product rule table.
    pub fn new() -> Result<Self, BuildError> {
        let rules = RuleSet::builder("product")
            .rules_for("Reference", |p: &Product| &p.reference, |f| {
                f.mandatory().with_global_message(mandatory_message("Reference"))
            })
            .rules_for("Language", |p: &Product| &p.language, |f| {
                f.mandatory().with_global_message(mandatory_message("Language"))
            })
            .rules_for("Gtin", |p: &Product| &p.gtin, |f| {
                f.mandatory().with_global_message(mandatory_message("Gtin"))
            })
            .rules_for("SellerId", |p: &Product| &p.seller_id, |f| {
                f.mandatory().with_global_message(mandatory_message("SellerId"))
            })
            .rules_for("CategoryId", |p: &Product| &p.category_id, |f| {
                f.mandatory().with_global_message(mandatory_message("CategoryId"))
            })
            .rules_for("Language", |p: &Product| &p.language, |f| {
                f.rule(must(is_iso_639_1, LANGUAGE_ISO_639_MESSAGE).with_code("iso_639_1"))
            })
            .rules_for("Gtin", |p: &Product| &p.gtin, |f| {
                f.rule(must(is_gtin, GTIN_FORMAT_MESSAGE).with_code("gtin"))
            })
            .rules_for("Description", |p: &Product| &p.description, |f| {
                f.rule(must(is_absent_or_filled, DESCRIPTION_MESSAGE).with_code("description"))
            })
            .rules_for("Pictures", |p: &Product| &p.pictures, |f| {
                f.rule(must(has_picture_count, PICTURES_MESSAGE).with_code("picture_count"))
            })
            .rules_for("CategoryId", |p: &Product| &p.category_id, |f| {
                f.rule(must(is_category_code, CATEGORY_ID_MESSAGE).with_code("category_code"))
            })
            .build()?;

        Ok(Self { rules })
    }

    /// The process-wide instance used by [`Product::validate`](catalog_validator::Validatable::validate).
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Evaluates every product rule against `product`.
    pub fn validate(&self, product: &Product) -> ValidationResult {
        self.rules.validate(product)
    }

    /// The underlying rule set.
    pub fn rule_set(&self) -> &RuleSet<Product> {
        &self.rules
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Two characters, all lowercase in the Unicode `Lowercase` sense.
fn is_iso_639_1(language: &Option<String>) -> bool {
    language.as_deref().is_some_and(|l| {
        !l.is_blank() && char_len(l) == 2 && l.chars().all(char::is_lowercase)
    })
}

/// 7, 11, 12 or 13 characters that parse as a number.
fn is_gtin(gtin: &Option<String>) -> bool {
    gtin.as_deref().is_some_and(|g| {
        !g.is_blank() && GTIN_LENGTHS.contains(&char_len(g)) && is_numeric(g.trim())
    })
}

/// Decimal notation only; `f64` parsing alone would also take `inf` and `NaN`.
fn is_numeric(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && text.parse::<f64>().is_ok()
}

fn is_absent_or_filled(description: &Option<String>) -> bool {
    description.as_deref().is_none_or(|d| !d.is_blank())
}

fn has_picture_count(pictures: &Option<Vec<String>>) -> bool {
    pictures
        .as_ref()
        .is_none_or(|p| PICTURE_COUNT.contains(&p.len()))
}

/// 2, 4 or 6 characters, all uppercase in the Unicode `Uppercase` sense.
fn is_category_code(category: &Option<String>) -> bool {
    category.as_deref().is_some_and(|c| {
        !c.is_blank()
            && CATEGORY_ID_LENGTHS.contains(&char_len(c))
            && c.chars().all(char::is_uppercase)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[rstest]
    #[case("de", true)]
    #[case("fr", true)]
    #[case("d", false)]
    #[case("US", false)]
    #[case("Fr", false)]
    #[case("France", false)]
    #[case("", false)]
    #[case("  ", false)]
    #[case("d1", false)]
    #[case("ñe", true)]
    #[case("ⅰⅱ", true)]
    fn test_iso_639_1(#[case] language: &str, #[case] valid: bool) {
        assert_eq!(is_iso_639_1(&some(language)), valid);
    }

    #[rstest]
    #[case("1111111", true)]
    #[case("12345678911", true)]
    #[case("123456789111", true)]
    #[case("1234567891111", true)]
    #[case("111111", false)]
    #[case("11111111", false)]
    #[case("ddd", false)]
    #[case("dddddd1", false)]
    #[case("123456789", false)]
    #[case("1234567891", false)]
    #[case("123456789123456", false)]
    #[case("       ", false)]
    #[case("    inf", false)]
    #[case("NaN    ", false)]
    #[case("   +inf", false)]
    #[case("   Infinity", false)]
    #[case("  1.5e3", true)]
    #[case("-123456", true)]
    #[case("1,23456", false)]
    fn test_gtin(#[case] gtin: &str, #[case] valid: bool) {
        assert_eq!(is_gtin(&some(gtin)), valid);
    }

    #[rstest]
    #[case("DE", true)]
    #[case("COSM", true)]
    #[case("RETAIL", true)]
    #[case("d", false)]
    #[case("de", false)]
    #[case("De", false)]
    #[case("DDD", false)]
    #[case("dede", false)]
    #[case("DEde", false)]
    #[case("ddddd", false)]
    #[case("retail", false)]
    #[case("D1", false)]
    #[case("ÉT", true)]
    #[case("ⒶⒷ", true)]
    fn test_category_code(#[case] category: &str, #[case] valid: bool) {
        assert_eq!(is_category_code(&some(category)), valid);
    }

    #[test]
    fn test_absent_values() {
        assert!(!is_iso_639_1(&None));
        assert!(!is_gtin(&None));
        assert!(!is_category_code(&None));
        assert!(is_absent_or_filled(&None));
        assert!(has_picture_count(&None));
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(5, true)]
    #[case(6, false)]
    fn test_picture_count(#[case] count: usize, #[case] valid: bool) {
        let pictures = (0..count).map(|i| format!("{i}.jpg")).collect();
        assert_eq!(has_picture_count(&Some(pictures)), valid);
    }

    #[test]
    fn test_rule_table_builds_in_declaration_order() {
        let validator = ProductValidator::new().unwrap();
        let fields: Vec<_> = validator
            .rule_set()
            .rules()
            .iter()
            .map(|rule| rule.field())
            .collect();

        assert_eq!(
            fields,
            vec![
                "Reference",
                "Language",
                "Gtin",
                "SellerId",
                "CategoryId",
                "Language",
                "Gtin",
                "Description",
                "Pictures",
                "CategoryId",
            ]
        );
    }

    #[test]
    fn test_format_rules_carry_their_own_codes() {
        let validator = ProductValidator::shared();
        let codes: Vec<_> = validator
            .rule_set()
            .rules()
            .iter()
            .skip(5)
            .map(|rule| rule.code())
            .collect();

        assert_eq!(
            codes,
            vec!["iso_639_1", "gtin", "description", "picture_count", "category_code"]
        );
    }

    #[test]
    fn test_mandatory_rules_carry_overridden_message() {
        let validator = ProductValidator::shared();
        for rule in validator.rule_set().rules().iter().take(5) {
            assert_eq!(rule.code(), "mandatory");
            assert!(rule.message().is_overridden());
            assert_eq!(rule.failure_message(), mandatory_message(rule.field()));
        }
    }
}
