//! The catalog product record

use catalog_validator::{RuleSet, Validatable};
use serde::{Deserialize, Serialize};

use crate::rules::ProductValidator;

/// A product offered by a seller.
///
/// Every field is optional at the type level; which ones must be present is
/// decided by [`ProductValidator`], not by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// ISO 639-1 language of the textual fields.
    pub language: Option<String>,

    /// Seller-side product reference.
    pub reference: Option<String>,

    /// Display label.
    pub label: Option<String>,

    /// Global Trade Item Number.
    pub gtin: Option<String>,

    /// Seller reference.
    pub seller_id: Option<String>,

    /// Long description.
    pub description: Option<String>,

    /// Picture file names.
    pub pictures: Option<Vec<String>>,

    /// Category reference.
    pub category_id: Option<String>,

    /// Brand name.
    pub brand_name: Option<String>,

    /// Free-form product attributes.
    pub attributes: Option<Vec<ProductAttribute>>,
}

/// One attribute of a product: a property and its values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductAttribute {
    /// Reference of the property the values belong to.
    pub property_reference: Option<String>,

    /// The attribute values.
    pub values: Option<Vec<String>>,
}

impl Validatable for Product {
    fn rule_set() -> &'static RuleSet<Self> {
        ProductValidator::shared().rule_set()
    }
}
