//! # catalog-product
//!
//! The catalog [`Product`] record and the rules it is validated against.
//!
//! ```rust
//! use catalog_product::{Product, GTIN_FORMAT_MESSAGE};
//! use catalog_validator::Validatable;
//!
//! let product = Product {
//!     reference: Some("ref".into()),
//!     gtin: Some("123".into()),
//!     language: Some("de".into()),
//!     category_id: Some("DE".into()),
//!     seller_id: Some("seller1".into()),
//!     ..Product::default()
//! };
//!
//! let result = product.validate();
//! assert!(!result.is_valid());
//! assert_eq!(result.messages().collect::<Vec<_>>(), vec![GTIN_FORMAT_MESSAGE]);
//! ```

pub mod product;
pub mod rules;

pub use product::{Product, ProductAttribute};
pub use rules::{
    CATEGORY_ID_MESSAGE, DESCRIPTION_MESSAGE, GTIN_FORMAT_MESSAGE, LANGUAGE_ISO_639_MESSAGE,
    MANDATORY_PROPERTY_MESSAGE, PICTURES_MESSAGE, ProductValidator, mandatory_message,
};
