//! Products loaded from JSON, the way catalog feeds deliver them.

use catalog_product::{GTIN_FORMAT_MESSAGE, Product, ProductAttribute, mandatory_message};
use catalog_validator::Validatable;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn camel_case_record_deserializes_into_product() {
    let product: Product = serde_json::from_value(json!({
        "reference": "REF-42",
        "language": "fr",
        "gtin": "1111111",
        "sellerId": "seller1",
        "categoryId": "COSM",
        "brandName": "Acme",
        "pictures": ["front.jpg", "back.jpg"],
        "attributes": [
            { "propertyReference": "color", "values": ["red", "blue"] }
        ]
    }))
    .unwrap();

    assert_eq!(product.seller_id.as_deref(), Some("seller1"));
    assert_eq!(product.category_id.as_deref(), Some("COSM"));
    assert_eq!(
        product.attributes,
        Some(vec![ProductAttribute {
            property_reference: Some("color".into()),
            values: Some(vec!["red".into(), "blue".into()]),
        }])
    );
    assert!(product.validate().is_valid());
}

#[test]
fn missing_and_null_properties_are_absent() {
    let product: Product = serde_json::from_value(json!({
        "reference": null,
        "gtin": "ddd"
    }))
    .unwrap();

    assert_eq!(product.reference, None);
    assert_eq!(product.description, None);

    let result = product.validate();
    assert!(result.contains_message(&mandatory_message("Reference")));
    assert!(result.contains_message(GTIN_FORMAT_MESSAGE));
}

#[test]
fn result_serializes_with_field_code_and_message() {
    let product = Product {
        reference: Some("ref".into()),
        gtin: Some("123".into()),
        language: Some("de".into()),
        category_id: Some("DE".into()),
        seller_id: Some("seller1".into()),
        ..Product::default()
    };

    assert_eq!(
        product.validate().to_json_value(),
        json!({
            "is_valid": false,
            "failures": [
                { "field": "Gtin", "code": "gtin", "message": GTIN_FORMAT_MESSAGE }
            ]
        })
    );
}

#[test]
fn product_round_trips_through_json() {
    let product = Product {
        label: Some("Oak table".into()),
        description: Some("Solid oak".into()),
        ..Product::default()
    };

    let text = serde_json::to_string(&product).unwrap();
    assert!(text.contains("\"brandName\":null"));
    assert_eq!(serde_json::from_str::<Product>(&text).unwrap(), product);
}
