//! Validating a catalog feed with catalog-product.
//!
//! Run: `RUST_LOG=debug cargo run -p catalog-product --example validate_product`

use catalog_product::Product;
use catalog_validator::Validatable;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let feed = json!([
        {
            "reference": "TBL-001",
            "language": "fr",
            "gtin": "12345678911",
            "sellerId": "seller1",
            "categoryId": "HOME",
            "pictures": ["front.jpg", "side.jpg"]
        },
        {
            "reference": "TBL-002",
            "language": "France",
            "gtin": "123",
            "sellerId": " ",
            "categoryId": "home",
            "description": "",
            "pictures": ["front.jpg"]
        },
        {}
    ]);

    let products: Vec<Product> = serde_json::from_value(feed)?;

    for product in &products {
        let result = product.validate();
        let reference = product.reference.as_deref().unwrap_or("<none>");

        if result.is_valid() {
            tracing::info!(reference, "product accepted");
        } else {
            tracing::info!(reference, failures = result.failure_count(), "product rejected");
        }

        for failure in &result {
            println!("{reference} {:<12} {:<14} {}", failure.field(), failure.code(), failure.message());
        }
        println!("{}\n", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
