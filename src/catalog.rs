//! Static product catalog served by the storefront.
//!
//! The catalog is built once on first access and never changes afterwards.
//! Prices are kept as [`Decimal`] and rendered as plain JSON numbers.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "name": "Professional Laryngoscope Kit",
    "price": 549.99,
    "category": "Diagnostic Tools",
    "in_stock": true
}))]
pub struct Product {
    /// Stable product identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Unit price in dollars.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    /// Product category.
    pub category: String,
    /// Whether the product can be ordered.
    pub in_stock: bool,
}

impl Product {
    fn new(id: u32, name: &str, price: Decimal, category: &str, in_stock: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
            in_stock,
        }
    }
}

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(1, "Professional Laryngoscope Kit", dec!(549.99), "Diagnostic Tools", true),
        Product::new(2, "Articulation Cards Set", dec!(89.99), "Therapy Materials", true),
        Product::new(3, "Voice Amplifier System", dec!(299.99), "Audio Equipment", true),
        Product::new(4, "Oral Motor Therapy Kit", dec!(129.99), "Therapy Tools", true),
        Product::new(5, "Fluency Master Device", dec!(799.99), "Advanced Equipment", true),
        Product::new(6, "Therapy Mirror Stand", dec!(149.99), "Clinical Furniture", true),
    ]
});

/// The full catalog in display order.
pub fn products() -> &'static [Product] {
    &CATALOG
}
