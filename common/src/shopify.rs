//! Raw Shopify store records
//!
//! The REST Admin API returns products with numeric ids, string prices,
//! and a number of nullable fields. Every field here defaults, so a
//! partial or malformed record still deserializes and gets patched up by
//! the normalizer instead of failing the whole catalog.

use serde::{Deserialize, Serialize};

/// Envelope of `GET /products.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsResponse {
    pub products: Vec<ShopifyProduct>,
}

/// One store product as returned by the REST API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopifyProduct {
    pub id: u64,
    pub title: String,
    pub handle: String,
    pub description: String,
    pub product_type: String,
    pub created_at: String,
    pub updated_at: String,
    pub vendor: String,
    /// Comma-separated tag string
    pub tags: String,
    pub variants: Vec<ShopifyVariant>,
    pub images: Vec<ShopifyImage>,
    pub options: Vec<ShopifyOption>,
}

/// Price/availability variant of a product
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopifyVariant {
    pub id: u64,
    pub title: String,
    pub sku: String,
    pub available: bool,
    /// Decimal string, e.g. "45.00"
    pub price: String,
    pub compare_at_price: Option<String>,
    pub position: i32,
    pub inventory_quantity: i64,
}

/// Hosted product image
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopifyImage {
    pub id: u64,
    pub position: i32,
    pub src: String,
    pub alt: Option<String>,
    pub width: u32,
    pub height: u32,
}

/// Named option group, e.g. Size or Frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopifyOption {
    pub name: String,
    pub position: i32,
    pub values: Vec<String>,
}

impl ShopifyProduct {
    /// First variant drives display price and stock
    pub fn main_variant(&self) -> Option<&ShopifyVariant> {
        self.variants.first()
    }

    /// First hosted image, if the product has any
    pub fn main_image(&self) -> Option<&ShopifyImage> {
        self.images.first()
    }
}
