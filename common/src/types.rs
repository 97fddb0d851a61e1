//! Normalized catalog types
//!
//! Display-ready records shared between frontends:
//! - Product: one purchasable poster print with its option groups
//! - PosterCollection: a gallery entry grouping one or more products
//!
//! Raw store records (see `shopify`) are reshaped into these by the
//! `normalize` module. Once built they are immutable for the session.

use serde::{Deserialize, Serialize};

/// A named option group, e.g. Frame: Black/White/None
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variation {
    pub name: String,
    pub options: Vec<String>,
}

/// One purchasable poster print
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: String,
    pub shopify_id: String,
    pub title: String,

    /// Display price, e.g. "$45"
    pub price: String,

    /// Strike-through price when the product is discounted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,

    pub image: String,

    /// Formatted month + year, e.g. "March 2024"
    pub creation_date: String,

    pub location: String,
    pub description: String,
    pub materials: Vec<String>,
    pub hashtags: Vec<String>,
    pub sizes: Vec<String>,
    pub variations: Vec<Variation>,
    pub stock_number: String,
    pub stock_quantity: i64,
    pub in_stock: bool,

    /// Promotional label, e.g. "Best Seller" or "New"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    pub handle: String,
}

/// A gallery entry: one poster design with its purchasable products
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PosterCollection {
    pub id: String,
    pub title: String,
    pub designer: String,
    pub description: String,
    pub main_image: String,
    pub price: String,
    pub technique: String,
    pub dimensions: String,
    pub year: String,
    pub series: String,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
    pub products: Vec<Product>,
    pub handle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_default() {
        let product = Product::default();
        assert_eq!(product.id, "");
        assert_eq!(product.price, "");
        assert!(product.badge.is_none());
        assert!(!product.in_stock);
    }

    #[test]
    fn test_product_serialize_camel_case() {
        let product = Product {
            id: "sp-1".to_string(),
            shopify_id: "1".to_string(),
            title: "Abstract Harmony Print".to_string(),
            price: "$45".to_string(),
            original_price: Some("$65".to_string()),
            creation_date: "March 2024".to_string(),
            stock_number: "AH-001".to_string(),
            stock_quantity: 24,
            in_stock: true,
            ..Default::default()
        };

        let json = serde_json::to_string(&product).expect("serialize failed");
        assert!(json.contains("\"shopifyId\":\"1\""));
        assert!(json.contains("\"originalPrice\":\"$65\""));
        assert!(json.contains("\"creationDate\":\"March 2024\""));
        assert!(json.contains("\"stockNumber\":\"AH-001\""));
        assert!(json.contains("\"inStock\":true"));
    }

    #[test]
    fn test_product_serialize_skips_absent_badge() {
        let product = Product::default();
        let json = serde_json::to_string(&product).expect("serialize failed");
        assert!(!json.contains("badge"));
        assert!(!json.contains("originalPrice"));
    }

    #[test]
    fn test_product_deserialize_missing_fields() {
        let json = r#"{"id": "sp-9", "title": "Minimal"}"#;

        let product: Product = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(product.id, "sp-9");
        assert_eq!(product.title, "Minimal");
        assert_eq!(product.price, "");
        assert_eq!(product.stock_quantity, 0);
        assert!(product.materials.is_empty());
    }

    #[test]
    fn test_collection_roundtrip() {
        let original = PosterCollection {
            id: "col-1".to_string(),
            title: "Abstract Harmony Collection".to_string(),
            designer: "Santiago Camiro".to_string(),
            main_image: "https://example.com/a.jpg".to_string(),
            price: "$45".to_string(),
            technique: "Digital Print on Premium Paper".to_string(),
            dimensions: "18\" x 12\"".to_string(),
            year: "2024".to_string(),
            series: "Abstract Collection".to_string(),
            likes: 189,
            comments: 34,
            tags: vec!["abstract".to_string(), "geometric".to_string()],
            products: vec![Product {
                id: "sp-1".to_string(),
                ..Default::default()
            }],
            handle: "abstract-harmony-collection".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&original).expect("serialize failed");
        let restored: PosterCollection = serde_json::from_str(&json).expect("deserialize failed");

        assert_eq!(original, restored);
    }

    #[test]
    fn test_collection_deserialize_camel_case() {
        let json = r#"{
            "id": "col-2",
            "mainImage": "https://example.com/b.jpg",
            "likes": 156,
            "products": []
        }"#;

        let collection: PosterCollection = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(collection.id, "col-2");
        assert_eq!(collection.main_image, "https://example.com/b.jpg");
        assert_eq!(collection.likes, 156);
        assert!(collection.products.is_empty());
    }
}
