//! Store record normalization
//!
//! Reshapes raw Shopify products into display-ready catalog entries:
//! price formatting, material/technique vocabulary matching, option-group
//! splitting, and badge assignment. All vocabularies and defaults live in
//! `NormalizerConfig` so tests can override them.

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;
use crate::shopify::{ShopifyOption, ShopifyProduct};
use crate::types::{PosterCollection, Product, Variation};

lazy_static! {
    /// Matches "18 x 24", "18\" x 24\"", "20×16" inside free text
    static ref DIMENSIONS_RE: Regex = Regex::new(r#"\d+["']?\s*[x×]\s*\d+["']?"#).unwrap();
}

/// Vocabularies and fallback values used while normalizing
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Attributed designer for every collection
    pub designer: String,
    /// Location shown when the store record carries none
    pub default_location: String,
    /// Product description fallback
    pub default_description: String,
    /// Collection description fallback
    pub default_collection_description: String,
    /// Images substituted when a product has none hosted
    pub fallback_images: Vec<String>,
    /// Lowercase material phrases matched against tags + description
    pub material_vocabulary: Vec<String>,
    pub default_materials: Vec<String>,
    /// Lowercase print-technique phrases matched against tags + description
    pub technique_vocabulary: Vec<String>,
    pub default_technique: String,
    pub default_sizes: Vec<String>,
    pub default_variations: Vec<Variation>,
    pub default_dimensions: String,
    /// Products created within this many days get the "New" badge
    pub new_badge_days: i64,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            designer: "Santiago Camiro".to_string(),
            default_location: "New York, NY".to_string(),
            default_description: "Beautiful artwork by Santiago Camiro".to_string(),
            default_collection_description: "A stunning poster design by Santiago Camiro"
                .to_string(),
            fallback_images: vec![
                "https://images.unsplash.com/photo-1687211980289-ba127aa649e8?q=80&w=1080"
                    .to_string(),
                "https://images.unsplash.com/photo-1648144019383-089b37a98e75?q=80&w=1080"
                    .to_string(),
                "https://images.unsplash.com/photo-1613759007428-9d918fe2d36f?q=80&w=1080"
                    .to_string(),
            ],
            material_vocabulary: vec![
                "premium cotton paper",
                "archival inks",
                "uv protective coating",
                "fine art paper",
                "giclée print",
                "museum quality",
                "canvas print",
                "acrylic finish",
                "gallery wrapped",
                "cotton paper",
                "screen print",
                "water-based inks",
                "recycled paper",
                "digital print",
                "matte finish",
                "eco paper",
                "soy-based inks",
                "biodegradable finish",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            default_materials: vec![
                "Premium Cotton Paper".to_string(),
                "Archival Inks".to_string(),
                "UV Protective Coating".to_string(),
            ],
            technique_vocabulary: vec![
                "digital print",
                "screen print",
                "giclée print",
                "lithograph",
                "offset print",
                "archival print",
                "canvas print",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            default_technique: "Digital Print on Premium Paper".to_string(),
            default_sizes: vec![
                "A4 (8×12\")".to_string(),
                "A3 (12×16\")".to_string(),
                "A2 (16×24\")".to_string(),
            ],
            default_variations: vec![
                Variation {
                    name: "Frame".to_string(),
                    options: vec![
                        "Black Frame".to_string(),
                        "White Frame".to_string(),
                        "Natural Wood".to_string(),
                        "No Frame".to_string(),
                    ],
                },
                Variation {
                    name: "Finish".to_string(),
                    options: vec![
                        "Matte".to_string(),
                        "Glossy".to_string(),
                        "Satin".to_string(),
                    ],
                },
            ],
            default_dimensions: "18\" x 12\"".to_string(),
            new_badge_days: 30,
        }
    }
}

impl NormalizerConfig {
    /// Load overrides from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Reshapes raw store products into catalog entries
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Whether a store product belongs in the poster catalog
    pub fn is_poster(&self, product: &ShopifyProduct) -> bool {
        product.product_type.to_lowercase().contains("poster")
            || product.tags.to_lowercase().contains("poster")
            || product.title.to_lowercase().contains("poster")
    }

    /// Build the full catalog from a store response, in store order
    pub fn collections_from_products(
        &self,
        products: &[ShopifyProduct],
        now: DateTime<Utc>,
    ) -> Vec<PosterCollection> {
        products
            .iter()
            .filter(|p| self.is_poster(p))
            .enumerate()
            .map(|(index, p)| self.collection_from_product(p, index, now))
            .collect()
    }

    /// One gallery collection per store product
    pub fn collection_from_product(
        &self,
        product: &ShopifyProduct,
        index: usize,
        now: DateTime<Utc>,
    ) -> PosterCollection {
        let formatted = self.format_product(product, now);
        let fallback = &self.config.fallback_images;

        let main_image = product
            .main_image()
            .map(|img| img.src.clone())
            .unwrap_or_else(|| fallback[index % fallback.len()].clone());

        let description = if product.description.is_empty() {
            self.config.default_collection_description.clone()
        } else {
            product.description.clone()
        };

        PosterCollection {
            id: format!("col-{}", product.id),
            title: product.title.clone(),
            designer: self.config.designer.clone(),
            description,
            main_image,
            price: formatted.price.clone(),
            technique: self.extract_technique(&product.tags, &product.description),
            dimensions: self.extract_dimensions(&product.options, &product.description),
            year: creation_year(&product.created_at),
            series: self.extract_series(&product.tags, &product.title),
            likes: demo_likes(product.id),
            comments: demo_comments(product.id),
            tags: split_tags(&product.tags),
            products: vec![formatted],
            handle: product.handle.clone(),
        }
    }

    /// Normalize one store product into a display product
    pub fn format_product(&self, product: &ShopifyProduct, now: DateTime<Utc>) -> Product {
        let variant = product.main_variant();
        let fallback = &self.config.fallback_images;

        let image = product
            .main_image()
            .map(|img| img.src.clone())
            .unwrap_or_else(|| fallback[(product.id as usize) % fallback.len()].clone());

        let price = variant
            .map(|v| format_price(&v.price))
            .unwrap_or_else(|| "$0".to_string());

        let original_price = variant
            .and_then(|v| v.compare_at_price.as_deref())
            .map(format_price);

        let stock_number = match variant {
            Some(v) if !v.sku.is_empty() => v.sku.clone(),
            _ => {
                let id = product.id.to_string();
                let tail = &id[id.len().saturating_sub(6)..];
                format!("SC-{}", tail)
            }
        };

        let description = if product.description.is_empty() {
            self.config.default_description.clone()
        } else {
            product.description.clone()
        };

        Product {
            id: format!("sp-{}", product.id),
            shopify_id: product.id.to_string(),
            title: product.title.clone(),
            price,
            original_price,
            image,
            creation_date: creation_month_year(&product.created_at),
            location: self.config.default_location.clone(),
            description,
            materials: self.extract_materials(&product.tags, &product.description),
            hashtags: split_tags(&product.tags),
            sizes: self.extract_sizes(&product.options),
            variations: self.extract_variations(&product.options),
            stock_number,
            stock_quantity: variant.map(|v| v.inventory_quantity).unwrap_or(0),
            in_stock: variant.map(|v| v.available).unwrap_or(false),
            badge: self.determine_badge(&product.tags, &product.created_at, now),
            handle: product.handle.clone(),
        }
    }

    /// Match material phrases against tags + description, title-cased
    pub fn extract_materials(&self, tags: &str, description: &str) -> Vec<String> {
        let search_text = format!("{} {}", tags, description).to_lowercase();

        let materials: Vec<String> = self
            .config
            .material_vocabulary
            .iter()
            .filter(|m| search_text.contains(m.as_str()))
            .map(|m| title_case(m))
            .collect();

        if materials.is_empty() {
            self.config.default_materials.clone()
        } else {
            materials
        }
    }

    /// Values of the size-like option group, or the default size run
    pub fn extract_sizes(&self, options: &[ShopifyOption]) -> Vec<String> {
        options
            .iter()
            .find(|o| is_size_option(&o.name))
            .map(|o| o.values.clone())
            .unwrap_or_else(|| self.config.default_sizes.clone())
    }

    /// Every non-size option group becomes a variation
    pub fn extract_variations(&self, options: &[ShopifyOption]) -> Vec<Variation> {
        let variations: Vec<Variation> = options
            .iter()
            .filter(|o| !is_size_option(&o.name))
            .map(|o| Variation {
                name: o.name.clone(),
                options: o.values.clone(),
            })
            .collect();

        if variations.is_empty() {
            self.config.default_variations.clone()
        } else {
            variations
        }
    }

    /// First technique phrase found in tags + description
    pub fn extract_technique(&self, tags: &str, description: &str) -> String {
        let search_text = format!("{} {}", tags, description).to_lowercase();

        for technique in &self.config.technique_vocabulary {
            if search_text.contains(technique.as_str()) {
                return format!("{} on Premium Paper", title_case(technique));
            }
        }

        self.config.default_technique.clone()
    }

    /// Largest size option value, else a dimension pattern in the text
    pub fn extract_dimensions(&self, options: &[ShopifyOption], description: &str) -> String {
        if let Some(option) = options.iter().find(|o| is_size_option(&o.name)) {
            if let Some(largest) = option.values.last() {
                return largest.clone();
            }
        }

        if let Some(found) = DIMENSIONS_RE.find(description) {
            return found.as_str().to_string();
        }

        self.config.default_dimensions.clone()
    }

    /// Series/collection tag, else title heuristics
    pub fn extract_series(&self, tags: &str, title: &str) -> String {
        let series_tag = tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .find(|t| {
                let lower = t.to_lowercase();
                lower.contains("series") || lower.contains("collection")
            });
        if let Some(tag) = series_tag {
            return capitalize(tag);
        }

        if title.contains("Collection") {
            return format!("{} Collection", drop_last_word(title));
        }
        if title.contains("Series") {
            return format!("{} Series", drop_last_word(title));
        }

        "Poster Collection".to_string()
    }

    /// Tag keywords win over recency; recency applies even without tags
    pub fn determine_badge(
        &self,
        tags: &str,
        created_at: &str,
        now: DateTime<Utc>,
    ) -> Option<String> {
        let tag_list: Vec<String> = split_tags(tags);
        let has = |t: &str| tag_list.iter().any(|tag| tag == t);

        if has("bestseller") || has("best seller") {
            return Some("Best Seller".to_string());
        }
        if has("limited") || has("limited edition") {
            return Some("Limited Edition".to_string());
        }
        if has("eco") || has("eco-friendly") {
            return Some("Eco-Friendly".to_string());
        }
        if has("sale") {
            return Some("Sale".to_string());
        }

        if let Ok(created) = DateTime::parse_from_rfc3339(created_at) {
            let age = now.signed_duration_since(created.with_timezone(&Utc));
            if age < Duration::days(self.config.new_badge_days) {
                return Some("New".to_string());
            }
        }

        None
    }
}

/// "45.00" -> "$45"; unparseable input falls back to "$0"
pub fn format_price(raw: &str) -> String {
    let value: f64 = raw.trim().parse().unwrap_or(0.0);
    format!("${}", value.round() as i64)
}

/// Lowercased, trimmed tag list from the comma-separated store field
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_size_option(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("size") || lower.contains("dimension")
}

/// Uppercase the first letter of every word, leaving the rest untouched
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn drop_last_word(title: &str) -> String {
    let words: Vec<&str> = title.split(' ').collect();
    words[..words.len().saturating_sub(1)].join(" ")
}

/// "2024-03-15T10:00:00-04:00" -> "March 2024"; empty on parse failure
fn creation_month_year(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

fn creation_year(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|d| d.format("%Y").to_string())
        .unwrap_or_default()
}

/// Stable stand-in for the store's engagement counts, 50..=349
fn demo_likes(id: u64) -> u32 {
    50 + (id % 300) as u32
}

/// 10..=59
fn demo_comments(id: u64) -> u32 {
    10 + (id % 50) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shopify::{ShopifyImage, ShopifyVariant};
    use chrono::TimeZone;

    fn normalizer() -> Normalizer {
        Normalizer::default()
    }

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn poster(id: u64) -> ShopifyProduct {
        ShopifyProduct {
            id,
            title: "Abstract Harmony Poster".to_string(),
            handle: "abstract-harmony-poster".to_string(),
            description: "Bold geometric shapes, giclée print on fine art paper".to_string(),
            product_type: "Poster".to_string(),
            created_at: "2024-03-15T10:00:00-04:00".to_string(),
            tags: "abstract, poster".to_string(),
            variants: vec![ShopifyVariant {
                id: 1,
                sku: "AH-001".to_string(),
                available: true,
                price: "45.00".to_string(),
                compare_at_price: Some("65.00".to_string()),
                inventory_quantity: 24,
                ..Default::default()
            }],
            images: vec![ShopifyImage {
                id: 1,
                src: "https://cdn.shopify.com/abstract.jpg".to_string(),
                ..Default::default()
            }],
            options: vec![ShopifyOption {
                name: "Size".to_string(),
                position: 1,
                values: vec!["A4 (8×12\")".to_string(), "A2 (16×24\")".to_string()],
            }],
            ..Default::default()
        }
    }

    // =============================================
    // Price formatting
    // =============================================

    #[test]
    fn test_format_price_whole_dollars() {
        assert_eq!(format_price("45.00"), "$45");
        assert_eq!(format_price("38"), "$38");
    }

    #[test]
    fn test_format_price_rounds() {
        assert_eq!(format_price("44.50"), "$45");
        assert_eq!(format_price("44.49"), "$44");
    }

    #[test]
    fn test_format_price_malformed_defaults_to_zero() {
        assert_eq!(format_price("free"), "$0");
        assert_eq!(format_price(""), "$0");
    }

    // =============================================
    // Product formatting
    // =============================================

    #[test]
    fn test_format_product_basic_fields() {
        let product = normalizer().format_product(&poster(8123456789012), reference_now());

        assert_eq!(product.id, "sp-8123456789012");
        assert_eq!(product.shopify_id, "8123456789012");
        assert_eq!(product.price, "$45");
        assert_eq!(product.original_price.as_deref(), Some("$65"));
        assert_eq!(product.image, "https://cdn.shopify.com/abstract.jpg");
        assert_eq!(product.creation_date, "March 2024");
        assert_eq!(product.location, "New York, NY");
        assert_eq!(product.stock_number, "AH-001");
        assert_eq!(product.stock_quantity, 24);
        assert!(product.in_stock);
    }

    #[test]
    fn test_format_product_without_variant() {
        // Malformed record: no variants at all
        let mut raw = poster(789012);
        raw.variants.clear();

        let product = normalizer().format_product(&raw, reference_now());
        assert_eq!(product.price, "$0");
        assert!(product.original_price.is_none());
        assert_eq!(product.stock_number, "SC-789012");
        assert_eq!(product.stock_quantity, 0);
        assert!(!product.in_stock);
    }

    #[test]
    fn test_format_product_stock_number_from_id_tail() {
        let mut raw = poster(8123456789012);
        raw.variants[0].sku = String::new();

        let product = normalizer().format_product(&raw, reference_now());
        assert_eq!(product.stock_number, "SC-789012");
    }

    #[test]
    fn test_format_product_fallback_image() {
        let mut raw = poster(4);
        raw.images.clear();

        let n = normalizer();
        let product = n.format_product(&raw, reference_now());
        // id 4 % 3 fallback images -> second entry
        assert_eq!(product.image, n.config().fallback_images[1]);
    }

    #[test]
    fn test_format_product_default_description() {
        let mut raw = poster(1);
        raw.description = String::new();

        let product = normalizer().format_product(&raw, reference_now());
        assert_eq!(product.description, "Beautiful artwork by Santiago Camiro");
    }

    // =============================================
    // Materials / technique / sizes / variations
    // =============================================

    #[test]
    fn test_extract_materials_from_description() {
        let materials =
            normalizer().extract_materials("", "giclée print on fine art paper, museum quality");
        assert_eq!(
            materials,
            vec!["Fine Art Paper", "Giclée Print", "Museum Quality"]
        );
    }

    #[test]
    fn test_extract_materials_default_when_no_match() {
        let materials = normalizer().extract_materials("abstract", "bold shapes");
        assert_eq!(
            materials,
            vec!["Premium Cotton Paper", "Archival Inks", "UV Protective Coating"]
        );
    }

    #[test]
    fn test_extract_technique_match_and_suffix() {
        let technique = normalizer().extract_technique("", "a vivid screen print edition");
        assert_eq!(technique, "Screen Print on Premium Paper");
    }

    #[test]
    fn test_extract_technique_default() {
        let technique = normalizer().extract_technique("urban", "street energy");
        assert_eq!(technique, "Digital Print on Premium Paper");
    }

    #[test]
    fn test_extract_sizes_from_option() {
        let options = vec![ShopifyOption {
            name: "Print Size".to_string(),
            position: 1,
            values: vec!["A4".to_string(), "A3".to_string()],
        }];
        assert_eq!(normalizer().extract_sizes(&options), vec!["A4", "A3"]);
    }

    #[test]
    fn test_extract_sizes_default() {
        let sizes = normalizer().extract_sizes(&[]);
        assert_eq!(sizes.len(), 3);
        assert_eq!(sizes[0], "A4 (8×12\")");
    }

    #[test]
    fn test_extract_variations_excludes_size_group() {
        let options = vec![
            ShopifyOption {
                name: "Size".to_string(),
                position: 1,
                values: vec!["A4".to_string()],
            },
            ShopifyOption {
                name: "Frame".to_string(),
                position: 2,
                values: vec!["Black".to_string(), "None".to_string()],
            },
        ];

        let variations = normalizer().extract_variations(&options);
        assert_eq!(variations.len(), 1);
        assert_eq!(variations[0].name, "Frame");
    }

    #[test]
    fn test_extract_variations_default() {
        let variations = normalizer().extract_variations(&[]);
        assert_eq!(variations.len(), 2);
        assert_eq!(variations[0].name, "Frame");
        assert_eq!(variations[1].name, "Finish");
    }

    // =============================================
    // Dimensions / series
    // =============================================

    #[test]
    fn test_extract_dimensions_largest_size_value() {
        let dimensions =
            normalizer().extract_dimensions(&poster(1).options, "irrelevant description");
        assert_eq!(dimensions, "A2 (16×24\")");
    }

    #[test]
    fn test_extract_dimensions_from_description_pattern() {
        let dimensions = normalizer().extract_dimensions(&[], "printed at 18\" x 24\" on stock");
        assert_eq!(dimensions, "18\" x 24\"");
    }

    #[test]
    fn test_extract_dimensions_default() {
        let dimensions = normalizer().extract_dimensions(&[], "no measurements here");
        assert_eq!(dimensions, "18\" x 12\"");
    }

    #[test]
    fn test_extract_series_from_tag() {
        let series = normalizer().extract_series("abstract, geometric series", "City Pulse");
        assert_eq!(series, "Geometric series");
    }

    #[test]
    fn test_extract_series_from_title() {
        let series = normalizer().extract_series("", "Abstract Harmony Collection");
        assert_eq!(series, "Abstract Harmony Collection");
    }

    #[test]
    fn test_extract_series_default() {
        assert_eq!(normalizer().extract_series("", "City Pulse"), "Poster Collection");
    }

    // =============================================
    // Badges
    // =============================================

    #[test]
    fn test_badge_keyword_best_seller() {
        let badge = normalizer().determine_badge(
            "abstract, bestseller",
            "2020-01-01T00:00:00Z",
            reference_now(),
        );
        assert_eq!(badge.as_deref(), Some("Best Seller"));
    }

    #[test]
    fn test_badge_keyword_beats_recency() {
        // Created yesterday AND tagged limited: the tag wins
        let badge = normalizer().determine_badge(
            "limited",
            "2024-05-31T00:00:00Z",
            reference_now(),
        );
        assert_eq!(badge.as_deref(), Some("Limited Edition"));
    }

    #[test]
    fn test_badge_recent_product_is_new() {
        let badge =
            normalizer().determine_badge("abstract", "2024-05-20T00:00:00Z", reference_now());
        assert_eq!(badge.as_deref(), Some("New"));
    }

    #[test]
    fn test_badge_recency_applies_without_tags() {
        let badge = normalizer().determine_badge("", "2024-05-20T00:00:00Z", reference_now());
        assert_eq!(badge.as_deref(), Some("New"));
    }

    #[test]
    fn test_badge_old_untagged_product_has_none() {
        let badge = normalizer().determine_badge("abstract", "2023-01-01T00:00:00Z", reference_now());
        assert!(badge.is_none());
    }

    #[test]
    fn test_badge_eco_and_sale_keywords() {
        let n = normalizer();
        let old = "2020-01-01T00:00:00Z";
        assert_eq!(
            n.determine_badge("eco-friendly", old, reference_now()).as_deref(),
            Some("Eco-Friendly")
        );
        assert_eq!(
            n.determine_badge("sale", old, reference_now()).as_deref(),
            Some("Sale")
        );
    }

    // =============================================
    // Collections
    // =============================================

    #[test]
    fn test_is_poster_by_type_tag_or_title() {
        let n = normalizer();
        let mut by_type = poster(1);
        by_type.tags = String::new();
        by_type.title = "Abstract Harmony".to_string();
        assert!(n.is_poster(&by_type));

        let mut by_tag = poster(2);
        by_tag.product_type = "Print".to_string();
        by_tag.title = "Abstract Harmony".to_string();
        assert!(n.is_poster(&by_tag));

        let mut neither = poster(3);
        neither.product_type = "Mug".to_string();
        neither.tags = "kitchen".to_string();
        neither.title = "Coffee Mug".to_string();
        assert!(!n.is_poster(&neither));
    }

    #[test]
    fn test_collections_filter_and_order() {
        let mut mug = poster(2);
        mug.product_type = "Mug".to_string();
        mug.tags = "kitchen".to_string();
        mug.title = "Coffee Mug".to_string();

        let products = vec![poster(1), mug, poster(3)];
        let collections = normalizer().collections_from_products(&products, reference_now());

        assert_eq!(collections.len(), 2);
        assert_eq!(collections[0].id, "col-1");
        assert_eq!(collections[1].id, "col-3");
    }

    #[test]
    fn test_collection_fields() {
        let collection = normalizer().collection_from_product(&poster(42), 0, reference_now());

        assert_eq!(collection.id, "col-42");
        assert_eq!(collection.designer, "Santiago Camiro");
        assert_eq!(collection.year, "2024");
        assert_eq!(collection.technique, "Giclée Print on Premium Paper");
        assert_eq!(collection.dimensions, "A2 (16×24\")");
        assert_eq!(collection.tags, vec!["abstract", "poster"]);
        assert_eq!(collection.products.len(), 1);
        assert_eq!(collection.products[0].id, "sp-42");
        // engagement counts are deterministic per id
        assert_eq!(collection.likes, 50 + 42 % 300);
        assert_eq!(collection.comments, 10 + 42 % 50);
    }

    #[test]
    fn test_collection_counts_stay_in_demo_ranges() {
        let n = normalizer();
        for id in [0u64, 1, 299, 300, 12345, u64::MAX] {
            let mut raw = poster(7);
            raw.id = id;
            let c = n.collection_from_product(&raw, 0, reference_now());
            assert!((50..=349).contains(&c.likes));
            assert!((10..=59).contains(&c.comments));
        }
    }
}
