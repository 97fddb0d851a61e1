//! Built-in catalog
//!
//! The fixed set of collections shown when the store API is unreachable.
//! Substituted whole on transport failure, never merged with live data.

use crate::types::{PosterCollection, Product, Variation};

const IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1687211980289-ba127aa649e8?q=80&w=1080",
    "https://images.unsplash.com/photo-1648144019383-089b37a98e75?q=80&w=1080",
    "https://images.unsplash.com/photo-1613759007428-9d918fe2d36f?q=80&w=1080",
    "https://images.unsplash.com/photo-1704039562258-b444d01e47a0?q=80&w=1080",
    "https://images.unsplash.com/photo-1540312790810-8d1eeb1caa7b?q=80&w=1080",
    "https://images.unsplash.com/photo-1717601716921-c3c2d4574a60?q=80&w=1080",
];

fn variation(name: &str, options: &[&str]) -> Variation {
    Variation {
        name: name.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The full fallback catalog, in display order
pub fn fallback_collections() -> Vec<PosterCollection> {
    vec![
        PosterCollection {
            id: "mock-1".to_string(),
            title: "Abstract Harmony Collection".to_string(),
            designer: "Santiago Camiro".to_string(),
            description: "A vibrant exploration of color and form, this collection embodies \
                          the essence of contemporary abstract design."
                .to_string(),
            main_image: IMAGES[0].to_string(),
            price: "$45".to_string(),
            technique: "Digital Print on Premium Paper".to_string(),
            dimensions: "18\" x 12\"".to_string(),
            year: "2024".to_string(),
            series: "Abstract Collection".to_string(),
            likes: 189,
            comments: 34,
            tags: strings(&["abstract", "geometric", "contemporary"]),
            handle: "abstract-harmony-collection".to_string(),
            products: vec![
                Product {
                    id: "mock-p1-1".to_string(),
                    shopify_id: "mock-sp-1".to_string(),
                    title: "Abstract Harmony Print".to_string(),
                    price: "$45".to_string(),
                    original_price: Some("$65".to_string()),
                    image: IMAGES[0].to_string(),
                    creation_date: "March 2024".to_string(),
                    location: "New York, NY".to_string(),
                    description: "A stunning abstract composition featuring bold geometric \
                                  patterns that intersect with organic shapes to create \
                                  visual rhythm and movement."
                        .to_string(),
                    materials: strings(&[
                        "Premium Cotton Paper",
                        "Archival Inks",
                        "UV Protective Coating",
                    ]),
                    hashtags: strings(&["abstract", "geometric", "modern", "artwork"]),
                    sizes: strings(&["A4 (8×12\")", "A3 (12×16\")", "A2 (16×24\")"]),
                    variations: vec![
                        variation(
                            "Frame",
                            &["Black Frame", "White Frame", "Natural Wood", "No Frame"],
                        ),
                        variation("Finish", &["Matte", "Glossy", "Satin"]),
                    ],
                    stock_number: "AH-001".to_string(),
                    stock_quantity: 24,
                    in_stock: true,
                    badge: Some("Best Seller".to_string()),
                    handle: "abstract-harmony-print".to_string(),
                },
                Product {
                    id: "mock-p1-2".to_string(),
                    shopify_id: "mock-sp-1-2".to_string(),
                    title: "Geometric Rhythms".to_string(),
                    price: "$38".to_string(),
                    original_price: None,
                    image: IMAGES[1].to_string(),
                    creation_date: "February 2024".to_string(),
                    location: "Brooklyn, NY".to_string(),
                    description: "Exploring the intersection of geometry and organic forms \
                                  through vibrant color palettes and dynamic compositions."
                        .to_string(),
                    materials: strings(&["Fine Art Paper", "Giclée Print", "Museum Quality"]),
                    hashtags: strings(&["geometric", "vibrant", "rhythm", "design"]),
                    sizes: strings(&["A4 (8×12\")", "A3 (12×16\")", "A1 (24×32\")"]),
                    variations: vec![
                        variation("Frame", &["Black Frame", "White Frame", "No Frame"]),
                        variation("Edition", &["Standard", "Artist Signed"]),
                    ],
                    stock_number: "GR-002".to_string(),
                    stock_quantity: 18,
                    in_stock: true,
                    badge: Some("New".to_string()),
                    handle: "geometric-rhythms".to_string(),
                },
            ],
        },
        PosterCollection {
            id: "mock-2".to_string(),
            title: "Geometric Rhythms Series".to_string(),
            designer: "Santiago Camiro".to_string(),
            description: "Dynamic patterns that pulse with the energy of geometric precision \
                          and artistic expression."
                .to_string(),
            main_image: IMAGES[1].to_string(),
            price: "$38".to_string(),
            technique: "Screen Print on Cotton Paper".to_string(),
            dimensions: "24\" x 16\"".to_string(),
            year: "2024".to_string(),
            series: "Geometric Series".to_string(),
            likes: 156,
            comments: 28,
            tags: strings(&["geometric", "modern", "rhythmic"]),
            handle: "geometric-rhythms-series".to_string(),
            products: vec![
                Product {
                    id: "mock-p2-1".to_string(),
                    shopify_id: "mock-sp-2".to_string(),
                    title: "City Pulse".to_string(),
                    price: "$38".to_string(),
                    original_price: None,
                    image: IMAGES[1].to_string(),
                    creation_date: "June 2024".to_string(),
                    location: "Manhattan, NY".to_string(),
                    description: "Capturing the rhythmic pulse of urban life through dynamic \
                                  visual patterns and energetic compositions."
                        .to_string(),
                    materials: strings(&["Cotton Paper", "Screen Print", "Water-based Inks"]),
                    hashtags: strings(&["urban", "pulse", "energy", "dynamic"]),
                    sizes: strings(&["A4 (8×12\")", "A3 (12×16\")"]),
                    variations: vec![
                        variation("Color Scheme", &["Original", "Black & White", "Sepia"]),
                        variation("Frame", &["Black Frame", "Silver Frame", "No Frame"]),
                    ],
                    stock_number: "CP-004".to_string(),
                    stock_quantity: 31,
                    in_stock: true,
                    badge: None,
                    handle: "city-pulse".to_string(),
                },
                Product {
                    id: "mock-p2-2".to_string(),
                    shopify_id: "mock-sp-2-2".to_string(),
                    title: "Metropolitan Grid".to_string(),
                    price: "$44".to_string(),
                    original_price: None,
                    image: IMAGES[2].to_string(),
                    creation_date: "July 2024".to_string(),
                    location: "Brooklyn, NY".to_string(),
                    description: "An architectural interpretation of city grids and urban \
                                  planning through modern artistic expression."
                        .to_string(),
                    materials: strings(&["Recycled Paper", "Digital Print", "Matte Finish"]),
                    hashtags: strings(&["metropolitan", "grid", "architecture", "planning"]),
                    sizes: strings(&["A3 (12×16\")", "A2 (16×24\")"]),
                    variations: vec![
                        variation(
                            "Paper",
                            &["Recycled White", "Recycled Cream", "Standard White"],
                        ),
                        variation("Frame", &["Bamboo Frame", "Metal Frame", "No Frame"]),
                    ],
                    stock_number: "MG-005".to_string(),
                    stock_quantity: 22,
                    in_stock: true,
                    badge: None,
                    handle: "metropolitan-grid".to_string(),
                },
            ],
        },
        PosterCollection {
            id: "mock-3".to_string(),
            title: "Minimalist Essence Collection".to_string(),
            designer: "Santiago Camiro".to_string(),
            description: "Clean lines and thoughtful composition create a sense of calm and \
                          sophistication."
                .to_string(),
            main_image: IMAGES[2].to_string(),
            price: "$42".to_string(),
            technique: "Eco-Friendly Soy Ink Print".to_string(),
            dimensions: "20\" x 13.3\"".to_string(),
            year: "2024".to_string(),
            series: "Minimalist Collection".to_string(),
            likes: 234,
            comments: 45,
            tags: strings(&["minimalist", "clean", "modern"]),
            handle: "minimalist-essence-collection".to_string(),
            products: vec![Product {
                id: "mock-p3-1".to_string(),
                shopify_id: "mock-sp-3".to_string(),
                title: "Vibrant Flow".to_string(),
                price: "$42".to_string(),
                original_price: None,
                image: IMAGES[2].to_string(),
                creation_date: "March 2024".to_string(),
                location: "Chelsea, NY".to_string(),
                description: "A celebration of color in motion, where vibrant hues flow and \
                              dance across the canvas in perfect harmony."
                    .to_string(),
                materials: strings(&["Eco Paper", "Soy-based Inks", "Biodegradable Finish"]),
                hashtags: strings(&["vibrant", "flow", "color", "harmony"]),
                sizes: strings(&["A4 (8×12\")", "A3 (12×16\")", "A2 (16×24\")"]),
                variations: vec![
                    variation(
                        "Eco-Level",
                        &["Standard Eco", "Premium Eco", "Carbon Neutral"],
                    ),
                    variation("Frame", &["Sustainable Wood", "Recycled Metal", "No Frame"]),
                ],
                stock_number: "VF-006".to_string(),
                stock_quantity: 15,
                in_stock: true,
                badge: Some("Eco-Friendly".to_string()),
                handle: "vibrant-flow".to_string(),
            }],
        },
        PosterCollection {
            id: "mock-4".to_string(),
            title: "Color Explosion Series".to_string(),
            designer: "Santiago Camiro".to_string(),
            description: "Vibrant bursts of color that capture the energy and dynamism of \
                          contemporary expression."
                .to_string(),
            main_image: IMAGES[3].to_string(),
            price: "$55".to_string(),
            technique: "High Resolution Digital Print".to_string(),
            dimensions: "20\" x 16\"".to_string(),
            year: "2024".to_string(),
            series: "Color Series".to_string(),
            likes: 298,
            comments: 67,
            tags: strings(&["colorful", "vibrant", "energetic"]),
            handle: "color-explosion-series".to_string(),
            products: vec![Product {
                id: "mock-p4-1".to_string(),
                shopify_id: "mock-sp-4".to_string(),
                title: "Chromatic Burst".to_string(),
                price: "$55".to_string(),
                original_price: None,
                image: IMAGES[3].to_string(),
                creation_date: "April 2024".to_string(),
                location: "SoHo, NY".to_string(),
                description: "An explosive celebration of color that energizes any space with \
                              its dynamic composition and vivid palette."
                    .to_string(),
                materials: strings(&[
                    "Premium Photo Paper",
                    "Fade-Resistant Inks",
                    "Protective Laminate",
                ]),
                hashtags: strings(&["colorful", "burst", "energy", "vivid"]),
                sizes: strings(&[
                    "A4 (8×12\")",
                    "A3 (12×16\")",
                    "A2 (16×24\")",
                    "A1 (24×32\")",
                ]),
                variations: vec![
                    variation("Print Quality", &["Standard", "Premium", "Gallery Quality"]),
                    variation(
                        "Frame",
                        &["Black Frame", "White Frame", "Natural Oak", "No Frame"],
                    ),
                ],
                stock_number: "CB-007".to_string(),
                stock_quantity: 12,
                in_stock: true,
                badge: Some("Limited Edition".to_string()),
                handle: "chromatic-burst".to_string(),
            }],
        },
        PosterCollection {
            id: "mock-5".to_string(),
            title: "Urban Expression Collection".to_string(),
            designer: "Santiago Camiro".to_string(),
            description: "Street-inspired designs that capture the raw energy and authentic \
                          spirit of urban culture."
                .to_string(),
            main_image: IMAGES[4].to_string(),
            price: "$40".to_string(),
            technique: "Street Art Style Print".to_string(),
            dimensions: "18\" x 24\"".to_string(),
            year: "2024".to_string(),
            series: "Urban Collection".to_string(),
            likes: 167,
            comments: 89,
            tags: strings(&["urban", "street", "edgy"]),
            handle: "urban-expression-collection".to_string(),
            products: vec![Product {
                id: "mock-p5-1".to_string(),
                shopify_id: "mock-sp-5".to_string(),
                title: "Street Pulse".to_string(),
                price: "$40".to_string(),
                original_price: None,
                image: IMAGES[4].to_string(),
                creation_date: "May 2024".to_string(),
                location: "Williamsburg, NY".to_string(),
                description: "Raw urban energy captured in striking visual form, bringing the \
                              authentic spirit of street culture to your walls."
                    .to_string(),
                materials: strings(&[
                    "Heavy Stock Paper",
                    "UV-Resistant Coating",
                    "Weatherproof Finish",
                ]),
                hashtags: strings(&["street", "urban", "pulse", "authentic"]),
                sizes: strings(&["A4 (8×12\")", "A3 (12×16\")", "A2 (16×24\")"]),
                variations: vec![
                    variation("Style", &["Original Color", "Monochrome", "Sepia Tone"]),
                    variation(
                        "Frame",
                        &["Industrial Black", "Raw Steel", "Reclaimed Wood", "No Frame"],
                    ),
                ],
                stock_number: "SP-008".to_string(),
                stock_quantity: 27,
                in_stock: true,
                badge: None,
                handle: "street-pulse".to_string(),
            }],
        },
        PosterCollection {
            id: "mock-6".to_string(),
            title: "Vintage Typography Series".to_string(),
            designer: "Santiago Camiro".to_string(),
            description: "Classic typography meets contemporary design in this timeless \
                          collection of typographic art."
                .to_string(),
            main_image: IMAGES[5].to_string(),
            price: "$35".to_string(),
            technique: "Vintage-Style Letterpress Effect".to_string(),
            dimensions: "16\" x 20\"".to_string(),
            year: "2024".to_string(),
            series: "Typography Collection".to_string(),
            likes: 203,
            comments: 45,
            tags: strings(&["vintage", "typography", "classic"]),
            handle: "vintage-typography-series".to_string(),
            products: vec![Product {
                id: "mock-p6-1".to_string(),
                shopify_id: "mock-sp-6".to_string(),
                title: "Classic Letters".to_string(),
                price: "$35".to_string(),
                original_price: None,
                image: IMAGES[5].to_string(),
                creation_date: "January 2024".to_string(),
                location: "Brooklyn, NY".to_string(),
                description: "Timeless typography that celebrates the art of letterforms with \
                              vintage charm and contemporary appeal."
                    .to_string(),
                materials: strings(&[
                    "Textured Art Paper",
                    "Matte Finish",
                    "Aged-Effect Coating",
                ]),
                hashtags: strings(&["typography", "vintage", "letters", "classic"]),
                sizes: strings(&["A4 (8×12\")", "A3 (12×16\")", "A2 (16×24\")"]),
                variations: vec![
                    variation(
                        "Color Scheme",
                        &["Vintage Sepia", "Classic Black", "Antique Gold"],
                    ),
                    variation(
                        "Frame",
                        &["Vintage Wood", "Antique Brass", "Classic Black", "No Frame"],
                    ),
                ],
                stock_number: "CL-009".to_string(),
                stock_quantity: 33,
                in_stock: true,
                badge: Some("Bestseller".to_string()),
                handle: "classic-letters".to_string(),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_catalog_size() {
        let collections = fallback_collections();
        assert_eq!(collections.len(), 6);

        let product_count: usize = collections.iter().map(|c| c.products.len()).sum();
        assert_eq!(product_count, 8);
    }

    #[test]
    fn test_fallback_ids_are_unique() {
        let collections = fallback_collections();

        let mut ids: Vec<&str> = collections.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);

        let mut product_ids: Vec<&str> = collections
            .iter()
            .flat_map(|c| c.products.iter().map(|p| p.id.as_str()))
            .collect();
        product_ids.sort();
        product_ids.dedup();
        assert_eq!(product_ids.len(), 8);
    }

    #[test]
    fn test_fallback_catalog_is_stable() {
        // Same content on every call: the transport-failure substitution
        // must be reproducible
        assert_eq!(fallback_collections(), fallback_collections());
    }

    #[test]
    fn test_fallback_entries_are_complete() {
        for collection in fallback_collections() {
            assert!(!collection.title.is_empty());
            assert!(!collection.main_image.is_empty());
            assert!(collection.price.starts_with('$'));
            assert!(!collection.products.is_empty());
            for product in &collection.products {
                assert!(product.price.starts_with('$'));
                assert!(!product.sizes.is_empty());
                assert!(!product.variations.is_empty());
                assert!(product.in_stock);
            }
        }
    }
}
