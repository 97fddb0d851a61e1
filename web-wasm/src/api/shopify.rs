//! Shopify catalog fetch
//!
//! Pulls the product list from the store's REST API and normalizes it
//! into gallery collections. Any transport or decode failure substitutes
//! the built-in catalog; the gallery is never empty and never shows an
//! error state.

use chrono::Utc;
use gloo::console;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use poster_gallery_common::{
    fallback_collections, Normalizer, PosterCollection, ProductsResponse,
};

/// Store access settings
#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    pub store: String,
    pub token: String,
    pub api_version: String,
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            store: "tndztv-yx".to_string(),
            token: "64aab96a1d4aaa428d04fb9d6519a916".to_string(),
            api_version: "2024-01".to_string(),
        }
    }
}

impl ShopifyConfig {
    fn products_url(&self) -> String {
        format!(
            "https://{}.myshopify.com/admin/api/{}/products.json?limit=250",
            self.store, self.api_version
        )
    }
}

/// Fetch the raw product list
async fn fetch_products(config: &ShopifyConfig) -> Result<ProductsResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&config.products_url(), &opts)?;
    request.headers().set("X-Shopify-Access-Token", &config.token)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "Shopify API error: {}",
            resp.status()
        )));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: ProductsResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(response)
}

/// Load the gallery catalog, falling back to the built-in collections
/// when the store is unreachable or carries no posters
pub async fn load_catalog(config: &ShopifyConfig, normalizer: &Normalizer) -> Vec<PosterCollection> {
    match fetch_products(config).await {
        Ok(response) => {
            let collections = normalizer.collections_from_products(&response.products, Utc::now());
            if collections.is_empty() {
                console::warn!("no poster products in store response, using built-in catalog");
                fallback_collections()
            } else {
                collections
            }
        }
        Err(err) => {
            console::warn!(
                "catalog fetch failed, using built-in catalog:",
                format!("{:?}", err)
            );
            fallback_collections()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_url() {
        let config = ShopifyConfig {
            store: "demo-store".to_string(),
            token: "secret".to_string(),
            api_version: "2024-01".to_string(),
        };

        assert_eq!(
            config.products_url(),
            "https://demo-store.myshopify.com/admin/api/2024-01/products.json?limit=250"
        );
    }

    #[test]
    fn test_default_config_points_at_store() {
        let config = ShopifyConfig::default();
        assert_eq!(config.store, "tndztv-yx");
        assert!(config.products_url().contains("myshopify.com"));
    }
}
