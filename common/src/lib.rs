//! Poster Gallery Common Library
//!
//! Domain logic shared between frontends: normalized catalog types, the
//! store-record normalizer, the built-in fallback catalog, and the
//! UI-independent interaction state (pagination, carousel, likes).

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod likes;
pub mod normalize;
pub mod pagination;
pub mod shopify;
pub mod types;

pub use carousel::{Carousel, CarouselConfig, Phase, Settle};
pub use catalog::fallback_collections;
pub use error::{Error, Result};
pub use likes::LikeSet;
pub use normalize::{Normalizer, NormalizerConfig};
pub use pagination::{PaginationConfig, Paginator};
pub use shopify::{ProductsResponse, ShopifyImage, ShopifyOption, ShopifyProduct, ShopifyVariant};
pub use types::{PosterCollection, Product, Variation};
