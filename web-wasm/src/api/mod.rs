//! Store API access

pub mod shopify;
