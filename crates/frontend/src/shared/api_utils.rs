//! API utilities for requests to the shop service
//!
//! Provides helper functions for constructing API URLs.

/// Build a full API URL from the configured base and a path
///
/// # Arguments
/// * `base` - The API base URL like "https://example.com" (no trailing slash)
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// assert_eq!(api_url("https://example.com", "/api/shops"), "https://example.com/api/shops");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// URL of the shop directory
pub fn shops_url(base: &str) -> String {
    api_url(base, "/api/shops")
}

/// URL of the product list of one shop
pub fn shop_products_url(base: &str, shop_id: i64) -> String {
    api_url(base, &format!("/api/shops/{}/products", shop_id))
}
