use contracts::usecases::u601_sales_calculator::{FetchError, Product, Shop};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{shop_products_url, shops_url};

/// Shop directory: `GET {base}/api/shops`
pub async fn fetch_shops(base: &str) -> Result<Vec<Shop>, FetchError> {
    get_json(&shops_url(base)).await
}

/// Products of one shop: `GET {base}/api/shops/{id}/products`
pub async fn fetch_products(base: &str, shop_id: i64) -> Result<Vec<Product>, FetchError> {
    let products: Vec<Product> = get_json(&shop_products_url(base, shop_id)).await?;
    log::info!("Fetched {} products for shop {}", products.len(), shop_id);
    Ok(products)
}

/// Maps a non-2xx status to [`FetchError::Status`]
pub fn check_status(ok: bool, status: u16) -> Result<(), FetchError> {
    if ok {
        Ok(())
    } else {
        Err(FetchError::Status { status })
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    log::debug!("GET {}", url);

    let response = Request::get(url).send().await.map_err(|e| {
        log::error!("Request to {} failed: {}", url, e);
        FetchError::Network(e.to_string())
    })?;

    if let Err(e) = check_status(response.ok(), response.status()) {
        log::error!("{} returned {}", url, response.status());
        return Err(e);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(true, 200), Ok(()));
        assert_eq!(
            check_status(false, 500),
            Err(FetchError::Status { status: 500 })
        );
        assert_eq!(
            check_status(false, 404),
            Err(FetchError::Status { status: 404 })
        );
    }
}
