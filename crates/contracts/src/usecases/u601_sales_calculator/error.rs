use thiserror::Error;

/// Failure of a request to the shop API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to fetch data (HTTP {status})")]
    Status { status: u16 },

    #[error("Failed to fetch data: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Failure of a whole "calculate" run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalesError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid price \"{value}\" for product {product_id}")]
    Parse { product_id: i64, value: String },

    #[error("Failed to build CSV: {0}")]
    Export(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Status { status: 500 };
        assert_eq!(err.to_string(), "Failed to fetch data (HTTP 500)");

        let err = FetchError::Network("connection refused".to_string());
        assert!(err.to_string().starts_with("Failed to fetch data"));
    }

    #[test]
    fn test_sales_error_is_transparent_for_fetch() {
        let err: SalesError = FetchError::Status { status: 404 }.into();
        assert_eq!(err.to_string(), "Failed to fetch data (HTTP 404)");
    }

    #[test]
    fn test_parse_error_message() {
        let err = SalesError::Parse {
            product_id: 7,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid price \"abc\" for product 7");
    }
}
