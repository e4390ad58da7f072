use serde::{Deserialize, Serialize};

/// Shop as returned by `GET /api/shops`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: i64,
    pub name: String,
}

/// Product as returned by `GET /api/shops/{id}/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub shop_id: i64,
    pub name: String,
    /// Quantity sold
    pub amount: i64,
    /// Decimal unit price, sent as a string (e.g. "2.50")
    pub price: String,
}
