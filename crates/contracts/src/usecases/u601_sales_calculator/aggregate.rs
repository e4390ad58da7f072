//! Sales aggregation over a shop's product list
//!
//! Amounts keep full `f64` precision here; rounding to 2 decimals happens only
//! when a value is displayed or exported.

use super::dto::Product;
use super::error::SalesError;

/// Sales figure for a single product
#[derive(Debug, Clone, PartialEq)]
pub struct SaleLine {
    pub product_id: i64,
    pub product_name: String,
    pub unit_price: f64,
    pub amount: i64,
    /// `amount * unit_price`, unrounded
    pub sale_amount: f64,
}

/// Sale lines in response order plus the grand total
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesReport {
    pub lines: Vec<SaleLine>,
    pub total: f64,
}

impl SalesReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Parses a decimal price string like "2.50"
pub fn parse_price(product: &Product) -> Result<f64, SalesError> {
    let parse_error = || SalesError::Parse {
        product_id: product.id,
        value: product.price.clone(),
    };

    let value: f64 = product.price.trim().parse().map_err(|_| parse_error())?;
    if !value.is_finite() {
        return Err(parse_error());
    }
    Ok(value)
}

/// Computes one line per product and the unrounded total.
///
/// Fails on the first unparsable price; there is no partial result.
pub fn aggregate_sales(products: &[Product]) -> Result<SalesReport, SalesError> {
    let mut lines = Vec::with_capacity(products.len());
    let mut total = 0.0;

    for product in products {
        let unit_price = parse_price(product)?;
        let sale_amount = product.amount as f64 * unit_price;
        total += sale_amount;

        lines.push(SaleLine {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price,
            amount: product.amount,
            sale_amount,
        });
    }

    Ok(SalesReport { lines, total })
}
