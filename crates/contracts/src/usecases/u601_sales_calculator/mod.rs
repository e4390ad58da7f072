pub mod aggregate;
pub mod dto;
pub mod error;
pub mod report;

pub use aggregate::{aggregate_sales, parse_price, SaleLine, SalesReport};
pub use dto::{Product, Shop};
pub use error::{FetchError, SalesError};
pub use report::{format_fixed2, render_csv, report_filename, ReportColumns};

use crate::usecases::common::UseCaseMetadata;

pub struct SalesCalculator;

impl UseCaseMetadata for SalesCalculator {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "sales_calculator"
    }

    fn display_name() -> &'static str {
        "Sales Calculator"
    }

    fn description() -> &'static str {
        "Per-product and total sales for the products of one shop, with CSV export"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(SalesCalculator::full_name(), "u601_sales_calculator");
    }
}
