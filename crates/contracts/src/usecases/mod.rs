pub mod common;
pub mod u601_sales_calculator;
