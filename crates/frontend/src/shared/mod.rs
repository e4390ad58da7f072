pub mod api_utils;
pub mod config;
pub mod export;
pub mod number_format;
