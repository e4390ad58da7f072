pub mod api;
pub mod state;
pub mod style;
pub mod view;

pub use view::SalesCalculatorView;
