use crate::shared::config::Config;
use crate::usecases::u601_sales_calculator::SalesCalculatorView;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Config is read by views through context
    provide_context(config);

    view! {
        <SalesCalculatorView />
    }
}
