use super::state::SalesCalculatorState;
use super::{api, style};
use crate::shared::config::Config;
use crate::shared::export::download_csv;
use crate::shared::number_format::{format_money, format_number_int};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_sales_calculator::{format_fixed2, SalesCalculator, SalesError};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SalesCalculatorView() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let api_base = StoredValue::new(config.api.base_url);
    let filename_prefix = StoredValue::new(config.export.filename_prefix);

    let state = RwSignal::new(SalesCalculatorState::default());

    let (select_hovered, set_select_hovered) = signal(false);
    let (calculate_hovered, set_calculate_hovered) = signal(false);
    let (download_hovered, set_download_hovered) = signal(false);

    // Shop directory, once on mount
    Effect::new(move |_| {
        let base = api_base.get_value();
        spawn_local(async move {
            let outcome = api::fetch_shops(&base).await;
            state.update(|s| s.shops_loaded(outcome));
        });
    });

    let on_shop_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<i64>() {
            Ok(shop_id) => state.update(|s| s.select_shop(shop_id)),
            Err(_) => log::warn!("Ignoring shop selection '{}'", value),
        }
    };

    let on_calculate = move |_| {
        let mut ticket = None;
        state.update(|s| ticket = s.begin_calculate());
        let Some(ticket) = ticket else {
            return;
        };

        let base = api_base.get_value();
        spawn_local(async move {
            let outcome = api::fetch_products(&base, ticket.shop_id)
                .await
                .map_err(SalesError::from);
            state.update(|s| {
                s.finish_calculate(ticket, outcome);
            });
        });
    };

    let on_download = move |_| {
        let prefix = filename_prefix.get_value();
        match state.with_untracked(|s| s.export(&prefix)) {
            Some(Ok(export)) => {
                if let Err(e) = download_csv(&export.content, &export.filename) {
                    log::error!("CSV download failed: {}", e);
                }
            }
            Some(Err(e)) => log::error!("CSV export failed: {}", e),
            None => {}
        }
    };

    let can_calculate = move || state.with(|s| s.can_calculate());
    let is_loading = move || state.with(|s| s.is_loading);
    let selected = move || state.with(|s| s.selected_shop_id);

    view! {
        <div
            id=format!("{}--usecase", SalesCalculator::full_name())
            style="max-width: 450px; margin: 40px auto 0; border-radius: 12px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); font-family: Montserrat, sans-serif; padding: 20px;"
        >
            <h2 style="font-weight: 700; font-size: 28px; text-align: left;">
                {SalesCalculator::display_name()}
            </h2>

            <div style="display: flex; flex-direction: column; gap: 16px;">
                <div style="display: flex; justify-content: space-between; align-items: center; gap: 16px;">
                    <select
                        style=move || style::select_style(select_hovered.get())
                        on:change=on_shop_change
                        on:mouseenter=move |_| set_select_hovered.set(true)
                        on:mouseleave=move |_| set_select_hovered.set(false)
                    >
                        <option value="" disabled=true selected=move || selected().is_none()>
                            "Select Shop"
                        </option>
                        <For
                            each=move || state.with(|s| s.shops.clone())
                            key=|shop| shop.id
                            children=move |shop| {
                                let shop_id = shop.id;
                                view! {
                                    <option
                                        value=shop_id.to_string()
                                        selected=move || selected() == Some(shop_id)
                                    >
                                        {shop.name}
                                    </option>
                                }
                            }
                        />
                    </select>

                    <button
                        style=move || style::calculate_button_style(can_calculate(), calculate_hovered.get())
                        on:click=on_calculate
                        on:mouseenter=move |_| set_calculate_hovered.set(true)
                        on:mouseleave=move |_| set_calculate_hovered.set(false)
                        prop:disabled=move || !can_calculate()
                    >
                        {move || if is_loading() { "Calculating..." } else { "Calculate" }}
                    </button>
                </div>

                {move || state.with(|s| s.error.clone()).map(|msg| view! {
                    <div style="margin-top: 8px; color: #d32f2f;">{msg}</div>
                })}

                {move || state.with(|s| s.result.clone()).map(|result| {
                    if result.products.is_empty() {
                        return view! {
                            <div style="color: #666;">"No products found for this shop."</div>
                        }.into_any();
                    }

                    let total = format_fixed2(result.report.total);
                    let rows = result.report.lines.into_iter().map(|line| view! {
                        <tr>
                            <td>{line.product_name}</td>
                            <td style="text-align: right;">{format_money(line.unit_price)}</td>
                            <td style="text-align: right;">{format_number_int(line.amount)}</td>
                            <td style="text-align: right;">{format_money(line.sale_amount)}</td>
                        </tr>
                    }).collect_view();

                    view! {
                        <div style="display: flex; flex-direction: column; gap: 12px;">
                            <div style="font-size: 18px; font-weight: 500;">
                                "Total Sales: ¥" {total}
                            </div>
                            <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                                <thead>
                                    <tr>
                                        <th style="text-align: left;">"Product"</th>
                                        <th style="text-align: right;">"Price"</th>
                                        <th style="text-align: right;">"Qty"</th>
                                        <th style="text-align: right;">"Sales"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                            <button
                                style=move || style::download_button_style(download_hovered.get())
                                on:click=on_download
                                on:mouseenter=move |_| set_download_hovered.set(true)
                                on:mouseleave=move |_| set_download_hovered.set(false)
                            >
                                "Download CSV"
                            </button>
                        </div>
                    }.into_any()
                })}
            </div>
        </div>
    }
}
