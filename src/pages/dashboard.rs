//! Dashboard Page
//!
//! Main dashboard view showing inventory totals, charts, low stock, and
//! the quick add-item form.

use leptos::*;

use crate::api;
use crate::components::charts::read_embedded_payload;
use crate::components::{DashboardCharts, ItemEntry, Loading, StatCard};
use crate::state::global::{format_currency, GlobalState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Parse the embedded chart payload once. An absent tag leaves the
    // signal at None and the chart renderer does nothing.
    let state_for_payload = state.clone();
    create_effect(move |_| {
        state_for_payload.payload.set(read_embedded_payload());
    });

    // Fetch initial data on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_categories().await {
                Ok(categories) => {
                    state.categories.set(categories);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch categories: {}", e).into());
                }
            }

            match api::fetch_summary().await {
                Ok(summary) => {
                    state.summary.set(Some(summary));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch summary: {}", e).into());
                }
            }

            match api::fetch_low_stock().await {
                Ok(items) => {
                    state.low_stock.set(items);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch low stock: {}", e).into());
                }
            }

            state.loading.set(false);
        });
    });

    let state_for_view = state.clone();
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your inventory at a glance"</p>
            </div>

            // Summary row
            <SummaryCards />

            // Charts
            <section>
                <h2 class="text-xl font-semibold mb-4">"Overview"</h2>
                {move || {
                    if state_for_view.loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <DashboardCharts /> }.into_view()
                    }
                }}
            </section>

            // Two column layout for low stock and quick entry
            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Low Stock"</h2>
                    <LowStockList />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Add Item"</h2>
                    <ItemEntry />
                </section>
            </div>
        </div>
    }
}

/// Summary figures across the top of the dashboard
#[component]
fn SummaryCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let summary = state.summary;
    let total_value = Signal::derive(move || {
        summary
            .get()
            .map(|s| format_currency(s.total_inventory_value))
            .unwrap_or_else(|| "—".to_string())
    });
    let total_items = Signal::derive(move || {
        summary
            .get()
            .map(|s| s.total_items.to_string())
            .unwrap_or_else(|| "—".to_string())
    });

    let low_stock = state.low_stock;
    let low_stock_count = Signal::derive(move || low_stock.get().len().to_string());

    let categories = state.categories;
    let category_count = Signal::derive(move || categories.get().len().to_string());

    view! {
        <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard label="Total Inventory Value" value=total_value />
            <StatCard label="Items Tracked" value=total_items />
            <StatCard label="Low Stock Items" value=low_stock_count />
            <StatCard label="Categories" value=category_count />
        </section>
    }
}

/// Items running low, with their remaining quantity
#[component]
fn LowStockList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-2">
            {move || {
                let items = state.low_stock.get();

                if items.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"All items sufficiently stocked"</p>
                    }.into_view()
                } else {
                    items.into_iter().map(|item| {
                        view! {
                            <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                <span>{item.name}</span>
                                <span class="text-yellow-400 font-semibold">
                                    {format!("{} left", item.quantity)}
                                </span>
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}
