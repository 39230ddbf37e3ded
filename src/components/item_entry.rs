//! Item Entry Component
//!
//! Form for adding a new inventory item, with the category autocomplete.

use leptos::*;

use crate::api;
use crate::state::global::{Category, GlobalState};

use super::category_picker::CategoryPicker;

/// Quick add-item form
#[component]
pub fn ItemEntry() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (quantity, set_quantity) = create_signal(1i64);
    let (price, set_price) = create_signal(0.0f64);
    let (supplier, set_supplier) = create_signal(String::new());
    let selected_category = create_rw_signal(None::<Category>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let item_name = name.get();
        if item_name.trim().is_empty() {
            state.show_error("Item name is required");
            return;
        }
        let Some(category) = selected_category.get() else {
            state.show_error("Pick a category first");
            return;
        };

        let q = quantity.get();
        let p = price.get();
        let s = {
            let s = supplier.get();
            if s.trim().is_empty() { None } else { Some(s) }
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_item(&item_name, q, p, category.category_id, s).await {
                Ok(item) => {
                    state_clone.show_success(&format!("Added {} (qty {})", item.name, item.quantity));
                    set_name.set(String::new());
                    set_quantity.set(1);
                    set_price.set(0.0);
                    set_supplier.set(String::new());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Category"</label>
                <CategoryPicker selected=selected_category />
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Quantity"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || quantity.get().to_string()
                        on:input=move |ev| {
                            if let Ok(q) = event_target_value(&ev).parse() {
                                set_quantity.set(q);
                            }
                        }
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Price"</label>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || price.get().to_string()
                        on:input=move |ev| {
                            if let Ok(p) = event_target_value(&ev).parse() {
                                set_price.set(p);
                            }
                        }
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Supplier (optional)"</label>
                <input
                    type="text"
                    prop:value=move || supplier.get()
                    on:input=move |ev| set_supplier.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Saving..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Add Item"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}
