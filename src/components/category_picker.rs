//! Category Picker Component
//!
//! Autocomplete input over the category list. The filtered view is
//! recomputed on every read of the model, never cached.

use leptos::*;

use crate::state::autocomplete::Autocomplete;
use crate::state::global::{Category, GlobalState};

/// Text input with a filtered suggestion dropdown
#[component]
pub fn CategoryPicker(
    /// Receives the picked category
    selected: RwSignal<Option<Category>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let model = create_rw_signal(Autocomplete::<Category>::new(Vec::new()));
    let (open, set_open) = create_signal(false);

    // Rebuild the model when the category list arrives from the API
    create_effect(move |_| {
        let categories = state.categories.get();
        model.set(Autocomplete::new(categories));
    });

    let on_input = move |ev| {
        model.update(|m| m.set_query(event_target_value(&ev)));
        set_open.set(true);
    };

    view! {
        <div class="relative">
            <input
                type="text"
                placeholder="Search categories..."
                prop:value=move || model.with(|m| m.query().to_string())
                on:input=on_input
                on:focus=move |_| set_open.set(true)
                on:blur=move |_| set_open.set(false)
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />

            {move || {
                if !open.get() {
                    return view! {}.into_view();
                }

                let matches = model.with(|m| m.filtered());
                if matches.is_empty() {
                    return view! {
                        <div class="absolute z-10 w-full mt-1 bg-gray-700 rounded-lg shadow-lg
                                    px-4 py-3 text-sm text-gray-400">
                            "No matching categories"
                        </div>
                    }.into_view();
                }

                view! {
                    <ul class="absolute z-10 w-full mt-1 bg-gray-700 rounded-lg shadow-lg
                               max-h-48 overflow-y-auto">
                        {matches.into_iter().map(|category| {
                            let picked = category.clone();
                            view! {
                                <li
                                    // mousedown fires before the input's blur
                                    on:mousedown=move |_| {
                                        model.update(|m| m.select(picked.clone()));
                                        selected.set(Some(picked.clone()));
                                        set_open.set(false);
                                    }
                                    class="px-4 py-2 cursor-pointer hover:bg-gray-600
                                           first:rounded-t-lg last:rounded-b-lg"
                                >
                                    {category.name.clone()}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </div>
    }
}
