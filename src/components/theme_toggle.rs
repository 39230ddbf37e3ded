//! Theme Toggle Component
//!
//! Checkbox control that flips between dark and light mode, keeping the
//! persisted preference, the document root class, and the label in sync.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::theme::{LocalStorage, Theme, ThemeController};

/// Reflect a theme onto the document root as the `dark` class. Guarded on
/// the document and root element existing.
pub fn apply_theme(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
        }
    }
}

/// Dark/light mode toggle with its label
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_change = move |ev: web_sys::Event| {
        let theme = Theme::from_checked(event_target_checked(&ev));
        ThemeController::new(LocalStorage).set(theme);
        apply_theme(theme);
        state.theme.set(theme);
    };

    view! {
        <label class="flex items-center space-x-2 cursor-pointer select-none">
            <input
                type="checkbox"
                prop:checked=move || state.theme.get().is_dark()
                on:change=on_change
                class="w-4 h-4 accent-primary-600"
            />
            <span class="text-sm text-gray-300">
                {move || state.theme.get().label()}
            </span>
        </label>
    }
}
