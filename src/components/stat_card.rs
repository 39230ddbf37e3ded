//! Stat Card Component
//!
//! Displays a single dashboard figure.

use leptos::*;

/// Summary figure card
#[component]
pub fn StatCard(
    /// Label under the figure
    label: &'static str,
    /// Formatted value to display
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="text-3xl font-bold">
                {move || value.get()}
            </div>
            <div class="text-gray-400 text-sm mt-1">{label}</div>
        </div>
    }
}
