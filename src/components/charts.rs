//! Chart Components
//!
//! Mount points for the dashboard charts and the bridge to the Chart.js
//! collaborator loaded on the page.

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::charts::{
    category_chart, price_chart, supplier_chart, ChartConfig, DashboardPayload,
    CATEGORY_MOUNT_ID, PAYLOAD_ELEMENT_ID, PRICE_MOUNT_ID, SUPPLIER_MOUNT_ID,
};
use crate::state::global::GlobalState;

#[wasm_bindgen]
extern "C" {
    /// The Chart.js global, consumed as `new Chart(mount, config)`
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart")]
    fn new(mount: &web_sys::Element, config: &JsValue) -> ChartJs;
}

/// Read and parse the JSON blob the server embeds in the page.
///
/// Returns `None` when the element is absent (no dashboard data on this
/// page). Malformed JSON is the server's bug and fails loudly.
pub fn read_embedded_payload() -> Option<DashboardPayload> {
    let document = web_sys::window()?.document()?;
    let tag = document.get_element_by_id(PAYLOAD_ELEMENT_ID)?;
    let text = tag.text_content()?;

    Some(serde_json::from_str(&text).expect("dashboard-data payload is not valid JSON"))
}

/// Hand one chart config to Chart.js. A missing mount point skips only
/// this chart.
fn render_chart(mount_id: &str, config: &ChartConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(mount) = document.get_element_by_id(mount_id) else {
        return;
    };

    let json = serde_json::to_string(config).expect("chart config serializes");
    let Ok(parsed) = js_sys::JSON::parse(&json) else {
        return;
    };

    let _ = ChartJs::new(&mount, &parsed);
}

/// Dashboard chart grid
#[component]
pub fn DashboardCharts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Draw once the payload lands. The effect re-runs if the payload
    // signal ever changes, which keeps the charts in step with it.
    create_effect(move |_| {
        if let Some(payload) = state.payload.get() {
            render_chart(CATEGORY_MOUNT_ID, &category_chart(&payload));
            render_chart(PRICE_MOUNT_ID, &price_chart(&payload));
            if let Some(config) = supplier_chart(&payload) {
                render_chart(SUPPLIER_MOUNT_ID, &config);
            }
        }
    });

    view! {
        <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-6">
            <ChartPanel title="Items by Category" mount_id=CATEGORY_MOUNT_ID />
            <ChartPanel title="Price Distribution" mount_id=PRICE_MOUNT_ID />
            <ChartPanel title="Top Suppliers" mount_id=SUPPLIER_MOUNT_ID />
        </div>

        // Shown when the page carries no embedded payload at all
        {move || {
            if state.payload.get().is_none() {
                view! {
                    <p class="text-gray-400 text-sm mt-4">"No chart data available"</p>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

/// One titled chart mount
#[component]
fn ChartPanel(
    title: &'static str,
    mount_id: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">{title}</h3>
            <canvas id=mount_id class="w-full" />
        </div>
    }
}
