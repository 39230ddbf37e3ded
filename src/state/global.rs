//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::charts::DashboardPayload;
use crate::state::autocomplete::Named;
use crate::state::theme::Theme;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Categories from the API, source list for the autocomplete
    pub categories: RwSignal<Vec<Category>>,
    /// Chart payload embedded in the page, if present
    pub payload: RwSignal<Option<DashboardPayload>>,
    /// Inventory totals from the API
    pub summary: RwSignal<Option<Summary>>,
    /// Items running low on stock
    pub low_stock: RwSignal<Vec<LowStockItem>>,
    /// Current visual mode
    pub theme: RwSignal<Theme>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Category definition from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Category {
    pub category_id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Inventory totals
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct Summary {
    pub total_inventory_value: f64,
    pub total_items: u64,
}

/// An item below the low-stock threshold
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct LowStockItem {
    pub name: String,
    pub quantity: i64,
}

/// Provide global state to the component tree
pub fn provide_global_state(initial_theme: Theme) {
    let state = GlobalState {
        categories: create_rw_signal(Vec::new()),
        payload: create_rw_signal(None),
        summary: create_rw_signal(None),
        low_stock: create_rw_signal(Vec::new()),
        theme: create_rw_signal(initial_theme),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Format an inventory value as dollars with thousands separators
pub fn format_currency(value: f64) -> String {
    let cents = format!("{:.2}", value.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1200.0), "-$1,200.00");
    }

    #[test]
    fn test_category_deserializes_without_description() {
        let json = r#"{"category_id": 3, "name": "Electronics"}"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.name, "Electronics");
        assert_eq!(cat.description, None);
    }

    #[test]
    fn test_summary_deserializes() {
        let json = r#"{"total_inventory_value": 1520.75, "total_items": 42}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_items, 42);
        assert!((summary.total_inventory_value - 1520.75).abs() < f64::EPSILON);
    }
}
