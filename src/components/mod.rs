//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod category_picker;
pub mod charts;
pub mod item_entry;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod theme_toggle;
pub mod toast;

pub use category_picker::CategoryPicker;
pub use charts::DashboardCharts;
pub use item_entry::ItemEntry;
pub use loading::Loading;
pub use nav::Nav;
pub use stat_card::StatCard;
pub use theme_toggle::ThemeToggle;
pub use toast::Toast;
