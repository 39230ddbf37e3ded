//! State Management
//!
//! Global application state, the autocomplete view-model, and the theme
//! preference controller.

pub mod autocomplete;
pub mod global;
pub mod theme;

pub use autocomplete::{Autocomplete, Named};
pub use global::{provide_global_state, Category, GlobalState, LowStockItem, Summary};
pub use theme::{LocalStorage, PreferenceStore, Theme, ThemeController};
