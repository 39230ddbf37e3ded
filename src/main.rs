//! Stockbook Dashboard
//!
//! Inventory management dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Inventory overview charts (categories, price buckets, suppliers)
//! - Category autocomplete for quick item entry
//! - Persisted dark/light theme
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the inventory API via HTTP and renders
//! charts through the Chart.js library loaded on the page.

use leptos::*;

mod api;
mod app;
mod charts;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
