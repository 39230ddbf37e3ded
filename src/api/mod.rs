//! API Client
//!
//! HTTP access to the inventory management API.

pub mod client;

pub use client::*;
