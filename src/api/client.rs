//! HTTP API Client
//!
//! Functions for communicating with the inventory management REST API.

use gloo_net::http::Request;

use crate::state::global::{Category, LowStockItem, Summary};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local storage key holding the configured API base URL
const API_BASE_KEY: &str = "stockbook_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    #[serde(alias = "detail")]
    pub error: String,
}

/// A created inventory item, echoed back by the API
#[derive(Debug, Clone, serde::Deserialize)]
pub struct InventoryItem {
    pub item_id: u32,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub category: Category,
}

// ============ API Functions ============

/// Fetch categories, the source list for the category autocomplete
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/categories/", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch inventory totals for the dashboard summary cards
pub async fn fetch_summary() -> Result<Summary, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/dashboard/summary", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch items below the low-stock threshold
pub async fn fetch_low_stock() -> Result<Vec<LowStockItem>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/dashboard/low-stock", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new inventory item
pub async fn create_item(
    name: &str,
    quantity: i64,
    price: f64,
    category_id: u32,
    supplier: Option<String>,
) -> Result<InventoryItem, String> {
    #[derive(serde::Serialize)]
    struct CreateItemRequest {
        name: String,
        quantity: i64,
        price: f64,
        category_id: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        supplier: Option<String>,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/items/", api_base))
        .json(&CreateItemRequest {
            name: name.to_string(),
            quantity,
            price,
            category_id,
            supplier,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Check API reachability. The inventory API has no dedicated health
/// endpoint, so the category listing doubles as the probe.
pub async fn check_health() -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/categories/?limit=1", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    Ok(())
}
