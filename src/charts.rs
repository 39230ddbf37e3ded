//! Dashboard Charts
//!
//! The embedded dashboard payload and the pure builders that turn it into
//! chart configurations. The configs serialize to exactly the shape the
//! Chart.js collaborator expects (`type` / `data` / `options`); handing
//! them to the library is the job of `components::charts`.

use serde::{Deserialize, Serialize};

/// Element id of the embedded JSON payload
pub const PAYLOAD_ELEMENT_ID: &str = "dashboard-data";

/// Mount point ids, one per chart
pub const CATEGORY_MOUNT_ID: &str = "categoryChart";
pub const PRICE_MOUNT_ID: &str = "priceChart";
pub const SUPPLIER_MOUNT_ID: &str = "supplierChart";

const CATEGORY_PALETTE: [&str; 5] = ["#4F46E5", "#10B981", "#F59E0B", "#EF4444", "#3B82F6"];
const SUPPLIER_PALETTE: [&str; 5] = ["#1E40AF", "#059669", "#D97706", "#DC2626", "#6B21A8"];
const PRICE_BAR_COLOR: &str = "#6366F1";

/// Data blob the server embeds in the dashboard page.
///
/// `top_suppliers` is a list of `[name, item count]` pairs; a null or
/// missing field suppresses the supplier chart, an empty list does not.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DashboardPayload {
    pub category_labels: Vec<String>,
    pub category_counts: Vec<u64>,
    pub price_ranges: Vec<String>,
    pub price_counts: Vec<u64>,
    #[serde(default)]
    pub top_suppliers: Option<Vec<(String, u64)>>,
}

/// Chart flavor, serialized as the Chart.js `type` tag
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Doughnut,
}

/// One labelled series
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
    #[serde(rename = "backgroundColor")]
    pub background_color: BackgroundColor,
}

/// Either one color for the whole series or a per-slice palette
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum BackgroundColor {
    Single(&'static str),
    Palette(Vec<&'static str>),
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Ticks {
    pub precision: u8,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ValueAxis {
    #[serde(rename = "beginAtZero")]
    pub begin_at_zero: bool,
    pub ticks: Ticks,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Scales {
    pub y: ValueAxis,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

/// Complete configuration for one chart, as handed to the collaborator
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

fn legend_bottom() -> ChartOptions {
    ChartOptions {
        responsive: true,
        plugins: Some(Plugins {
            legend: Legend { position: "bottom" },
        }),
        scales: None,
    }
}

/// Category distribution: pie over item counts per category
pub fn category_chart(payload: &DashboardPayload) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Pie,
        data: ChartData {
            labels: payload.category_labels.clone(),
            datasets: vec![Dataset {
                label: "Items by Category".to_string(),
                data: payload.category_counts.clone(),
                background_color: BackgroundColor::Palette(CATEGORY_PALETTE.to_vec()),
            }],
        },
        options: legend_bottom(),
    }
}

/// Price buckets: bar chart, zero-based value axis with integer ticks
pub fn price_chart(payload: &DashboardPayload) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: payload.price_ranges.clone(),
            datasets: vec![Dataset {
                label: "Items per Price Range".to_string(),
                data: payload.price_counts.clone(),
                background_color: BackgroundColor::Single(PRICE_BAR_COLOR),
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: None,
            scales: Some(Scales {
                y: ValueAxis {
                    begin_at_zero: true,
                    ticks: Ticks { precision: 0 },
                },
            }),
        },
    }
}

/// Top suppliers: doughnut over the `[name, count]` pairs, or `None` when
/// the payload carries no supplier data at all
pub fn supplier_chart(payload: &DashboardPayload) -> Option<ChartConfig> {
    let pairs = payload.top_suppliers.as_ref()?;
    let (labels, counts): (Vec<String>, Vec<u64>) = pairs.iter().cloned().unzip();

    Some(ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: "Top Suppliers".to_string(),
                data: counts,
                background_color: BackgroundColor::Palette(SUPPLIER_PALETTE.to_vec()),
            }],
        },
        options: legend_bottom(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> DashboardPayload {
        DashboardPayload {
            category_labels: vec!["Electronics".into(), "Furniture".into()],
            category_counts: vec![3, 5],
            price_ranges: vec!["0–50".into(), "51–100".into()],
            price_counts: vec![4, 2],
            top_suppliers: None,
        }
    }

    #[test]
    fn payload_deserializes_from_embedded_keys() {
        let json = r#"{
            "category_labels": ["Electronics", "Furniture"],
            "category_counts": [3, 5],
            "price_ranges": ["0–50", "51–100"],
            "price_counts": [4, 2],
            "top_suppliers": [["Acme Corp", 7], ["Globex", 2]]
        }"#;

        let parsed: DashboardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.category_counts, vec![3, 5]);
        assert_eq!(
            parsed.top_suppliers,
            Some(vec![("Acme Corp".to_string(), 7), ("Globex".to_string(), 2)])
        );
    }

    #[test]
    fn missing_supplier_field_deserializes_to_none() {
        let json = r#"{
            "category_labels": [],
            "category_counts": [],
            "price_ranges": [],
            "price_counts": []
        }"#;

        let parsed: DashboardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.top_suppliers, None);
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let result = serde_json::from_str::<DashboardPayload>("{not json");
        assert!(result.is_err());
    }

    #[test]
    fn category_chart_is_a_pie_over_the_counts() {
        let config = category_chart(&payload());

        assert_eq!(config.kind, ChartKind::Pie);
        assert_eq!(config.data.labels, vec!["Electronics", "Furniture"]);
        assert_eq!(config.data.datasets[0].data, vec![3, 5]);

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "pie");
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "bottom");
        assert!(value["options"]["scales"].is_null());
    }

    #[test]
    fn price_chart_is_a_zero_based_bar() {
        let config = price_chart(&payload());

        assert_eq!(config.kind, ChartKind::Bar);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["options"]["responsive"], true);
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(value["options"]["scales"]["y"]["ticks"]["precision"], 0);
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], "#6366F1");
    }

    #[test]
    fn no_supplier_data_means_no_doughnut() {
        assert_eq!(supplier_chart(&payload()), None);
    }

    #[test]
    fn supplier_pairs_unzip_into_labels_and_values() {
        let mut p = payload();
        p.top_suppliers = Some(vec![
            ("Acme Corp".to_string(), 7),
            ("Globex".to_string(), 2),
        ]);

        let config = supplier_chart(&p).unwrap();
        assert_eq!(config.kind, ChartKind::Doughnut);
        assert_eq!(config.data.labels, vec!["Acme Corp", "Globex"]);
        assert_eq!(config.data.datasets[0].data, vec![7, 2]);

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "doughnut");
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "bottom");
    }

    #[test]
    fn empty_supplier_list_still_builds_a_chart() {
        // Only null/absent suppresses the chart; an empty list renders
        // an empty doughnut.
        let mut p = payload();
        p.top_suppliers = Some(Vec::new());

        let config = supplier_chart(&p).unwrap();
        assert!(config.data.labels.is_empty());
        assert!(config.data.datasets[0].data.is_empty());
    }

    #[test]
    fn palette_serializes_as_an_array() {
        let value = serde_json::to_value(category_chart(&payload())).unwrap();
        let colors = value["data"]["datasets"][0]["backgroundColor"]
            .as_array()
            .unwrap();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], "#4F46E5");
    }
}
