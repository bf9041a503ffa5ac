//! Analytics view model. Like the dashboard, values are pre-formatted by
//! the server.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsStat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub change: String,
    #[serde(default)]
    pub positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSource {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopArticle {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub read_rate: f64,
}
