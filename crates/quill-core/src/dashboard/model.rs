//! Dashboard overview model. Values arrive pre-formatted for display; the
//! client does not aggregate anything itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendType {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default)]
    pub trend_type: Option<TrendType>,
    #[serde(default)]
    pub sublabel: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub chart_bars: Vec<f64>,
    #[serde(default)]
    pub users: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: u64,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    pub user: String,
    pub action: String,
    pub target: String,
    #[serde(default)]
    pub time: String,
}
