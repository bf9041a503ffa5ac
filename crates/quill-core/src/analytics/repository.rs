//! Analytics repository trait.

use super::model::{AnalyticsStat, ChartDataPoint, TopArticle, TrafficSource};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Fetches the headline stat row.
    async fn overview(&self) -> Result<Vec<AnalyticsStat>>;

    /// Fetches the activity chart series.
    async fn activity(&self) -> Result<Vec<ChartDataPoint>>;

    /// Fetches the traffic source breakdown.
    async fn traffic(&self) -> Result<Vec<TrafficSource>>;

    /// Fetches the best performing articles.
    async fn top_articles(&self) -> Result<Vec<TopArticle>>;
}
