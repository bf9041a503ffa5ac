//! Analytics resource access.

use crate::gateway::Gateway;
use async_trait::async_trait;
use quill_core::analytics::{
    AnalyticsRepository, AnalyticsStat, ChartDataPoint, TopArticle, TrafficSource,
};
use quill_core::error::Result;
use std::sync::Arc;

pub struct ApiAnalyticsRepository {
    gateway: Arc<Gateway>,
}

impl ApiAnalyticsRepository {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl AnalyticsRepository for ApiAnalyticsRepository {
    async fn overview(&self) -> Result<Vec<AnalyticsStat>> {
        self.gateway.get("/analytics/overview", &[]).await
    }

    async fn activity(&self) -> Result<Vec<ChartDataPoint>> {
        self.gateway.get("/analytics/activity", &[]).await
    }

    async fn traffic(&self) -> Result<Vec<TrafficSource>> {
        self.gateway.get("/analytics/traffic", &[]).await
    }

    async fn top_articles(&self) -> Result<Vec<TopArticle>> {
        self.gateway.get("/analytics/top-articles", &[]).await
    }
}
