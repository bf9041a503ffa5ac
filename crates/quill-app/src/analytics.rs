//! Analytics page controller. Four independent sections fetched
//! concurrently; each degrades to empty on its own.

use quill_client::OrEmpty;
use quill_core::analytics::{
    AnalyticsRepository, AnalyticsStat, ChartDataPoint, TopArticle, TrafficSource,
};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct AnalyticsState {
    overview: Vec<AnalyticsStat>,
    activity: Vec<ChartDataPoint>,
    traffic: Vec<TrafficSource>,
    top_articles: Vec<TopArticle>,
    loading: bool,
}

pub struct AnalyticsBoard {
    analytics: Arc<dyn AnalyticsRepository>,
    state: RwLock<AnalyticsState>,
}

impl AnalyticsBoard {
    pub fn new(analytics: Arc<dyn AnalyticsRepository>) -> Self {
        Self {
            analytics,
            state: RwLock::new(AnalyticsState::default()),
        }
    }

    pub async fn refresh(&self) {
        self.state.write().await.loading = true;

        let (overview, activity, traffic, top_articles) = tokio::join!(
            self.analytics.overview(),
            self.analytics.activity(),
            self.analytics.traffic(),
            self.analytics.top_articles(),
        );

        let mut state = self.state.write().await;
        state.overview = overview.or_empty();
        state.activity = activity.or_empty();
        state.traffic = traffic.or_empty();
        state.top_articles = top_articles.or_empty();
        state.loading = false;
    }

    pub async fn overview(&self) -> Vec<AnalyticsStat> {
        self.state.read().await.overview.clone()
    }

    pub async fn activity(&self) -> Vec<ChartDataPoint> {
        self.state.read().await.activity.clone()
    }

    pub async fn traffic(&self) -> Vec<TrafficSource> {
        self.state.read().await.traffic.clone()
    }

    pub async fn top_articles(&self) -> Vec<TopArticle> {
        self.state.read().await.top_articles.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}
