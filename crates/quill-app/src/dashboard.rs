//! Dashboard overview controller: stat tiles plus the activity feed,
//! fetched concurrently. A failed section renders empty instead of taking
//! the page down.

use quill_client::OrEmpty;
use quill_core::dashboard::{ActivityItem, DashboardRepository, DashboardStat};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct OverviewState {
    stats: Vec<DashboardStat>,
    activity: Vec<ActivityItem>,
    loading: bool,
}

pub struct DashboardOverview {
    dashboard: Arc<dyn DashboardRepository>,
    state: RwLock<OverviewState>,
}

impl DashboardOverview {
    pub fn new(dashboard: Arc<dyn DashboardRepository>) -> Self {
        Self {
            dashboard,
            state: RwLock::new(OverviewState::default()),
        }
    }

    pub async fn refresh(&self) {
        self.state.write().await.loading = true;

        let (stats, activity) = tokio::join!(self.dashboard.stats(), self.dashboard.activity());

        let mut state = self.state.write().await;
        state.stats = stats.or_empty();
        state.activity = activity.or_empty();
        state.loading = false;
    }

    pub async fn stats(&self) -> Vec<DashboardStat> {
        self.state.read().await.stats.clone()
    }

    pub async fn activity(&self) -> Vec<ActivityItem> {
        self.state.read().await.activity.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}
