//! Dashboard repository trait.

use super::model::{ActivityItem, DashboardStat};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Fetches the overview stat tiles.
    async fn stats(&self) -> Result<Vec<DashboardStat>>;

    /// Fetches the recent activity feed.
    async fn activity(&self) -> Result<Vec<ActivityItem>>;
}
