//! Dashboard resource access.

use crate::gateway::Gateway;
use async_trait::async_trait;
use quill_core::dashboard::{ActivityItem, DashboardRepository, DashboardStat};
use quill_core::error::Result;
use std::sync::Arc;

pub struct ApiDashboardRepository {
    gateway: Arc<Gateway>,
}

impl ApiDashboardRepository {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl DashboardRepository for ApiDashboardRepository {
    async fn stats(&self) -> Result<Vec<DashboardStat>> {
        self.gateway.get("/dashboard/stats", &[]).await
    }

    async fn activity(&self) -> Result<Vec<ActivityItem>> {
        self.gateway.get("/dashboard/activities", &[]).await
    }
}
