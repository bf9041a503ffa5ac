//! Dashboard domain: the stat tiles and activity feed of the overview page.

pub mod model;
pub mod repository;

pub use model::{ActivityItem, DashboardStat, TrendType};
pub use repository::DashboardRepository;
