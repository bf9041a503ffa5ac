//! Analytics domain: the traffic and engagement figures of the analytics
//! page.

pub mod model;
pub mod repository;

pub use model::{AnalyticsStat, ChartDataPoint, TopArticle, TrafficSource};
pub use repository::AnalyticsRepository;
