pub mod client;
pub mod models;
pub mod response;

pub use client::ApiClient;
pub use models::{AnalyticsData, CostSummary, DashboardStats};
