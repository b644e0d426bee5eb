use crate::api::models::{AnalyticsData, ANALYTICS_COSTS_PATH, ANALYTICS_REVENUE_PATH};
use crate::api::ApiClient;
use crate::error::CommandCenterError;
use crate::ui::Renderer;
use serde_json::Value;

/// Revenue and cost analytics, loaded together
#[derive(Debug, Clone, Default)]
pub struct AnalyticsPage {
    pub data: AnalyticsData,
    pub error: Option<String>,
}

impl AnalyticsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both calls must succeed; a failure in either keeps the previous data
    /// and reports one generic error.
    pub async fn load(&mut self, client: &ApiClient) {
        match client
            .get_pair(ANALYTICS_REVENUE_PATH, ANALYTICS_COSTS_PATH)
            .await
        {
            Ok((revenue, costs)) => {
                self.data = AnalyticsData {
                    revenue: Some(revenue),
                    costs: Some(costs),
                };
                self.error = None;
            }
            Err(_) => self.error = Some(CommandCenterError::AnalyticsFailed.to_string()),
        }
    }

    pub fn render(&self, renderer: &Renderer) -> String {
        let mut lines = vec![renderer.title("Analytics")];
        if let Some(error) = &self.error {
            lines.push(renderer.error(error));
        }
        let data = serde_json::to_value(&self.data).unwrap_or(Value::Null);
        lines.push(renderer.json(&data));
        lines.join("\n")
    }
}
