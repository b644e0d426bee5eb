use crate::api::models::{DashboardStats, DASHBOARD_STATS_PATH};
use crate::api::response::format_counts;
use crate::api::ApiClient;
use crate::ui::Renderer;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    pub data: Option<DashboardStats>,
    pub error: Option<String>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, client: &ApiClient) {
        match client.get_json(DASHBOARD_STATS_PATH).await {
            Ok(payload) => {
                self.data = Some(DashboardStats::from_payload(&payload));
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// `Costs: $12.50 (events: 3)`, zeroes when nothing is loaded
    pub fn cost_summary(&self) -> String {
        let costs = self.data.as_ref().and_then(|d| d.costs.as_ref());
        let total = costs.and_then(|c| c.total_usd).unwrap_or(0.0);
        let count = costs.and_then(|c| c.count).unwrap_or(0);
        format!("Costs: ${:.2} (events: {})", total, count)
    }

    pub fn render(&self, renderer: &Renderer) -> String {
        let data = self.data.as_ref();
        let mut lines = vec![renderer.title("Snapshot"), renderer.muted(&self.cost_summary())];
        if let Some(error) = &self.error {
            lines.push(renderer.error(error));
        }

        let sections = [
            ("Queue", data.and_then(|d| d.queue.as_ref())),
            ("Outbox", data.and_then(|d| d.outbox.as_ref())),
            ("Runs", data.and_then(|d| d.runs.as_ref())),
        ];
        for (title, counts) in sections {
            lines.push(String::new());
            lines.push(renderer.title(title));
            lines.push(renderer.muted(&format_counts(counts)));
        }

        let recent_runs = data
            .and_then(|d| d.recent_runs.clone())
            .unwrap_or_default();
        lines.push(String::new());
        lines.push(renderer.title("Recent Runs"));
        lines.push(renderer.json(&Value::Array(recent_runs)));
        lines.join("\n")
    }
}
