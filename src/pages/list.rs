use crate::api::models::{AGENTS_PATH, APPROVALS_PATH, PIPELINE_PATH};
use crate::api::response::extract_items;
use crate::api::ApiClient;
use crate::ui::Renderer;
use serde_json::Value;

/// A page that shows the `items` array of one endpoint
#[derive(Debug, Clone)]
pub struct ListPage {
    pub title: &'static str,
    pub path: &'static str,
    pub items: Vec<Value>,
    pub error: Option<String>,
}

impl ListPage {
    pub fn new(title: &'static str, path: &'static str) -> Self {
        Self {
            title,
            path,
            items: Vec::new(),
            error: None,
        }
    }

    pub fn pipeline() -> Self {
        Self::new("Pipeline Leads", PIPELINE_PATH)
    }

    pub fn agents() -> Self {
        Self::new("Agents", AGENTS_PATH)
    }

    pub fn approvals() -> Self {
        Self::new("Approval Queue", APPROVALS_PATH)
    }

    pub async fn load(&mut self, client: &ApiClient) {
        match client.get_json(self.path).await {
            Ok(payload) => {
                self.items = extract_items(&payload);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn render(&self, renderer: &Renderer) -> String {
        let mut lines = vec![renderer.title(self.title)];
        if let Some(error) = &self.error {
            lines.push(renderer.error(error));
        }
        lines.push(renderer.json(&Value::Array(self.items.clone())));
        lines.join("\n")
    }
}
