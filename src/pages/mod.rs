mod analytics;
mod dashboard;
mod list;
mod watch;

pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use list::ListPage;
pub use watch::{watch_page, WatchOptions};

use crate::api::ApiClient;
use crate::config::ConfigStore;
use crate::ui::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Dashboard,
    Pipeline,
    Agents,
    Approvals,
    Analytics,
}

/// View state for one page: the last loaded data plus the last error.
#[derive(Debug, Clone)]
pub enum Page {
    Dashboard(DashboardPage),
    List(ListPage),
    Analytics(AnalyticsPage),
}

impl Page {
    pub fn new(kind: PageKind) -> Self {
        match kind {
            PageKind::Dashboard => Page::Dashboard(DashboardPage::new()),
            PageKind::Pipeline => Page::List(ListPage::pipeline()),
            PageKind::Agents => Page::List(ListPage::agents()),
            PageKind::Approvals => Page::List(ListPage::approvals()),
            PageKind::Analytics => Page::Analytics(AnalyticsPage::new()),
        }
    }

    pub async fn load(&mut self, client: &ApiClient) {
        match self {
            Page::Dashboard(page) => page.load(client).await,
            Page::List(page) => page.load(client).await,
            Page::Analytics(page) => page.load(client).await,
        }
    }

    /// Load using the store's current base and headers
    pub async fn refresh(&mut self, store: &ConfigStore, timeout_secs: u64, verbose: bool) {
        match ApiClient::from_store(store, timeout_secs, verbose) {
            Ok(client) => self.load(&client).await,
            Err(e) => self.set_error(e.to_string()),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Page::Dashboard(page) => page.error.as_deref(),
            Page::List(page) => page.error.as_deref(),
            Page::Analytics(page) => page.error.as_deref(),
        }
    }

    fn set_error(&mut self, message: String) {
        match self {
            Page::Dashboard(page) => page.error = Some(message),
            Page::List(page) => page.error = Some(message),
            Page::Analytics(page) => page.error = Some(message),
        }
    }

    pub fn render(&self, renderer: &Renderer) -> String {
        match self {
            Page::Dashboard(page) => page.render(renderer),
            Page::List(page) => page.render(renderer),
            Page::Analytics(page) => page.render(renderer),
        }
    }
}
