use super::Page;
use crate::config::{default_refresh_secs, default_storage_poll_secs, ConfigStore};
use colored::*;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub struct WatchOptions {
    pub interval: Duration,
    pub storage_poll: Duration,
    pub timeout_secs: u64,
    pub verbose: bool,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(default_refresh_secs()),
            storage_poll: Duration::from_secs(default_storage_poll_secs()),
            timeout_secs: crate::config::default_timeout(),
            verbose: false,
        }
    }
}

/// Reload `page` on every interval tick and whenever the store publishes a
/// change, calling `on_render` after each load, until `shutdown` resolves.
///
/// Storage is polled so that settings saved by another process reach the
/// store through a regular update.
pub async fn watch_page<F, S>(
    page: &mut Page,
    store: &ConfigStore,
    options: &WatchOptions,
    mut on_render: F,
    shutdown: S,
) where
    F: FnMut(&Page),
    S: Future<Output = ()>,
{
    let mut changes = store.subscribe();
    let mut refresh = tokio::time::interval(options.interval);
    refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut poll = tokio::time::interval(options.storage_poll);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = refresh.tick() => {}
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                if options.verbose {
                    eprintln!("{}", "[CC] Settings changed, reloading".dimmed());
                }
            }
            _ = poll.tick() => {
                store.sync_from_storage();
                continue;
            }
        }

        changes.borrow_and_update();
        page.refresh(store, options.timeout_secs, options.verbose).await;
        on_render(page);
    }
}
