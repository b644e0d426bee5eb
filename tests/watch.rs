use command_center::config::{ApiConfigUpdate, ConfigStore, API_KEY_STORAGE_KEY};
use command_center::pages::{watch_page, Page, PageKind, WatchOptions};
use command_center::storage::{KeyValueStore, MemoryKeyValueStore};
use command_center::ui::Renderer;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn agents_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/agents"))
        .and(header("X-API-Key", "rotated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": ["after"]})))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": ["before"]})))
        .mount(&server)
        .await;
    server
}

fn slow_options(storage_poll: Duration) -> WatchOptions {
    WatchOptions {
        interval: Duration::from_secs(3600),
        storage_poll,
        timeout_secs: 5,
        verbose: false,
    }
}

#[tokio::test]
async fn test_watch_reloads_on_config_update() {
    let server = agents_server().await;
    let store = Arc::new(ConfigStore::new(
        Arc::new(MemoryKeyValueStore::new()),
        server.uri(),
    ));
    store.hydrate();

    let (render_tx, mut render_rx) = mpsc::unbounded_channel();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let watcher = tokio::spawn({
        let store = store.clone();
        async move {
            let mut page = Page::new(PageKind::Agents);
            let options = slow_options(Duration::from_secs(3600));
            watch_page(
                &mut page,
                &store,
                &options,
                |page| {
                    let _ = render_tx.send(page.render(&Renderer::plain()));
                },
                async {
                    let _ = stop_rx.await;
                },
            )
            .await;
        }
    });

    let first = timeout(Duration::from_secs(5), render_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(first.contains("before"));

    store.update(ApiConfigUpdate::api_key("rotated"));

    let second = timeout(Duration::from_secs(5), render_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(second.contains("after"));

    stop_tx.send(()).unwrap();
    timeout(Duration::from_secs(5), watcher)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_watch_picks_up_storage_written_elsewhere() {
    let server = agents_server().await;
    let storage = Arc::new(MemoryKeyValueStore::new());
    let store = Arc::new(ConfigStore::new(storage.clone(), server.uri()));
    store.hydrate();

    let (render_tx, mut render_rx) = mpsc::unbounded_channel();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let watcher = tokio::spawn({
        let store = store.clone();
        async move {
            let mut page = Page::new(PageKind::Agents);
            let options = slow_options(Duration::from_millis(20));
            watch_page(
                &mut page,
                &store,
                &options,
                |page| {
                    let _ = render_tx.send(page.render(&Renderer::plain()));
                },
                async {
                    let _ = stop_rx.await;
                },
            )
            .await;
        }
    });

    let first = timeout(Duration::from_secs(5), render_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(first.contains("before"));

    // Another process saving a new key
    storage.set(API_KEY_STORAGE_KEY, "rotated");

    let second = timeout(Duration::from_secs(5), render_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(second.contains("after"));
    assert_eq!(store.get().api_key, "rotated");

    stop_tx.send(()).unwrap();
    timeout(Duration::from_secs(5), watcher)
        .await
        .unwrap()
        .unwrap();
}
