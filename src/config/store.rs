use super::api::{ApiConfig, ApiConfigUpdate};
use super::headers;
use crate::storage::{KeyValueStore, MemoryKeyValueStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

pub const API_KEY_STORAGE_KEY: &str = "commandCenterApiKey";
pub const CLIENT_ID_STORAGE_KEY: &str = "commandCenterClientId";
pub const API_BASE_STORAGE_KEY: &str = "commandCenterApiBase";

/// Holds the shared [`ApiConfig`] and keeps it in sync with storage.
///
/// One instance is created per process and handed out as `Arc<ConfigStore>`;
/// pages read through it instead of holding their own copy. Every update is
/// written through to storage and published to subscribers before `update`
/// returns.
pub struct ConfigStore {
    storage: Arc<dyn KeyValueStore>,
    fallback_base: String,
    state: watch::Sender<ApiConfig>,
    hydrated: AtomicBool,
    update_lock: Mutex<()>,
}

impl ConfigStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, fallback_base: impl Into<String>) -> Self {
        let (state, _) = watch::channel(ApiConfig::default());
        Self {
            storage,
            fallback_base: fallback_base.into(),
            state,
            hydrated: AtomicBool::new(false),
            update_lock: Mutex::new(()),
        }
    }

    /// Current values; all empty until [`hydrate`](Self::hydrate) has run.
    pub fn get(&self) -> ApiConfig {
        self.state.borrow().clone()
    }

    /// Load stored values into memory. Only the first call has an effect.
    pub fn hydrate(&self) {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            return;
        }
        self.state.send_replace(self.read_storage());
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::SeqCst)
    }

    /// Merge `update` into the current values, persist all three fields and
    /// notify subscribers.
    ///
    /// Storage is written before the new state is published, and readers are
    /// not blocked while the writes happen.
    pub fn update(&self, update: ApiConfigUpdate) {
        let _writer = self.update_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut next = self.get();
        next.merge(update);
        self.storage.set(API_KEY_STORAGE_KEY, &next.api_key);
        self.storage.set(CLIENT_ID_STORAGE_KEY, &next.client_id);
        self.storage.set(API_BASE_STORAGE_KEY, &next.api_base);

        self.state.send_replace(next);
    }

    /// Apply values changed in storage by someone else. Returns true when
    /// anything differed.
    pub fn sync_from_storage(&self) -> bool {
        let update = self.get().diff(&self.read_storage());
        if update.is_empty() {
            return false;
        }
        self.update(update);
        true
    }

    pub fn subscribe(&self) -> watch::Receiver<ApiConfig> {
        self.state.subscribe()
    }

    /// Stored base when set, otherwise the configured default (possibly empty).
    pub fn resolved_api_base(&self) -> String {
        let config = self.state.borrow();
        if config.api_base.is_empty() {
            self.fallback_base.clone()
        } else {
            config.api_base.clone()
        }
    }

    pub fn build_headers(&self) -> HashMap<String, String> {
        headers::build_headers(&self.state.borrow())
    }

    /// A hydrated copy of the current values backed by memory, so updates on
    /// it are never persisted.
    pub fn detached(&self) -> ConfigStore {
        let current = self.get();
        let storage = MemoryKeyValueStore::with_entries([
            (API_KEY_STORAGE_KEY, current.api_key),
            (CLIENT_ID_STORAGE_KEY, current.client_id),
            (API_BASE_STORAGE_KEY, current.api_base),
        ]);
        let store = ConfigStore::new(Arc::new(storage), self.fallback_base.clone());
        store.hydrate();
        store
    }

    fn read_storage(&self) -> ApiConfig {
        let read = |key: &str| self.storage.get(key).unwrap_or_default();
        ApiConfig {
            api_key: read(API_KEY_STORAGE_KEY),
            client_id: read(CLIENT_ID_STORAGE_KEY),
            api_base: read(API_BASE_STORAGE_KEY),
        }
    }
}
