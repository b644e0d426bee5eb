use serde::{Deserialize, Serialize};

/// Connection settings shared by every page.
///
/// An empty string always means "not set"; `api_base` falls back to the
/// configured default when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    pub api_key: String,
    pub client_id: String,
    pub api_base: String,
}

/// Partial update applied with merge semantics: `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfigUpdate {
    pub api_key: Option<String>,
    pub client_id: Option<String>,
    pub api_base: Option<String>,
}

impl ApiConfigUpdate {
    pub fn api_key(value: impl Into<String>) -> Self {
        Self {
            api_key: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn client_id(value: impl Into<String>) -> Self {
        Self {
            client_id: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn api_base(value: impl Into<String>) -> Self {
        Self {
            api_base: Some(value.into()),
            ..Self::default()
        }
    }

    /// Update that resets every field to "not set"
    pub fn clear() -> Self {
        Self {
            api_key: Some(String::new()),
            client_id: Some(String::new()),
            api_base: Some(String::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.client_id.is_none() && self.api_base.is_none()
    }
}

impl ApiConfig {
    pub fn merge(&mut self, update: ApiConfigUpdate) {
        if let Some(api_key) = update.api_key {
            self.api_key = api_key;
        }
        if let Some(client_id) = update.client_id {
            self.client_id = client_id;
        }
        if let Some(api_base) = update.api_base {
            self.api_base = api_base;
        }
    }

    /// Update that would turn `self` into `other`, naming only differing fields
    pub fn diff(&self, other: &ApiConfig) -> ApiConfigUpdate {
        let changed = |a: &String, b: &String| (a != b).then(|| b.clone());
        ApiConfigUpdate {
            api_key: changed(&self.api_key, &other.api_key),
            client_id: changed(&self.client_id, &other.client_id),
            api_base: changed(&self.api_base, &other.api_base),
        }
    }
}
