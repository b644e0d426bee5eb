use super::api::ApiConfig;
use std::collections::HashMap;

pub const API_KEY_HEADER: &str = "X-API-Key";
pub const CLIENT_ID_HEADER: &str = "X-Client-Id";

/// Derive request headers from the current settings.
///
/// Unset (empty) fields are left out rather than sent as empty headers.
pub fn build_headers(config: &ApiConfig) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    if !config.api_key.is_empty() {
        headers.insert(API_KEY_HEADER.to_string(), config.api_key.clone());
    }
    if !config.client_id.is_empty() {
        headers.insert(CLIENT_ID_HEADER.to_string(), config.client_id.clone());
    }
    headers
}
