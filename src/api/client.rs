use crate::config::ConfigStore;
use crate::error::{CommandCenterError, Result};
use colored::*;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// GET-only JSON client bound to one API base and one set of headers.
///
/// Build a fresh client after the config changes; it does not watch the store.
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    verbose: bool,
}

impl ApiClient {
    pub fn new(
        base: impl Into<String>,
        headers: &HashMap<String, String>,
        timeout_secs: u64,
        verbose: bool,
    ) -> Result<Self> {
        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| CommandCenterError::Transport(format!("Invalid header name {}: {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| CommandCenterError::Transport(format!("Invalid value for header {}: {}", name, e)))?;
            header_map.insert(header_name, header_value);
        }

        let mut builder = reqwest::Client::builder().default_headers(header_map);
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        let base = base.into();
        if verbose {
            let mut names: Vec<&str> = headers.keys().map(String::as_str).collect();
            names.sort_unstable();
            eprintln!(
                "{}",
                format!(
                    "[CC] API base: {} (headers: {})",
                    if base.is_empty() { "<unset>" } else { base.as_str() },
                    if names.is_empty() {
                        "none".to_string()
                    } else {
                        names.join(", ")
                    }
                )
                .dimmed()
            );
        }

        Ok(Self {
            http: builder.build()?,
            base,
            verbose,
        })
    }

    /// Client for the store's current resolved base and headers
    pub fn from_store(store: &ConfigStore, timeout_secs: u64, verbose: bool) -> Result<Self> {
        Self::new(
            store.resolved_api_base(),
            &store.build_headers(),
            timeout_secs,
            verbose,
        )
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        if self.verbose {
            eprintln!("{}", format!("[CC] GET {}", url).dimmed());
        }

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            if self.verbose {
                eprintln!("{}", format!("[CC] {} -> {}", url, status).dimmed());
            }
            return Err(CommandCenterError::RequestFailed {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }

    /// Fetch two paths concurrently; fails as a whole if either request fails.
    pub async fn get_pair(&self, first: &str, second: &str) -> Result<(Value, Value)> {
        futures::try_join!(self.get_json(first), self.get_json(second))
    }
}
