use serde_json::Value;

/// `items` array of a list payload; missing or non-array means empty
pub fn extract_items(payload: &Value) -> Vec<Value> {
    payload
        .get("items")
        .and_then(|items| items.as_array())
        .cloned()
        .unwrap_or_default()
}

/// Render counts as `key: value, ...` in the order the server sent them,
/// or `N/A` when the section is absent
pub fn format_counts(counts: Option<&serde_json::Map<String, Value>>) -> String {
    let Some(counts) = counts else {
        return "N/A".to_string();
    };

    counts
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}: {}", key, s),
            other => format!("{}: {}", key, other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
