/// String key-value storage that persists settings between runs.
///
/// Implementations never report failures to the caller: a failed read is an
/// absent value and a failed write leaves the previous contents in place.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str);

    /// Remove `key` if present
    fn delete(&self, key: &str);
}
