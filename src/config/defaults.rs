pub const ENV_API_BASE: &str = "COMMAND_CENTER_API_BASE";
pub const ENV_TIMEOUT: &str = "COMMAND_CENTER_TIMEOUT";
pub const ENV_VERBOSE: &str = "COMMAND_CENTER_VERBOSE";
pub const ENV_STORAGE_DIR: &str = "COMMAND_CENTER_STORAGE_DIR";

pub fn default_timeout() -> u64 {
    30
}

/// Legacy dashboard refreshed every 30 seconds
pub fn default_refresh_secs() -> u64 {
    30
}

/// How often a watching page re-reads storage for changes made elsewhere
pub fn default_storage_poll_secs() -> u64 {
    2
}
