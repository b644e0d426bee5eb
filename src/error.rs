use std::fmt;

#[derive(Debug)]
pub enum CommandCenterError {
    /// Non-2xx response from the API.
    RequestFailed {
        status: u16,
    },
    /// Transport or decode failure, carried as the underlying error's text.
    Transport(String),
    AnalyticsFailed,
    ConfigError(String),
    Other(String),
}

impl fmt::Display for CommandCenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandCenterError::RequestFailed { status } => write!(f, "Failed: {}", status),
            CommandCenterError::Transport(msg) => write!(f, "{}", msg),
            CommandCenterError::AnalyticsFailed => write!(f, "Failed to load analytics"),
            CommandCenterError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CommandCenterError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CommandCenterError {}

impl From<reqwest::Error> for CommandCenterError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CommandCenterError::RequestFailed {
                status: status.as_u16(),
            },
            None => CommandCenterError::Transport(err.to_string()),
        }
    }
}

/// Settings-file I/O and parse errors arrive here with their context chain.
impl From<anyhow::Error> for CommandCenterError {
    fn from(err: anyhow::Error) -> Self {
        CommandCenterError::Other(format!("{:#}", err))
    }
}

impl From<String> for CommandCenterError {
    fn from(msg: String) -> Self {
        CommandCenterError::Other(msg)
    }
}

impl From<&str> for CommandCenterError {
    fn from(msg: &str) -> Self {
        CommandCenterError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CommandCenterError>;
