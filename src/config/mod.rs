mod api;
mod defaults;
mod headers;
mod store;
mod validation;

use crate::cli::Args;
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub use api::{ApiConfig, ApiConfigUpdate};
pub use defaults::{
    default_refresh_secs, default_storage_poll_secs, default_timeout, ENV_API_BASE,
    ENV_STORAGE_DIR, ENV_TIMEOUT, ENV_VERBOSE,
};
pub use headers::{build_headers, API_KEY_HEADER, CLIENT_ID_HEADER};
pub use store::{ConfigStore, API_BASE_STORAGE_KEY, API_KEY_STORAGE_KEY, CLIENT_ID_STORAGE_KEY};
pub use validation::expand_env_var_in_string;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiSection {
    /// Base URL used when no base has been saved with `config set`
    #[serde(default)]
    pub default_base: Option<String>,
    #[serde(default)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionSection {
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageSection {
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub storage: StorageSection,
}

/// Process-wide settings resolved once at startup.
pub struct Settings {
    pub default_api_base: String,
    pub base_override: Option<String>,
    pub timeout: u64,
    pub verbose: bool,
    pub storage_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_env_and_args(args: &Args) -> Self {
        let file = match SettingsFile::load() {
            Ok(file) => file,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("Warning: {:#}; using defaults", e).yellow()
                );
                SettingsFile::default()
            }
        };
        Self::resolve(args, &file)
    }

    /// Precedence: CLI args > env vars > settings file > built-in default
    pub fn resolve(args: &Args, file: &SettingsFile) -> Self {
        let default_api_base = env::var(ENV_API_BASE)
            .ok()
            .or(file.api.default_base.clone())
            .map(|base| expand_env_var_in_string(&base))
            .unwrap_or_default();

        let timeout = args
            .timeout
            .or_else(|| env::var(ENV_TIMEOUT).ok().and_then(|s| s.parse::<u64>().ok()))
            .or(file.api.timeout)
            .unwrap_or_else(default_timeout);

        let verbose = args.verbose
            || env::var(ENV_VERBOSE)
                .ok()
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
                .or(file.session.verbose)
                .unwrap_or(false);

        let storage_dir = env::var(ENV_STORAGE_DIR)
            .ok()
            .or(file.storage.dir.clone())
            .map(|dir| PathBuf::from(expand_env_var_in_string(&dir)));

        Settings {
            default_api_base,
            base_override: args.base.clone(),
            timeout,
            verbose,
            storage_dir,
        }
    }
}

impl SettingsFile {
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(SettingsFile::default())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let settings = if is_yaml {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML settings file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON settings file: {}", path.display())
            })?
        };

        Ok(settings)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // Current directory overrides the user config
            PathBuf::from(".command-center.yaml"),
            PathBuf::from(".command-center.yml"),
            PathBuf::from(".command-center.json"),
        ];

        if let Some(config_dir) = Self::user_config_dir() {
            paths.push(config_dir.join("command-center.yaml"));
            paths.push(config_dir.join("command-center.yml"));
            paths.push(config_dir.join("command-center.json"));
        }

        paths
    }

    pub fn user_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("command-center"))
    }

    pub fn example() -> Self {
        SettingsFile {
            api: ApiSection {
                default_base: Some("http://localhost:8000".to_string()),
                timeout: Some(default_timeout()),
            },
            session: SessionSection {
                verbose: Some(false),
            },
            storage: StorageSection { dir: None },
        }
    }

    /// Write the example settings to `path`, refusing to overwrite unless `force`.
    pub fn write_example(path: &std::path::Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "Settings file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_yaml::to_string(&Self::example())?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write settings file: {}", path.display()))?;
        Ok(())
    }
}
