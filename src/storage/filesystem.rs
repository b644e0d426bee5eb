use super::store::KeyValueStore;
use anyhow::{Context, Result};
use colored::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Key-value store kept as a single JSON object on disk.
///
/// Every read goes back to the file, so values written by another process
/// are picked up without restarting.
pub struct FileKeyValueStore {
    path: PathBuf,
    verbose: bool,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            path: dir.into().join(STORAGE_FILE_NAME),
            verbose,
            write_lock: Mutex::new(()),
        }
    }

    /// `<data dir>/command-center`, falling back to `~/.local/share/command-center`
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
            .map(|dir| dir.join("command-center"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> BTreeMap<String, String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                if self.verbose {
                    eprintln!(
                        "{}",
                        format!(
                            "[CC] Ignoring malformed storage file {}: {}",
                            self.path.display(),
                            e
                        )
                        .dimmed()
                    );
                }
                BTreeMap::new()
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory: {}", parent.display())
            })?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write storage file: {}", self.path.display()))?;
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_entries();
        f(&mut entries);

        if let Err(e) = self.write_entries(&entries) {
            if self.verbose {
                eprintln!("{}", format!("[CC] Warning: {:#}", e).dimmed());
            }
        }
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn delete(&self, key: &str) {
        self.modify(|entries| {
            entries.remove(key);
        });
    }
}
