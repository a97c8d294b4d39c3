//! Store configuration.

use std::env;
use std::path::PathBuf;

/// Default backing directory, relative to the working directory.
pub const DEFAULT_DIR: &str = "memory";
/// Default backing file name.
pub const DEFAULT_FILE_NAME: &str = "memory.jsonl";

/// Environment variable overriding the backing directory.
pub const ENV_MEMORY_DIR: &str = "MNEMO_MEMORY_DIR";
/// Environment variable overriding the backing file name.
pub const ENV_MEMORY_FILE: &str = "MNEMO_MEMORY_FILE";

/// Where the graph is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the backing file
    pub dir: PathBuf,
    /// Backing file name inside `dir`
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `MNEMO_MEMORY_DIR` / `MNEMO_MEMORY_FILE`.
    ///
    /// Unset or empty variables keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_MEMORY_DIR).filter(|v| !v.is_empty()) {
            config.dir = PathBuf::from(dir);
        }
        if let Some(file_name) = lookup(ENV_MEMORY_FILE).filter(|v| !v.is_empty()) {
            config.file_name = file_name;
        }
        config
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Full path of the backing file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}
