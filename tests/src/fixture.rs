//! Scratch-directory sessions.

use std::fs;
use std::path::PathBuf;

use mnemo_session::{MemorySession, SessionConfig};
use mnemo_store::{GraphStore, StoreConfig};
use tempfile::TempDir;

/// A session persisted under a temporary directory that lives as long as
/// the fixture.
pub struct Fixture {
    dir: TempDir,
    config: StoreConfig,
}

impl Fixture {
    /// A fixture whose backing file does not exist yet.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create scratch directory");
        let config = StoreConfig::new()
            .with_dir(dir.path().join("memory"))
            .with_file_name("memory.jsonl");
        Self { dir, config }
    }

    /// A fixture whose backing file already holds `lines`, newline-joined.
    pub fn with_lines(lines: &[&str]) -> Self {
        let fixture = Self::new();
        fixture.write_raw(&lines.join("\n"));
        fixture
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Full path of the backing file.
    pub fn path(&self) -> PathBuf {
        self.config.path()
    }

    /// A fresh store over the backing file.
    pub fn store(&self) -> GraphStore {
        GraphStore::open(&self.config)
    }

    /// A fresh session over the backing file.
    pub fn session(&self) -> MemorySession {
        MemorySession::open(SessionConfig::new().with_store(self.config.clone()))
            .expect("open session")
    }

    /// The backing file's content, or `None` if it does not exist.
    pub fn raw(&self) -> Option<String> {
        fs::read_to_string(self.path()).ok()
    }

    /// The backing file's non-empty lines, each parsed as JSON.
    pub fn raw_records(&self) -> Vec<serde_json::Value> {
        self.raw()
            .unwrap_or_default()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("persisted line is JSON"))
            .collect()
    }

    /// Replace the backing file's content, creating its directory.
    pub fn write_raw(&self, contents: &str) {
        fs::create_dir_all(&self.config.dir).expect("create backing directory");
        fs::write(self.path(), contents).expect("write backing file");
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
