//! Raw read/write surfaces the store persists through.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The byte/text surface under a [`GraphStore`](crate::GraphStore).
///
/// Implementations do no encoding; they move whole file contents.
pub trait StorageBackend: Send + Sync {
    /// Where the content lives, for diagnostics.
    fn location(&self) -> &Path;

    /// Create whatever is missing so that reads and writes can succeed.
    ///
    /// Returns whether anything was created.
    fn prepare(&self) -> io::Result<bool>;

    /// Read the whole content. `None` when nothing has been stored yet.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the whole content with one write.
    fn write(&self, contents: &str) -> io::Result<()>;
}

/// A file on the local filesystem, inside a directory created on demand.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
    path: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>, file_name: &str) -> Self {
        let dir = dir.into();
        let path = dir.join(file_name);
        Self { dir, path }
    }

    /// The backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StorageBackend for FileBackend {
    fn location(&self) -> &Path {
        &self.path
    }

    fn prepare(&self) -> io::Result<bool> {
        let mut created = false;

        if !self.dir.is_dir() {
            fs::create_dir_all(&self.dir)?;
            created = true;
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => created = true,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e),
        }

        Ok(created)
    }

    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        fs::write(&self.path, contents)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    creations: usize,
    writes: usize,
}

/// In-process backend for tests and embedded use.
#[derive(Debug)]
pub struct MemoryBackend {
    location: PathBuf,
    state: Mutex<MemoryState>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Create an empty backend with nothing stored yet.
    pub fn new() -> Self {
        Self {
            location: PathBuf::from("<memory>"),
            state: Mutex::new(MemoryState::default()),
        }
    }

    /// Create a backend that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.lock().contents = Some(contents.into());
        backend
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current stored content.
    pub fn contents(&self) -> Option<String> {
        self.lock().contents.clone()
    }

    /// How many times `prepare` actually created storage.
    pub fn creations(&self) -> usize {
        self.lock().creations
    }

    /// How many writes have been made.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }
}

impl StorageBackend for MemoryBackend {
    fn location(&self) -> &Path {
        &self.location
    }

    fn prepare(&self) -> io::Result<bool> {
        let mut state = self.lock();
        if state.contents.is_some() {
            return Ok(false);
        }
        state.contents = Some(String::new());
        state.creations += 1;
        Ok(true)
    }

    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.lock().contents.clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        let mut state = self.lock();
        state.contents = Some(contents.to_string());
        state.writes += 1;
        Ok(())
    }
}
