// ABOUTME: Configuration for the document store including StoreOptions and StoreBuilder.
// ABOUTME: StoreBuilder provides a fluent API for opening a DocumentStore with custom settings.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::DocumentStore;

/// Largest accepted upload: 5 MiB.
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_INDEX_FILE: &str = "documents.json";
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Configuration options for a DocumentStore.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOptions {
    /// Directory holding uploaded files and the index.
    pub upload_dir: PathBuf,
    pub max_file_size_bytes: u64,
    /// Lowercase extensions including the dot, e.g. `.txt`.
    pub allowed_extensions: Vec<String>,
    /// Index file name, relative to `upload_dir`.
    pub index_file: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_extensions: vec![".txt".to_string()],
            index_file: DEFAULT_INDEX_FILE.to_string(),
        }
    }
}

impl StoreOptions {
    pub fn index_path(&self) -> PathBuf {
        self.upload_dir.join(&self.index_file)
    }

    /// Returns true if `extension` (lowercase, with dot) may be uploaded.
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions.iter().any(|e| e == extension)
    }
}

/// Builder for opening DocumentStore instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    opts: StoreOptions,
}

impl StoreBuilder {
    /// Create a new StoreBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: StoreOptions::default(),
        }
    }

    /// Set the directory for uploads and the index.
    pub fn upload_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.opts.upload_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the maximum upload size in bytes.
    pub fn max_file_size_bytes(mut self, limit: u64) -> Self {
        self.opts.max_file_size_bytes = limit;
        self
    }

    /// Allow an additional file extension. A leading dot is added if missing.
    pub fn allow_extension(mut self, extension: impl AsRef<str>) -> Self {
        let ext = normalize_extension(extension.as_ref());
        if !self.opts.allows_extension(&ext) {
            self.opts.allowed_extensions.push(ext);
        }
        self
    }

    /// Set the index file name.
    pub fn index_file(mut self, name: impl Into<String>) -> Self {
        self.opts.index_file = name.into();
        self
    }

    /// Returns the options configured so far.
    pub fn options(&self) -> &StoreOptions {
        &self.opts
    }

    /// Open the store with the configured options.
    pub fn open(self) -> Result<DocumentStore, StoreError> {
        DocumentStore::open(self.opts)
    }
}

fn normalize_extension(extension: &str) -> String {
    let lower = extension.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}
