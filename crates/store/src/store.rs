// ABOUTME: DocumentStore persists uploads on disk and their metrics in a JSON index.
// ABOUTME: Handles extension and size checks, file ids, results lookup, and upload history.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use chrono::Utc;
use docstats_metrics::compute_metrics;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::decode::decode_text;
use crate::error::StoreError;
use crate::models::{Document, DocumentSummary, HealthStatus, ResultsResponse, UploadResponse};
use crate::options::{StoreBuilder, StoreOptions};

const CHUNK_SIZE: usize = 64 * 1024;

/// On-disk index of every stored document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DocumentIndex {
    #[serde(default)]
    last_id: u64,
    #[serde(default)]
    documents: Vec<Document>,
}

/// Stores uploaded text files and their metrics.
#[derive(Debug)]
pub struct DocumentStore {
    options: StoreOptions,
    index: DocumentIndex,
}

impl DocumentStore {
    /// Create a StoreBuilder for configuring a store.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Opens the store, creating the upload directory when it is missing.
    pub fn open(options: StoreOptions) -> Result<Self, StoreError> {
        fs::create_dir_all(&options.upload_dir)?;
        let index = load_index(&options.index_path())?;
        debug!(
            upload_dir = %options.upload_dir.display(),
            documents = index.documents.len(),
            "opened document store"
        );
        Ok(Self { options, index })
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// All stored documents in upload order.
    pub fn documents(&self) -> &[Document] {
        &self.index.documents
    }

    pub fn get(&self, file_id: &str) -> Option<&Document> {
        self.index.documents.iter().find(|d| d.file_id == file_id)
    }

    /// Stores an upload and analyses it immediately.
    pub fn upload<R: Read>(
        &mut self,
        filename: &str,
        reader: R,
    ) -> Result<UploadResponse, StoreError> {
        let (mut document, bytes) = self.ingest(filename, reader)?;
        let metrics = compute_metrics(&decode_text(&bytes));
        document.metrics = Some(metrics.clone());

        let response = UploadResponse {
            file_id: document.file_id.clone(),
            filename: document.filename.clone(),
            metrics,
        };
        self.insert(document)?;
        info!(
            file_id = %response.file_id,
            filename = %response.filename,
            "stored and analysed upload"
        );
        Ok(response)
    }

    /// Stores an upload without analysing it. Its results stay pending until
    /// [`DocumentStore::analyze_pending`] runs.
    pub fn upload_deferred<R: Read>(
        &mut self,
        filename: &str,
        reader: R,
    ) -> Result<DocumentSummary, StoreError> {
        let (document, _) = self.ingest(filename, reader)?;
        let summary = document.summary();
        self.insert(document)?;
        info!(
            file_id = %summary.file_id,
            filename = %summary.filename,
            "stored upload for later analysis"
        );
        Ok(summary)
    }

    /// Analyses every stored document that has no metrics yet.
    /// Returns how many documents were analysed.
    ///
    /// A document whose stored file cannot be read is logged and left
    /// pending; the rest are still analysed and persisted. If the index
    /// cannot be written, the documents analysed in this run are pending again.
    pub fn analyze_pending(&mut self) -> Result<usize, StoreError> {
        let mut analyzed = Vec::new();
        for (i, document) in self.index.documents.iter_mut().enumerate() {
            if !document.is_pending() {
                continue;
            }
            match fs::read(&document.path) {
                Ok(bytes) => {
                    document.metrics = Some(compute_metrics(&decode_text(&bytes)));
                    analyzed.push(i);
                    debug!(file_id = %document.file_id, "analysed pending document");
                }
                Err(err) => warn!(
                    file_id = %document.file_id,
                    path = %document.path.display(),
                    error = %err,
                    "skipped unreadable pending document"
                ),
            }
        }
        if analyzed.is_empty() {
            return Ok(0);
        }

        if let Err(err) = self.persist() {
            for &i in &analyzed {
                self.index.documents[i].metrics = None;
            }
            return Err(err);
        }
        info!(analyzed = analyzed.len(), "analysed pending documents");
        Ok(analyzed.len())
    }

    /// Returns the stored metrics for a document.
    pub fn results(&self, file_id: &str) -> Result<ResultsResponse, StoreError> {
        let document = self
            .get(file_id)
            .ok_or_else(|| StoreError::NotFound(file_id.to_string()))?;
        let metrics = document
            .metrics
            .clone()
            .ok_or_else(|| StoreError::Pending(file_id.to_string()))?;
        Ok(ResultsResponse {
            file_id: document.file_id.clone(),
            filename: document.filename.clone(),
            uploaded_at: document.uploaded_at,
            metrics,
        })
    }

    /// Most recently uploaded documents first, at most `limit` of them.
    pub fn history(&self, limit: usize) -> Vec<DocumentSummary> {
        let mut documents: Vec<&Document> = self.index.documents.iter().collect();
        documents.sort_by(|a, b| {
            b.uploaded_at
                .cmp(&a.uploaded_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        documents
            .into_iter()
            .take(limit)
            .map(Document::summary)
            .collect()
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus::ok()
    }

    /// Validates and writes an upload to its final path. The document is not
    /// yet part of the index.
    fn ingest<R: Read>(
        &mut self,
        filename: &str,
        mut reader: R,
    ) -> Result<(Document, Vec<u8>), StoreError> {
        let extension = file_extension(filename);
        if !self.options.allows_extension(&extension) {
            warn!(filename, extension = %extension, "rejected upload with unsupported extension");
            return Err(StoreError::unsupported(
                extension,
                &self.options.allowed_extensions,
            ));
        }

        let tmp_path = self
            .options
            .upload_dir
            .join(format!("tmp-{}", new_file_id()));
        let bytes = match copy_limited(&mut reader, &tmp_path, self.options.max_file_size_bytes) {
            Ok(bytes) => bytes,
            Err(err) => {
                let _ = fs::remove_file(&tmp_path);
                if matches!(err, StoreError::TooLarge { .. }) {
                    warn!(
                        filename,
                        limit = self.options.max_file_size_bytes,
                        "rejected oversized upload"
                    );
                }
                return Err(err);
            }
        };

        let file_id = self.unused_file_id();
        let path = self
            .options
            .upload_dir
            .join(format!("{}{}", file_id, extension));
        if let Err(err) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }

        self.index.last_id += 1;
        let document = Document {
            id: self.index.last_id,
            file_id,
            filename: filename.to_string(),
            path,
            size_bytes: bytes.len() as u64,
            uploaded_at: Utc::now(),
            metrics: None,
        };
        Ok((document, bytes))
    }

    /// Adds a document to the index and persists it. On failure the document
    /// is taken out of the index again and its stored file is removed.
    fn insert(&mut self, document: Document) -> Result<(), StoreError> {
        self.index.documents.push(document);
        if let Err(err) = self.persist() {
            if let Some(document) = self.index.documents.pop() {
                self.index.last_id = document.id - 1;
                let _ = fs::remove_file(&document.path);
            }
            return Err(err);
        }
        Ok(())
    }

    fn unused_file_id(&self) -> String {
        loop {
            let id = new_file_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Writes the index to a temporary file and renames it into place.
    fn persist(&self) -> Result<(), StoreError> {
        let path = self.options.index_path();
        let tmp_path = path.with_extension("tmp");
        let json = serde_json::to_vec_pretty(&self.index)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;
        debug!(path = %path.display(), documents = self.index.documents.len(), "persisted index");
        Ok(())
    }
}

fn load_index(path: &Path) -> Result<DocumentIndex, StoreError> {
    match fs::read(path) {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(DocumentIndex::default()),
        Err(err) => Err(err.into()),
    }
}

/// Copies `reader` into a new file at `path`, failing once more than `limit`
/// bytes have been read. Returns the bytes written.
fn copy_limited<R: Read>(reader: &mut R, path: &Path, limit: u64) -> Result<Vec<u8>, StoreError> {
    let mut file = File::create(path)?;
    let mut content = Vec::new();
    let mut chunk = vec![0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        if (content.len() + n) as u64 > limit {
            return Err(StoreError::TooLarge { limit });
        }
        file.write_all(&chunk[..n])?;
        content.extend_from_slice(&chunk[..n]);
    }
    file.sync_all()?;
    Ok(content)
}

/// Lowercased extension of the final path component, with its dot.
/// Empty for names without one and for dotfiles such as `.txt`.
fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// Random v4 UUID as 32 lowercase hex characters.
fn new_file_id() -> String {
    Uuid::new_v4().simple().to_string()
}
