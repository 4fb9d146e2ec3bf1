// ABOUTME: Document storage for docstats: upload validation, text decoding, and the JSON index.
// ABOUTME: Re-exports DocumentStore, its builder and options, StoreError, and the response models.

pub mod decode;
pub mod error;
pub mod models;
pub mod options;
pub mod store;

pub use decode::decode_text;
pub use error::StoreError;
pub use models::{Document, DocumentSummary, HealthStatus, ResultsResponse, UploadResponse};
pub use options::{
    StoreBuilder, StoreOptions, DEFAULT_HISTORY_LIMIT, DEFAULT_INDEX_FILE,
    DEFAULT_MAX_FILE_SIZE_BYTES,
};
pub use store::DocumentStore;
