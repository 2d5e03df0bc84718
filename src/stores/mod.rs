use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::file::FileRecord;

/// Object storage addressed by key. Writes are never overwrites in practice
/// because keys carry a fresh UUID prefix.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, key: &str, data: Bytes) -> Result<(), AppError>;

    /// Fetches the full object. A missing key is `AppError::NotFound`.
    async fn get(&self, key: &str) -> Result<Bytes, AppError>;
}

/// Document-style metadata collection keyed by record id.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn insert(&self, record: &FileRecord) -> Result<(), AppError>;

    /// Full scan; ordering is implementation-defined.
    async fn list_all(&self) -> Result<Vec<FileRecord>, AppError>;
}

/// Store handles built once at startup and shared across all requests.
/// Handlers depend on the traits, so tests can substitute in-memory fakes.
#[derive(Clone)]
pub struct AppContext {
    pub blobs: Arc<dyn BlobStore>,
    pub metadata: Arc<dyn MetadataStore>,
}
