use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Metadata record linking a user-visible filename and description to the
/// storage key of its blob.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct FileRecord {
    pub id: Uuid,
    pub filename: String,
    pub blob_name: String,
    pub description: String,
    pub uploaded_at: DateTime<Utc>,
}

impl FileRecord {
    /// Builds a new record with a fresh id and the derived storage key
    /// `{id}_{filename}`. The filename is untrusted client input and is
    /// embedded verbatim as opaque data, never interpreted as a path.
    pub fn new(filename: &str, description: &str) -> Self {
        let id = Uuid::new_v4();
        FileRecord {
            id,
            filename: filename.to_string(),
            blob_name: format!("{}_{}", id, filename),
            description: description.to_string(),
            uploaded_at: Utc::now(),
        }
    }
}

/// Recovers the original filename from a storage key, i.e. everything after
/// the first `_`. A key without the separator is malformed.
pub fn original_filename(blob_name: &str) -> Result<&str, AppError> {
    blob_name
        .split_once('_')
        .map(|(_, name)| name)
        .ok_or_else(|| {
            AppError::MalformedInput(format!("storage key '{}' has no '_' separator", blob_name))
        })
}
