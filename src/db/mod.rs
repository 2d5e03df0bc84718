use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::file::FileRecord;
use crate::stores::MetadataStore;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Creates the files table if absent. Runs once at startup, never per
/// request.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS files (
            id UUID PRIMARY KEY,
            filename TEXT NOT NULL,
            blob_name TEXT NOT NULL,
            description TEXT NOT NULL,
            uploaded_at TIMESTAMPTZ NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Postgres-backed metadata store over the shared connection pool.
pub struct PgMetadataStore {
    pool: PgPool,
}

impl PgMetadataStore {
    pub fn new(pool: PgPool) -> Self {
        PgMetadataStore { pool }
    }
}

#[async_trait]
impl MetadataStore for PgMetadataStore {
    async fn insert(&self, record: &FileRecord) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO files (id, filename, blob_name, description, uploaded_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(record.id)
        .bind(&record.filename)
        .bind(&record.blob_name)
        .bind(&record.description)
        .bind(record.uploaded_at)
        .execute(&self.pool)
        .await
        .map_err(|err| AppError::StoreUnavailable(format!("metadata insert failed: {}", err)))?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<FileRecord>, AppError> {
        sqlx::query_as::<_, FileRecord>(
            "SELECT id, filename, blob_name, description, uploaded_at FROM files",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| AppError::StoreUnavailable(format!("metadata scan failed: {}", err)))
    }
}
