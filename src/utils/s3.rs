use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::ConfigLoader;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use aws_types::region::Region;
use bytes::Bytes;

use crate::errors::AppError;
use crate::stores::BlobStore;

pub async fn create_s3_client(region: Option<String>) -> S3Client {
    let aws_config = ConfigLoader::default()
        .region(region.map(Region::new))
        .behavior_version(BehaviorVersion::latest())
        .load()
        .await;

    S3Client::new(&aws_config)
}

/// S3-backed blob store bound to a single bucket.
pub struct S3BlobStore {
    client: S3Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(client: S3Client, bucket: String) -> Self {
        S3BlobStore { client, bucket }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(&self, key: &str, data: Bytes) -> Result<(), AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|err| AppError::StoreUnavailable(format!("blob put failed: {}", err)))?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes, AppError> {
        let object = match self.client.get_object().bucket(&self.bucket).key(key).send().await {
            Ok(object) => object,
            Err(SdkError::ServiceError(err)) if err.err().is_no_such_key() => {
                return Err(AppError::NotFound(format!("no blob under key '{}'", key)));
            }
            Err(err) => {
                return Err(AppError::StoreUnavailable(format!("blob get failed: {}", err)));
            }
        };

        let body = object
            .body
            .collect()
            .await
            .map_err(|err| AppError::StoreUnavailable(format!("blob read failed: {}", err)))?;
        Ok(body.into_bytes())
    }
}
