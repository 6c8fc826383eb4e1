use async_trait::async_trait;
use time::Duration;

/// Issues time-limited, pre-authorized write URLs so that clients
/// upload payloads directly to object storage.
#[async_trait]
pub trait ObjectStorageGateway {
    async fn presign_upload(
        &self,
        key: &str,
        content_type: &str,
        content_length: u64,
        expires_in: Duration,
    ) -> anyhow::Result<String>;
}
