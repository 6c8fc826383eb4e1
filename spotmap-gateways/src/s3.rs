use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use time::Duration;

use spotmap_core::gateways::object_storage::ObjectStorageGateway;

/// Pre-signs uploads against an S3 (or S3-compatible) bucket.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Storage {
    /// Reads credentials and region from the usual AWS environment.
    ///
    /// An explicit endpoint switches to path-style addressing for
    /// S3-compatible services like MinIO.
    pub async fn from_env(bucket: impl Into<String>, endpoint: Option<&str>) -> Self {
        let config = aws_config::load_from_env().await;
        let client = match endpoint {
            Some(url) => {
                let s3_config = aws_sdk_s3::config::Builder::from(&config)
                    .endpoint_url(url)
                    .force_path_style(true)
                    .build();
                aws_sdk_s3::Client::from_conf(s3_config)
            }
            None => aws_sdk_s3::Client::new(&config),
        };
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStorageGateway for S3Storage {
    async fn presign_upload(
        &self,
        key: &str,
        content_type: &str,
        content_length: u64,
        expires_in: Duration,
    ) -> anyhow::Result<String> {
        let expires_in = std::time::Duration::try_from(expires_in)?;
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .content_length(i64::try_from(content_length)?)
            .presigned(PresigningConfig::expires_in(expires_in)?)
            .await?;
        Ok(request.uri().to_string())
    }
}
