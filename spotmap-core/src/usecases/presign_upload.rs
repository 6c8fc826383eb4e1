use time::Duration;

use super::prelude::*;
use crate::gateways::object_storage::ObjectStorageGateway;

pub const UPLOAD_URL_VALIDITY: Duration = Duration::hours(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUpload {
    pub url: String,
    pub key: String,
}

/// Issues a time-limited upload URL for a new storage key.
///
/// The key carries the original filename as suffix so it can later
/// be handed back as a photo reference.
pub async fn presign_upload<G>(
    storage: &G,
    filename: &str,
    content_type: &str,
    size: i64,
) -> Result<PresignedUpload>
where
    G: ObjectStorageGateway + ?Sized,
{
    if filename.trim().is_empty() {
        return Err(Error::FileName);
    }
    if content_type.trim().is_empty() {
        return Err(Error::ContentType);
    }
    if size <= 0 {
        return Err(Error::ContentLength);
    }
    let key = format!("{}-{}", Id::new(), filename);
    let url = storage
        .presign_upload(&key, content_type, size as u64, UPLOAD_URL_VALIDITY)
        .await
        .map_err(|err| Error::Repo(RepoError::Other(err)))?;
    Ok(PresignedUpload { url, key })
}
