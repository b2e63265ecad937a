//! JSON state documents kept as single S3 objects.

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;

/// Load a JSON state document. Returns the value and its ETag (empty when
/// S3 reports none).
pub async fn load_state<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<(T, String), StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let etag = resp.e_tag().unwrap_or_default().to_string();
    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes();

    Ok((serde_json::from_slice(&body)?, etag))
}

/// Replace a JSON state document. Returns the new ETag.
///
/// The body is byte-identical to what [`to_state_bytes`] produces for the
/// same value.
pub async fn save_state<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type("application/json")
        .body(ByteStream::from(to_state_bytes(value)?))
        .send()
        .await
        .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// Canonical on-disk / on-bucket encoding of a state value.
pub fn to_state_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec_pretty(value)?)
}
