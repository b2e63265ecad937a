use std::path::{Path, PathBuf};

use aws_sdk_s3::Client as S3Client;
use certa_storage::error::StorageError;

use crate::error::AuditError;
use crate::trail::AuditTrail;

/// Remote copy of the trail.
pub struct S3Target {
    pub client: S3Client,
    pub bucket: String,
    pub key: String,
}

/// Trail persistence: local JSON file (always) plus an optional S3 copy.
pub struct TrailPersistence {
    pub local_path: PathBuf,
    pub s3: Option<S3Target>,
}

impl TrailPersistence {
    pub fn local(local_path: impl Into<PathBuf>) -> Self {
        Self {
            local_path: local_path.into(),
            s3: None,
        }
    }

    pub fn with_s3(mut self, client: S3Client, bucket: impl Into<String>, key: impl Into<String>) -> Self {
        self.s3 = Some(S3Target {
            client,
            bucket: bucket.into(),
            key: key.into(),
        });
        self
    }

    /// Write the trail to local disk first (atomic: tmp + rename), then
    /// upload to S3 if configured.
    ///
    /// Only a failed local write is an error. An S3 failure is reported as
    /// [`Mirror::Failed`] so the caller can retry it on the next flush.
    pub async fn flush(&self, trail: &AuditTrail) -> Result<Mirror, AuditError> {
        let json = certa_storage::state::to_state_bytes(trail)?;
        if let Some(parent) = self.local_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.local_path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json)?;
        std::fs::rename(&tmp_path, &self.local_path)?;

        tracing::debug!(
            path = %self.local_path.display(),
            records = trail.len(),
            "trail flushed to local disk"
        );

        let Some(s3) = &self.s3 else {
            return Ok(Mirror::Disabled);
        };
        match certa_storage::state::save_state(&s3.client, &s3.bucket, &s3.key, trail).await {
            Ok(_) => {
                tracing::debug!(bucket = %s3.bucket, key = %s3.key, "trail flushed to S3");
                Ok(Mirror::Synced)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to upload trail to S3 (local copy is safe)");
                Ok(Mirror::Failed)
            }
        }
    }

    /// Load the trail from both the local file and S3 (if configured) and
    /// union them by record id. Never fails; problems are logged.
    ///
    /// An unreadable local file is moved aside so the next flush does not
    /// overwrite it.
    pub async fn load(&self) -> LoadedTrail {
        let remote = match &self.s3 {
            Some(s3) => {
                match certa_storage::state::load_state::<AuditTrail>(&s3.client, &s3.bucket, &s3.key)
                    .await
                {
                    Ok((trail, _etag)) => {
                        tracing::debug!(
                            bucket = %s3.bucket,
                            key = %s3.key,
                            records = trail.len(),
                            "trail loaded from S3"
                        );
                        Some(trail)
                    }
                    Err(StorageError::NotFound { .. }) => {
                        tracing::debug!("no trail in S3 yet");
                        Some(AuditTrail::new())
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to load trail from S3, using local only");
                        None
                    }
                }
            }
            None => None,
        };

        let local = match read_local(&self.local_path) {
            Ok(Some(trail)) => {
                tracing::debug!(
                    path = %self.local_path.display(),
                    records = trail.len(),
                    "trail loaded from local disk"
                );
                Some(trail)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(
                    path = %self.local_path.display(),
                    error = %e,
                    "trail file unreadable"
                );
                quarantine(&self.local_path);
                None
            }
        };

        let loaded = reconcile(local, remote);
        if loaded.local_stale || loaded.remote_stale {
            tracing::warn!(
                records = loaded.trail.len(),
                local_stale = loaded.local_stale,
                remote_stale = loaded.remote_stale,
                "local and S3 trails differ, next flush rewrites both"
            );
        }
        loaded
    }
}

/// Outcome of the S3 half of a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    /// No S3 target configured.
    Disabled,
    Synced,
    /// Upload failed; S3 is behind the local file.
    Failed,
}

/// A loaded trail and which copies lack some of its records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedTrail {
    pub trail: AuditTrail,
    pub local_stale: bool,
    pub remote_stale: bool,
}

/// Union the local and remote copies by record id, newest first.
///
/// `None` means the copy is absent or could not be read. An unreadable
/// remote is never marked stale, so a flush cannot be triggered just to
/// overwrite records this process never saw.
pub fn reconcile(local: Option<AuditTrail>, remote: Option<AuditTrail>) -> LoadedTrail {
    match (local, remote) {
        (None, None) => LoadedTrail::default(),
        (Some(trail), None) => LoadedTrail {
            trail,
            local_stale: false,
            remote_stale: false,
        },
        (None, Some(trail)) => LoadedTrail {
            local_stale: !trail.is_empty(),
            remote_stale: false,
            trail,
        },
        (Some(mut trail), Some(remote)) => {
            let remote_len = remote.len();
            let added = trail.absorb(remote);
            LoadedTrail {
                local_stale: added > 0,
                remote_stale: trail.len() > remote_len,
                trail,
            }
        }
    }
}

fn read_local(path: &Path) -> Result<Option<AuditTrail>, AuditError> {
    if !path.exists() {
        return Ok(None);
    }
    let json = std::fs::read(path)?;
    Ok(Some(serde_json::from_slice(&json)?))
}

fn quarantine(path: &Path) {
    let stamp = jiff::Timestamp::now().as_second();
    let aside = path.with_extension(format!("json.corrupt-{stamp}"));
    match std::fs::rename(path, &aside) {
        Ok(()) => tracing::warn!(path = %aside.display(), "moved unreadable trail aside"),
        Err(e) => tracing::warn!(error = %e, "failed to move unreadable trail aside"),
    }
}
