//! Durable single-slot storage for the cached credential.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::CredentialRecord;
use crate::error::{RealmctlError, Result};

/// File-backed cache holding at most one credential record as JSON.
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached record, if any.
    ///
    /// An absent file is a normal cache miss. Content that exists but does
    /// not parse as a credential record is [`RealmctlError::Decode`], never
    /// a miss, so corruption stays visible instead of being papered over by
    /// a silent re-issue.
    pub async fn load(&self) -> Result<Option<CredentialRecord>> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No cached token");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let record = serde_json::from_slice(&content).map_err(|e| {
            RealmctlError::Decode(format!(
                "cached token at {} is not a credential record: {e}",
                self.path.display()
            ))
        })?;
        Ok(Some(record))
    }

    /// Replace the cache content with `record`.
    ///
    /// The record is written to a sibling temp file and renamed into place,
    /// so a crash mid-write cannot leave a torn slot behind.
    pub async fn store(&self, record: &CredentialRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec(record)
            .map_err(|e| RealmctlError::Serialization(format!("credential record: {e}")))?;

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &json).await?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o600)).await?;
        }
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), "Stored credential record");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "token".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
