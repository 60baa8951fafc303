use anyhow::{Context, Result};
use forge_ledger::LedgerState;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Storage key of the panel session; the file is `<data-dir>/<key>.json`.
pub const SESSION_KEY: &str = "celestial-forge-data";

/// Durable CP balance and sheet for the panel front end.
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{SESSION_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the saved session. A missing or unreadable file is a fresh session.
    pub async fn load(&self) -> LedgerState {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return LedgerState::default()
            }
            Err(err) => {
                log::warn!("Failed to read saved data {}: {err}", self.path.display());
                return LedgerState::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(state) => state,
            Err(err) => {
                log::warn!("Failed to load saved data {}: {err}", self.path.display());
                LedgerState::default()
            }
        }
    }

    pub async fn save(&self, state: &LedgerState) -> Result<()> {
        let parent = self
            .path
            .parent()
            .context("session path has no parent")?;
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("create data dir {}", parent.display()))?;

        let bytes = serde_json::to_vec_pretty(state).context("serialize session")?;
        write_atomic(&self.path, &bytes).await
    }
}

pub(crate) async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().context("path has no parent")?;
    let tmp = parent.join(format!(
        ".{}.tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("forge"),
        std::process::id()
    ));

    {
        let mut file = fs::File::create(&tmp)
            .await
            .with_context(|| format!("create tmp {}", tmp.display()))?;
        file.write_all(bytes)
            .await
            .with_context(|| format!("write tmp {}", tmp.display()))?;
        file.sync_all()
            .await
            .with_context(|| format!("sync tmp {}", tmp.display()))?;
    }

    fs::rename(&tmp, path)
        .await
        .with_context(|| format!("rename tmp {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
