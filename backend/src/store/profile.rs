//! Farmer profile storage
//!
//! Owns the singleton profile: an in-memory copy guarded by a lock, a JSON
//! file it is persisted to, and a watch channel notifying subscribers of
//! every change.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use shared::{FarmerProfile, ProfileDraft};
use tokio::sync::{watch, RwLock};

use crate::error::{AppError, AppResult};

/// Handle to the profile store, cheap to clone
#[derive(Clone)]
pub struct ProfileStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: PathBuf,
    profile: RwLock<Option<FarmerProfile>>,
    tx: watch::Sender<Option<FarmerProfile>>,
}

impl ProfileStore {
    /// Open the store backed by the given JSON file.
    ///
    /// A missing file means no profile yet. Corrupt or unreadable files are
    /// treated as absent with a warning, never as a fatal error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let profile = load_profile(&path);
        let (tx, _) = watch::channel(profile.clone());

        Self {
            inner: Arc::new(StoreInner {
                path,
                profile: RwLock::new(profile),
                tx,
            }),
        }
    }

    /// Current profile, if one has been saved
    pub async fn get(&self) -> Option<FarmerProfile> {
        self.inner.profile.read().await.clone()
    }

    /// Save a submission, creating the profile or replacing it wholesale
    pub async fn set(&self, draft: ProfileDraft) -> AppResult<FarmerProfile> {
        let mut guard = self.inner.profile.write().await;

        let profile = match guard.as_ref() {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.apply(draft);
                updated
            }
            None => FarmerProfile::new(draft),
        };

        self.persist(Some(&profile)).await?;
        *guard = Some(profile.clone());
        self.inner.tx.send_replace(Some(profile.clone()));

        Ok(profile)
    }

    /// Remove the profile and its file
    pub async fn clear(&self) -> AppResult<()> {
        let mut guard = self.inner.profile.write().await;

        self.persist(None).await?;
        *guard = None;
        self.inner.tx.send_replace(None);

        Ok(())
    }

    /// Watch profile changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<Option<FarmerProfile>> {
        self.inner.tx.subscribe()
    }

    async fn persist(&self, profile: Option<&FarmerProfile>) -> AppResult<()> {
        match profile {
            Some(profile) => {
                let json = serde_json::to_string_pretty(profile)
                    .map_err(|e| AppError::StorageError(e.to_string()))?;

                if let Some(parent) = self.inner.path.parent() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|e| AppError::StorageError(e.to_string()))?;
                }

                // Write to a sibling temp file, then rename into place
                let tmp = self.inner.path.with_extension("json.tmp");
                tokio::fs::write(&tmp, json)
                    .await
                    .map_err(|e| AppError::StorageError(e.to_string()))?;
                tokio::fs::rename(&tmp, &self.inner.path)
                    .await
                    .map_err(|e| AppError::StorageError(e.to_string()))?;
            }
            None => match tokio::fs::remove_file(&self.inner.path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(AppError::StorageError(e.to_string())),
            },
        }

        Ok(())
    }
}

fn load_profile(path: &Path) -> Option<FarmerProfile> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("Could not read profile file {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::warn!("Ignoring corrupt profile file {}: {}", path.display(), e);
            None
        }
    }
}
