use std::sync::{Arc, Mutex, PoisonError};

use kinetic_api::service::EntityApi;
use kinetic_core::entity::Entity;
use kinetic_core::image::ImageFile;
use kinetic_core::storage_keys;
use kinetic_storage::store::ObjectStore;

use crate::error::SyncError;

/// A stored image that could not be deleted.
#[derive(Debug, Clone)]
pub struct CleanupFailure {
    pub bucket: String,
    pub key: String,
    pub error: String,
    pub at: jiff::Timestamp,
}

/// A replacement image that could not be uploaded. The entity was saved
/// with its previous image URL.
#[derive(Debug, Clone)]
pub struct UploadFailure {
    pub bucket: String,
    pub file_name: String,
    pub error: String,
    pub at: jiff::Timestamp,
}

/// Non-fatal storage failures collected by a workflow.
#[derive(Debug, Clone)]
pub struct FailureLog<T> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for FailureLog<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> FailureLog<T> {
    pub fn entries(&self) -> Vec<T> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, failure: T) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(failure);
    }

    fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Images whose deletion failed and can be retried later.
pub type CleanupLog = FailureLog<CleanupFailure>;

/// Replacement images that were not uploaded.
pub type UploadLog = FailureLog<UploadFailure>;

/// Create/update/delete orchestration for one entity type.
///
/// Every operation pairs the REST call with its object-storage side effect:
///
/// - **create** uploads the image first; no upload, no entity.
/// - **update** keeps the original image URL unless the image was replaced,
///   in which case the old object is deleted and the new file uploaded
///   before the API call. If that upload fails the entity is still updated
///   with the original URL and the failure lands in the [`UploadLog`].
/// - **delete** removes the stored image, then the entity. Entities that
///   were never saved are left alone.
///
/// Image deletes are awaited but best-effort: a failure is logged and kept
/// in the [`CleanupLog`] instead of failing the operation.
pub struct SyncWorkflow<E: Entity> {
    api: Arc<dyn EntityApi<E>>,
    storage: Arc<dyn ObjectStore>,
    cleanup: CleanupLog,
    uploads: UploadLog,
}

impl<E: Entity> SyncWorkflow<E> {
    pub fn new(api: Arc<dyn EntityApi<E>>, storage: Arc<dyn ObjectStore>) -> Self {
        Self {
            api,
            storage,
            cleanup: CleanupLog::default(),
            uploads: UploadLog::default(),
        }
    }

    pub fn storage(&self) -> &dyn ObjectStore {
        self.storage.as_ref()
    }

    pub fn cleanup_log(&self) -> &CleanupLog {
        &self.cleanup
    }

    pub fn upload_log(&self) -> &UploadLog {
        &self.uploads
    }

    /// Upload the image, then create the entity with the resulting URL.
    pub async fn create(&self, mut draft: E, image: Option<&ImageFile>) -> Result<E, SyncError> {
        let image = image.ok_or(SyncError::MissingImage)?;

        let url = self
            .storage
            .upload(E::BUCKET, image)
            .await
            .map_err(SyncError::Upload)?;
        draft.set_image_url(url);

        let created = self.api.create(&draft).await?;
        tracing::info!(
            kind = E::KIND,
            id = created.id().unwrap_or_default(),
            "created"
        );
        Ok(created)
    }

    /// Update a saved entity. `replaced` is true when the user picked a new
    /// image rather than keeping the stored one.
    pub async fn update(
        &self,
        mut draft: E,
        image: Option<&ImageFile>,
        original_url: &str,
        replaced: bool,
    ) -> Result<E, SyncError> {
        let image = image.ok_or(SyncError::MissingImage)?;
        let id = draft
            .id()
            .map(str::to_owned)
            .ok_or(SyncError::NotPersisted { kind: E::KIND })?;

        draft.set_image_url(original_url.to_string());
        if replaced {
            self.remove_image(original_url).await;
            match self.storage.upload(E::BUCKET, image).await {
                Ok(url) => draft.set_image_url(url),
                Err(e) => {
                    tracing::warn!(
                        bucket = E::BUCKET,
                        file = %image.name,
                        error = %e,
                        "replacement upload failed; keeping the original image URL"
                    );
                    self.uploads.record(UploadFailure {
                        bucket: E::BUCKET.to_string(),
                        file_name: image.name.clone(),
                        error: e.to_string(),
                        at: jiff::Timestamp::now(),
                    });
                }
            }
        }

        let updated = self.api.update(&draft).await?;
        match updated.id() {
            Some(actual) if actual == id => {}
            other => {
                return Err(SyncError::IdChanged {
                    kind: E::KIND,
                    expected: id,
                    actual: other.unwrap_or("<none>").to_string(),
                });
            }
        }
        tracing::info!(kind = E::KIND, id = %id, replaced, "updated");
        Ok(updated)
    }

    /// Delete a saved entity and its image. Returns `Ok(false)` without any
    /// call if the entity was never saved.
    pub async fn delete(&self, entity: &E) -> Result<bool, SyncError> {
        let Some(id) = entity.id() else {
            tracing::debug!(kind = E::KIND, "entity was never saved; nothing to delete");
            return Ok(false);
        };

        self.remove_image(entity.image_url()).await;
        self.api.delete(id).await?;
        tracing::info!(kind = E::KIND, id, "deleted");
        Ok(true)
    }

    /// Retry every failed image delete. Returns how many still fail.
    pub async fn retry_cleanup(&self) -> usize {
        for failure in self.cleanup.take() {
            if let Err(e) = self.storage.delete(&failure.bucket, &failure.key).await {
                self.cleanup.record(CleanupFailure {
                    error: e.to_string(),
                    at: jiff::Timestamp::now(),
                    ..failure
                });
            }
        }
        self.cleanup.len()
    }

    async fn remove_image(&self, url: &str) {
        let Some(key) = storage_keys::key_from_url(E::BUCKET, url) else {
            tracing::warn!(bucket = E::BUCKET, url, "image URL has no object key; skipping delete");
            return;
        };

        if let Err(e) = self.storage.delete(E::BUCKET, key).await {
            tracing::warn!(bucket = E::BUCKET, key, error = %e, "image delete failed");
            self.cleanup.record(CleanupFailure {
                bucket: E::BUCKET.to_string(),
                key: key.to_string(),
                error: e.to_string(),
                at: jiff::Timestamp::now(),
            });
        }
    }
}
