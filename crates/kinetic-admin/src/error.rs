use kinetic_api::ApiError;
use kinetic_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("no image file selected")]
    MissingImage,

    #[error("{kind} has no identifier; it was never saved")]
    NotPersisted { kind: &'static str },

    #[error("image upload failed: {0}")]
    Upload(#[source] StorageError),

    #[error("API call failed: {0}")]
    Api(#[from] ApiError),

    #[error("server answered the update of {kind} {expected} with id {actual}")]
    IdChanged {
        kind: &'static str,
        expected: String,
        actual: String,
    },
}
