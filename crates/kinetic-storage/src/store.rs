use std::future::Future;
use std::pin::Pin;

use aws_sdk_s3::Client;
use kinetic_core::image::ImageFile;
use kinetic_core::storage_keys;

use crate::error::StorageError;
use crate::objects;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Image storage as the sync workflow sees it.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ObjectStore: Send + Sync {
    /// Upload `file` under a fresh key and return its public URL.
    fn upload<'a>(
        &'a self,
        bucket: &'a str,
        file: &'a ImageFile,
    ) -> BoxFuture<'a, Result<String, StorageError>>;

    /// Delete the object at `key`.
    fn delete<'a>(&'a self, bucket: &'a str, key: &'a str)
    -> BoxFuture<'a, Result<(), StorageError>>;

    /// Download the object a stored public URL points at, as a file value.
    fn download<'a>(
        &'a self,
        bucket: &'a str,
        url: &'a str,
    ) -> BoxFuture<'a, Result<ImageFile, StorageError>>;
}

/// [`ObjectStore`] backed by an S3-compatible endpoint.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    public_base_url: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, public_base_url: impl Into<String>) -> Self {
        Self {
            client,
            public_base_url: public_base_url.into(),
        }
    }

    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }
}

impl ObjectStore for S3ObjectStore {
    fn upload<'a>(
        &'a self,
        bucket: &'a str,
        file: &'a ImageFile,
    ) -> BoxFuture<'a, Result<String, StorageError>> {
        Box::pin(async move {
            let key = storage_keys::new_object_key();
            objects::put_object(
                &self.client,
                bucket,
                &key,
                file.bytes.clone(),
                &file.content_type,
            )
            .await?;

            tracing::info!(bucket, key = %key, size = file.bytes.len(), "image uploaded");
            Ok(storage_keys::public_url(&self.public_base_url, bucket, &key))
        })
    }

    fn delete<'a>(
        &'a self,
        bucket: &'a str,
        key: &'a str,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            objects::delete_object(&self.client, bucket, key).await?;
            tracing::info!(bucket, key, "image deleted");
            Ok(())
        })
    }

    fn download<'a>(
        &'a self,
        bucket: &'a str,
        url: &'a str,
    ) -> BoxFuture<'a, Result<ImageFile, StorageError>> {
        Box::pin(async move {
            let key = storage_keys::key_from_url(bucket, url).ok_or_else(|| {
                StorageError::InvalidUrl {
                    bucket: bucket.to_string(),
                    url: url.to_string(),
                }
            })?;
            let output = objects::get_object(&self.client, bucket, key).await?;
            let content_type = output.content_type.unwrap_or_else(|| {
                mime_guess::from_path(key)
                    .first_or(mime_guess::mime::IMAGE_JPEG)
                    .essence_str()
                    .to_string()
            });
            Ok(ImageFile::new(key, content_type, output.body))
        })
    }
}
