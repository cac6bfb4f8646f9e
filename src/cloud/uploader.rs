use std::path::Path;

use async_trait::async_trait;

use crate::errors::{UploadError, UploadResult};

/// A storage destination that can receive one local file at a time.
///
/// This trait abstracts over the S3 and GCS backends so the batch loop in
/// [`crate::cloud::dispatcher`] is written once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectUploader: Send + Sync {
    /// Human readable destination (e.g. `s3://bucket`), for logs and reports
    fn target_name(&self) -> String;

    /// Upload the file at `local_path` under `object_name`
    async fn upload_file(&self, local_path: &Path, object_name: &str) -> UploadResult<()>;
}

/// Read a whole local file for a single-request upload
pub(crate) async fn read_local_file(path: &Path) -> UploadResult<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|source| UploadError::Io {
        path: path.display().to_string(),
        source,
    })
}
