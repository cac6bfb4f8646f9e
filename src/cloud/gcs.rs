use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, info};
use object_store::gcp::{GoogleCloudStorage, GoogleCloudStorageBuilder};
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStoreExt, PutPayload};
use serde::{Deserialize, Serialize};

use crate::cloud::uploader::{read_local_file, ObjectUploader};
use crate::constants::ERROR_MISSING_CREDENTIALS;
use crate::errors::{UploadError, UploadResult};
use crate::scanner::FileCategory;
use crate::security::{safe_error_message, scrub_path};

fn default_gcs_categories() -> Vec<FileCategory> {
    vec![FileCategory::Documents]
}

/// Where to upload to Google Cloud Storage.
///
/// Credentials are always a service-account JSON key file; no other
/// acquisition path is supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcsTarget {
    pub bucket: String,

    /// Project the bucket belongs to
    pub project: String,

    /// Path to the service-account key file
    pub credentials_path: PathBuf,

    /// Categories uploaded when no extension filter is given
    #[serde(default = "default_gcs_categories")]
    pub default_categories: Vec<FileCategory>,
}

impl GcsTarget {
    pub fn new(
        bucket: impl Into<String>,
        project: impl Into<String>,
        credentials_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            project: project.into(),
            credentials_path: credentials_path.into(),
            default_categories: default_gcs_categories(),
        }
    }
}

/// Uploads single files as blobs of one GCS bucket.
pub struct GcsUploader {
    store: GoogleCloudStorage,
    bucket: String,
}

impl GcsUploader {
    /// Authenticate with the target's key file and bind to its bucket
    pub fn new(target: &GcsTarget) -> UploadResult<Self> {
        let credentials_path = target.credentials_path.to_string_lossy().to_string();

        if !target.credentials_path.is_file() {
            return Err(UploadError::Credentials(format!(
                "{}: {}",
                ERROR_MISSING_CREDENTIALS,
                scrub_path(&credentials_path)
            )));
        }

        info!(
            "Connecting to gs://{} in project {} using {}",
            target.bucket,
            target.project,
            scrub_path(&credentials_path)
        );

        let store = GoogleCloudStorageBuilder::new()
            .with_bucket_name(target.bucket.clone())
            .with_service_account_path(credentials_path)
            .build()
            .map_err(|e| UploadError::Client(safe_error_message(&format!("gs://{}", target.bucket), &e)))?;

        Ok(GcsUploader {
            store,
            bucket: target.bucket.clone(),
        })
    }
}

#[async_trait]
impl ObjectUploader for GcsUploader {
    fn target_name(&self) -> String {
        format!("gs://{}", self.bucket)
    }

    async fn upload_file(&self, local_path: &Path, object_name: &str) -> UploadResult<()> {
        let contents = read_local_file(local_path).await?;
        let size = contents.len();
        let location = ObjectPath::from(object_name);

        debug!(
            "Uploading {} ({} bytes) to gs://{}/{}",
            local_path.display(),
            size,
            self.bucket,
            location
        );

        self.store
            .put(&location, PutPayload::from(Bytes::from(contents)))
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        Ok(())
    }
}
