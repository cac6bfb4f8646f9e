use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use log::debug;
use rusoto_core::{ByteStream, RusotoError};
use rusoto_s3::{PutObjectRequest, S3Client, S3};
use serde::{Deserialize, Serialize};

use crate::cloud::client::create_s3_client;
use crate::cloud::uploader::{read_local_file, ObjectUploader};
use crate::constants::S3_SSE_ALGORITHM;
use crate::errors::{UploadError, UploadResult};
use crate::scanner::FileCategory;

/// Extra per-object arguments passed through to `PutObject` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3UploadOptions {
    /// Storage class, e.g. `STANDARD_IA` or `GLACIER`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,

    /// Canned ACL, e.g. `private` or `public-read`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Server-side encryption algorithm, e.g. `AES256`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_side_encryption: Option<String>,

    /// User metadata stored with every object
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl S3UploadOptions {
    /// Request SSE-S3 encryption
    pub fn with_encryption(mut self) -> Self {
        self.server_side_encryption = Some(S3_SSE_ALGORITHM.to_string());
        self
    }
}

fn default_s3_categories() -> Vec<FileCategory> {
    vec![FileCategory::Images, FileCategory::Media]
}

/// Where and how to upload to Amazon S3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Target {
    pub bucket: String,

    /// AWS region; the rusoto default region when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Named profile from the shared credentials file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default)]
    pub options: S3UploadOptions,

    /// Categories uploaded when no extension filter is given
    #[serde(default = "default_s3_categories")]
    pub default_categories: Vec<FileCategory>,
}

impl S3Target {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: None,
            profile: None,
            options: S3UploadOptions::default(),
            default_categories: default_s3_categories(),
        }
    }
}

/// Uploads single files to one S3 bucket with `PutObject`.
pub struct S3Uploader {
    client: S3Client,
    bucket: String,
    options: S3UploadOptions,
}

impl S3Uploader {
    /// Build an uploader with a fresh client for `target`
    pub fn new(target: &S3Target) -> UploadResult<Self> {
        let client = create_s3_client(target.region.as_deref(), target.profile.as_deref())?;
        Ok(Self::with_client(client, target))
    }

    pub fn with_client(client: S3Client, target: &S3Target) -> Self {
        S3Uploader {
            client,
            bucket: target.bucket.clone(),
            options: target.options.clone(),
        }
    }

    /// Build the `PutObject` request for one object
    pub(crate) fn put_request(&self, key: &str, contents: Vec<u8>) -> PutObjectRequest {
        let metadata = if self.options.metadata.is_empty() {
            None
        } else {
            Some(self.options.metadata.clone())
        };

        PutObjectRequest {
            bucket: self.bucket.clone(),
            key: key.to_string(),
            content_length: Some(contents.len() as i64),
            body: Some(ByteStream::from(contents)),
            storage_class: self.options.storage_class.clone(),
            acl: self.options.acl.clone(),
            content_type: self.options.content_type.clone(),
            server_side_encryption: self.options.server_side_encryption.clone(),
            metadata,
            ..Default::default()
        }
    }
}

/// Map a rusoto error onto the backend-neutral error kinds
fn classify_error<E: std::error::Error + 'static>(error: RusotoError<E>) -> UploadError {
    match error {
        RusotoError::Credentials(e) => UploadError::Credentials(e.to_string()),
        other => UploadError::Transport(other.to_string()),
    }
}

#[async_trait]
impl ObjectUploader for S3Uploader {
    fn target_name(&self) -> String {
        format!("s3://{}", self.bucket)
    }

    async fn upload_file(&self, local_path: &Path, object_name: &str) -> UploadResult<()> {
        let contents = read_local_file(local_path).await?;
        let size = contents.len();

        debug!(
            "Uploading {} ({} bytes) to s3://{}/{}",
            local_path.display(),
            size,
            self.bucket,
            object_name
        );

        self.client
            .put_object(self.put_request(object_name, contents))
            .await
            .map_err(classify_error)?;

        Ok(())
    }
}
