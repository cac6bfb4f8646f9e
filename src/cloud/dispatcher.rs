//! Batch upload of scanned files.
//!
//! The dispatcher picks the files for a batch (an explicit extension filter,
//! or the target's default categories), names each object, and uploads them
//! one at a time. The first failure stops the batch: later files are not
//! attempted, and the report records which file failed and why.

use std::path::Path;

use log::{debug, info, warn};

use crate::cloud::gcs::{GcsTarget, GcsUploader};
use crate::cloud::s3::{S3Target, S3Uploader};
use crate::cloud::uploader::ObjectUploader;
use crate::constants::OBJECT_KEY_SEPARATOR;
use crate::errors::{ScanError, UploadResult};
use crate::models::{FileEntry, UploadFailure, UploadReport, UploadedObject};
use crate::scanner::{DirectoryScanner, FileCategory};
use crate::security::scrub_credentials;

/// What to upload in one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {
    /// Extension filter; when empty, `default_categories` decide the files
    pub extensions: Vec<String>,

    /// Destination name override (see [`resolve_object_name`])
    pub object_name: Option<String>,

    pub default_categories: Vec<FileCategory>,
}

/// Destination name for a file of a batch holding `batch_len` files.
///
/// An override names the object verbatim only when the batch is a single
/// file. For larger batches it becomes a key prefix, so the files do not all
/// overwrite one object. An override that is empty once trailing separators
/// are trimmed is ignored.
pub fn resolve_object_name(object_name: Option<&str>, file_name: &str, batch_len: usize) -> String {
    let object_name = object_name.filter(|name| !name.trim_end_matches(OBJECT_KEY_SEPARATOR).is_empty());

    match object_name {
        Some(name) if batch_len == 1 => name.to_string(),
        Some(prefix) => format!(
            "{}{}{}",
            prefix.trim_end_matches(OBJECT_KEY_SEPARATOR),
            OBJECT_KEY_SEPARATOR,
            file_name
        ),
        None => file_name.to_string(),
    }
}

/// Scans a root directory and uploads the matching files.
#[derive(Debug, Clone)]
pub struct UploadDispatcher {
    scanner: DirectoryScanner,
}

impl UploadDispatcher {
    /// Create a dispatcher over `root`; fails like [`DirectoryScanner::new`]
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ScanError> {
        Ok(Self::from_scanner(DirectoryScanner::new(root)?))
    }

    pub fn from_scanner(scanner: DirectoryScanner) -> Self {
        UploadDispatcher { scanner }
    }

    pub fn scanner(&self) -> &DirectoryScanner {
        &self.scanner
    }

    /// Files a request selects, in upload order
    pub fn select_files(&self, request: &BatchRequest) -> Vec<FileEntry> {
        if request.extensions.is_empty() {
            self.scanner.list_categories(&request.default_categories)
        } else {
            self.scanner.list_by_extensions(&request.extensions)
        }
    }

    /// Upload the files selected by `request` through `uploader`.
    ///
    /// Files are uploaded sequentially. On the first error the failure is
    /// recorded and the batch stops.
    pub async fn upload_batch(&self, uploader: &dyn ObjectUploader, request: &BatchRequest) -> UploadReport {
        let destination = uploader.target_name();
        let files = self.select_files(request);
        let mut report = UploadReport::new(destination.clone());

        if files.is_empty() {
            info!("No matching files to upload to {}", destination);
            return report;
        }

        info!("Uploading {} files to {}", files.len(), destination);

        for entry in &files {
            let object_name = resolve_object_name(request.object_name.as_deref(), &entry.name, files.len());

            match uploader.upload_file(&entry.path, &object_name).await {
                Ok(()) => {
                    debug!("Uploaded {} to {}/{}", entry.path.display(), destination, object_name);
                    report.uploaded.push(UploadedObject {
                        file_name: entry.name.clone(),
                        object_name,
                    });
                }
                Err(e) => {
                    let reason = scrub_credentials(&e.to_string());
                    warn!(
                        "Failed to upload {} to {}/{}: {}",
                        entry.path.display(),
                        destination,
                        object_name,
                        reason
                    );
                    report.failures.push(UploadFailure {
                        file_name: entry.name.clone(),
                        path: entry.path.clone(),
                        object_name,
                        reason,
                    });
                    break;
                }
            }
        }

        if report.succeeded() {
            info!("Uploaded {} files to {}", report.uploaded_count(), destination);
        } else {
            warn!(
                "Upload to {} stopped after {} of {} files",
                destination,
                report.uploaded_count(),
                files.len()
            );
        }

        report
    }

    /// Upload to Amazon S3.
    ///
    /// Without an extension filter the target's default categories are used
    /// (images and media unless configured otherwise). A fresh client is
    /// built for every call; only client setup errors are returned as `Err`.
    pub async fn upload_to_s3(
        &self,
        target: &S3Target,
        object_name: Option<&str>,
        extensions: &[String],
    ) -> UploadResult<UploadReport> {
        let uploader = S3Uploader::new(target)?;
        let request = BatchRequest {
            extensions: extensions.to_vec(),
            object_name: object_name.map(String::from),
            default_categories: target.default_categories.clone(),
        };

        Ok(self.upload_batch(&uploader, &request).await)
    }

    /// Upload to Google Cloud Storage.
    ///
    /// Blobs are always named after the file. Without an extension filter
    /// the target's default categories are used (documents unless configured
    /// otherwise).
    pub async fn upload_to_gcs(&self, target: &GcsTarget, extensions: &[String]) -> UploadResult<UploadReport> {
        let uploader = GcsUploader::new(target)?;
        let request = BatchRequest {
            extensions: extensions.to_vec(),
            object_name: None,
            default_categories: target.default_categories.clone(),
        };

        Ok(self.upload_batch(&uploader, &request).await)
    }
}
