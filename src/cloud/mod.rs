//! Cloud storage integration for batch uploads.
//!
//! ## Supported Providers
//!
//! - **Amazon S3**: one `PutObject` per file, with pass-through storage
//!   class, ACL, content type, encryption and metadata
//! - **Google Cloud Storage**: one blob per file, authenticated with a
//!   service-account key file
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │ DirectoryScanner │────▶│ UploadDispatcher │
//! └──────────────────┘     └────────┬─────────┘
//!                                   │ ObjectUploader
//!                     ┌─────────────┴─────────────┐
//!                     │                           │
//!               ┌─────▼──────┐            ┌───────▼──────┐
//!               │ S3Uploader │            │ GcsUploader  │
//!               └─────┬──────┘            └───────┬──────┘
//!                     │                           │
//!               ┌─────▼──────┐            ┌───────▼──────┐
//!               │ S3 Bucket  │            │ GCS Bucket   │
//!               └────────────┘            └──────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use cloud_upload::cloud::dispatcher::UploadDispatcher;
//! use cloud_upload::cloud::s3::S3Target;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let dispatcher = UploadDispatcher::new("/data/phone-backup")?;
//! let target = S3Target::new("my-media-bucket");
//!
//! // Images and media, named after each file
//! let report = dispatcher.upload_to_s3(&target, None, &[]).await?;
//! if !report.succeeded() {
//!     eprintln!("upload stopped: {:?}", report.failures);
//! }
//! # Ok(())
//! # }
//! ```

/// S3 client construction
pub mod client;

/// Batch selection, naming and the sequential upload loop
pub mod dispatcher;

/// Google Cloud Storage backend
pub mod gcs;

/// Amazon S3 backend
pub mod s3;

/// Common trait for single-file upload backends
pub mod uploader;

pub use dispatcher::{resolve_object_name, BatchRequest, UploadDispatcher};
pub use gcs::{GcsTarget, GcsUploader};
pub use s3::{S3Target, S3UploadOptions, S3Uploader};
pub use uploader::ObjectUploader;
