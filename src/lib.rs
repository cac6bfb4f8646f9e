//! # cloud-upload
//!
//! Classify the files under a directory by extension and upload them to
//! Amazon S3 or Google Cloud Storage.
//!
//! ## Overview
//!
//! A [`scanner::DirectoryScanner`] walks a root directory recursively and
//! lists the files whose extension belongs to a category (images, media,
//! documents) or to an explicit extension list. An
//! [`cloud::UploadDispatcher`] turns such a listing into a batch of uploads
//! against one backend. Uploads run one file at a time and the first failure
//! stops the batch.
//!
//! ## Usage
//!
//! ### Listing files
//!
//! ```no_run
//! use cloud_upload::scanner::DirectoryScanner;
//!
//! # fn main() -> anyhow::Result<()> {
//! let scanner = DirectoryScanner::new("/data/phone-backup")?;
//!
//! for file in scanner.get_media(None) {
//!     println!("{}\t{}", file.name, file.path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Uploading documents
//!
//! ```no_run
//! use cloud_upload::cloud::{GcsTarget, UploadDispatcher};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let dispatcher = UploadDispatcher::new("/data/scans")?;
//! let target = GcsTarget::new("my-documents-bucket", "my-project", "/keys/sa.json");
//!
//! let report = dispatcher.upload_to_gcs(&target, &[]).await?;
//! println!("uploaded {} files", report.uploaded_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: File entries and upload reports
//! - [`scanner`]: Recursive, extension-filtered directory listing
//! - [`cloud`]: Upload backends (S3, GCS) and the batch dispatcher
//! - [`config`]: YAML configuration and environment variable expansion
//! - [`security`]: Credential scrubbing for logs and failure reasons
//! - [`errors`]: Typed scan and upload errors
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models shared by the scanner and the uploaders
pub mod models;

/// Recursive directory scanning and file categories
pub mod scanner;

/// Cloud storage integration (S3, GCS)
pub mod cloud;

/// Configuration management
pub mod config;

/// Typed errors for scanning and uploading
pub mod errors;

/// Application constants and configuration values
pub mod constants;

/// Credential protection for anything that ends up in logs
pub mod security;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
