//! Global constants for the cloud-upload application.
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make configuration changes easier.

// Extension presets (lower-case, no leading dot)
/// Extensions treated as images
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "svg", "webp"];

/// Extensions treated as audio/video media
pub const MEDIA_EXTENSIONS: &[&str] = &["mp3", "mp4", "mpeg4", "wmv", "3gp", "webm"];

/// Extensions treated as documents
pub const DOCUMENT_EXTENSIONS: &[&str] = &["doc", "docx", "csv", "pdf"];

// Configuration
/// Default configuration file name used by `init-config`
pub const DEFAULT_CONFIG_FILE: &str = "cloud-upload.yaml";

/// Configuration format version written into new config files
pub const CONFIG_VERSION: &str = "1.0";

/// Root directory used when neither the config nor the CLI names one
pub const DEFAULT_ROOT_DIR: &str = ".";

// Cloud storage constants
/// AWS region used when none is configured
pub const DEFAULT_S3_REGION: &str = "us-east-1";

/// Server-side encryption algorithm requested by `--encrypt`
pub const S3_SSE_ALGORITHM: &str = "AES256";

/// Separator between a destination prefix and a file name
pub const OBJECT_KEY_SEPARATOR: char = '/';

// Error messages
pub const ERROR_MISSING_CREDENTIALS: &str = "Credentials file not found";
