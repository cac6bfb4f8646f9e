use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A file found by the scanner: its base name and fully resolved path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// A file that was uploaded, with the object name it was stored under.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    pub file_name: String,
    pub object_name: String,
}

/// A file whose upload failed and why.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub file_name: String,
    pub path: PathBuf,
    pub object_name: String,
    pub reason: String,
}

/// Outcome of one batch upload.
///
/// A batch stops at its first failure, so `failures` holds at most one entry
/// today; it is a list so callers do not need to change if that policy does.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub destination: String,
    pub uploaded: Vec<UploadedObject>,
    pub failures: Vec<UploadFailure>,
}

impl UploadReport {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Default::default()
        }
    }

    /// True when every file in the batch was uploaded.
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn uploaded_count(&self) -> usize {
        self.uploaded.len()
    }
}

impl From<&UploadReport> for bool {
    fn from(report: &UploadReport) -> Self {
        report.succeeded()
    }
}
