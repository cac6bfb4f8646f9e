use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::errors::ScanError;
use crate::models::FileEntry;
use crate::scanner::categories::FileCategory;
use crate::scanner::helpers::{extension_matches, is_regular_file};

/// Recursive, extension-filtered directory scanner.
///
/// The root is validated once, in [`DirectoryScanner::new`]. Every listing
/// call walks the tree again, so results always reflect the filesystem at the
/// time of the call.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    root: PathBuf,
    sort_entries: bool,
}

impl DirectoryScanner {
    /// Create a scanner over `root`.
    ///
    /// # Errors
    ///
    /// [`ScanError::InvalidDirectory`] when `root` does not exist or is not a
    /// directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ScanError> {
        let root = root.as_ref();

        if !root.exists() || !root.is_dir() {
            return Err(ScanError::InvalidDirectory {
                path: root.to_path_buf(),
            });
        }

        Ok(DirectoryScanner {
            root: root.to_path_buf(),
            sort_entries: false,
        })
    }

    /// Sort siblings by file name during the walk, making listings deterministic.
    pub fn with_sorted_entries(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every file under the root whose extension is in `extensions`.
    ///
    /// Matching is case-sensitive against the text after the last `.`;
    /// extensionless files never match. Entries come back in walk order
    /// (pre-order) and are not deduplicated by name.
    pub fn list_by_extensions<I, S>(&self, extensions: I) -> Vec<FileEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions: HashSet<String> = extensions
            .into_iter()
            .map(|ext| ext.as_ref().to_string())
            .collect();

        let mut files = Vec::new();
        if extensions.is_empty() {
            return files;
        }

        let mut walker = WalkDir::new(&self.root).min_depth(1).follow_links(false);
        if self.sort_entries {
            walker = walker.sort_by(|a, b| a.file_name().cmp(b.file_name()));
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };

            if !is_regular_file(&entry) || !extension_matches(entry.path(), &extensions) {
                continue;
            }

            let resolved = match fs::canonicalize(entry.path()) {
                Ok(path) => path,
                Err(e) => {
                    warn!("Failed to resolve {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            debug!("Matched file: {}", resolved.display());
            files.push(FileEntry::new(name, resolved));
        }

        debug!(
            "Found {} files under {} matching {} extensions",
            files.len(),
            self.root.display(),
            extensions.len()
        );

        files
    }

    /// List the files of a category, optionally replacing its extension preset
    pub fn list_category(&self, category: FileCategory, extensions: Option<&[&str]>) -> Vec<FileEntry> {
        let extensions = extensions.unwrap_or_else(|| category.default_extensions());
        self.list_by_extensions(extensions)
    }

    /// Image files (jpg, png, svg, webp unless overridden)
    pub fn get_images(&self, extensions: Option<&[&str]>) -> Vec<FileEntry> {
        self.list_category(FileCategory::Images, extensions)
    }

    /// Media files (mp3, mp4, mpeg4, wmv, 3gp, webm unless overridden)
    pub fn get_media(&self, extensions: Option<&[&str]>) -> Vec<FileEntry> {
        self.list_category(FileCategory::Media, extensions)
    }

    /// Document files (doc, docx, csv, pdf unless overridden)
    pub fn get_documents(&self, extensions: Option<&[&str]>) -> Vec<FileEntry> {
        self.list_category(FileCategory::Documents, extensions)
    }

    /// Concatenate the listings of several categories, in the given order
    pub fn list_categories(&self, categories: &[FileCategory]) -> Vec<FileEntry> {
        categories
            .iter()
            .flat_map(|category| self.list_category(*category, None))
            .collect()
    }
}
