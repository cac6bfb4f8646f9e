use std::collections::HashSet;
use std::fs;
use std::path::Path;

use walkdir::DirEntry;

/// Extension of a path: the text after the last `.` of its file name.
///
/// Returns `None` for extensionless names, dotfiles such as `.bashrc`, names
/// ending in a bare `.`, and names that are not valid UTF-8.
pub fn file_extension(path: &Path) -> Option<&str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
}

/// Check if a path's extension is a member of the given set (case-sensitive)
pub fn extension_matches(path: &Path, extensions: &HashSet<String>) -> bool {
    match file_extension(path) {
        Some(ext) => extensions.contains(ext),
        None => false,
    }
}

/// Check if a walk entry is a regular file.
///
/// Symlinks count when their target is a regular file; links to directories
/// and dangling links do not.
pub fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }

    if entry.path_is_symlink() {
        return fs::metadata(entry.path())
            .map(|metadata| metadata.is_file())
            .unwrap_or(false);
    }

    false
}
