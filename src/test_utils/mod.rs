//! Test utilities for cloud-upload
//!
//! Fixture trees and small helpers shared by the unit test modules.

#![cfg(test)]

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::models::FileEntry;

/// Files of the sample tree, relative to its root.
///
/// Images, media and documents are spread across three levels of
/// subdirectories, mixed with files the presets must ignore. The integration
/// tests keep a copy in `tests/common/mod.rs`; change both together.
pub const SAMPLE_FILES: &[&str] = &[
    "level0_movie.mp4",
    "level0_docu_1.doc",
    "level0_reciept.pdf",
    "level0_samp.jpg",
    "level0_notes.txt",
    "README",
    "A/level1_A_data.csv",
    "A/level1_A_photo.png",
    "A/level1_A_script.py",
    "A/A2/level2_A_profile_verification.wmv",
    "A/A2/level2_A_bill_pay.pdf",
    "A/A2/A3/level3_A_icon.svg",
    "B/level1_B_sun2_movie.3gp",
    "B/level1_B_kengan_ashura.mp3",
    "B/level1_B_reciept.docx",
    "B/level1_B_archive.zip",
    "B/B2/level2_B_ufc_contract.docx",
    "B/B2/level2_B_scan.JPG",
];

/// Creates the sample tree in a temporary directory
pub fn create_sample_tree() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    write_files(temp_dir.path(), SAMPLE_FILES)?;
    Ok(temp_dir)
}

/// Writes each relative path under `base`, creating parent directories
pub fn write_files(base: &Path, files: &[&str]) -> Result<()> {
    for relative in files {
        let path = base.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, format!("content of {}", relative))?;
    }
    Ok(())
}

/// Names of the entries, in listing order
pub fn names(entries: &[FileEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.name.clone()).collect()
}
