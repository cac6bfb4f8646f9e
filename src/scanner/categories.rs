use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::{DOCUMENT_EXTENSIONS, IMAGE_EXTENSIONS, MEDIA_EXTENSIONS};

/// Named extension presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// jpg, png, svg, webp
    Images,
    /// mp3, mp4, mpeg4, wmv, 3gp, webm
    Media,
    /// doc, docx, csv, pdf
    Documents,
}

impl FileCategory {
    /// Default extensions for this category
    pub fn default_extensions(&self) -> &'static [&'static str] {
        match self {
            FileCategory::Images => IMAGE_EXTENSIONS,
            FileCategory::Media => MEDIA_EXTENSIONS,
            FileCategory::Documents => DOCUMENT_EXTENSIONS,
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileCategory::Images => write!(f, "images"),
            FileCategory::Media => write!(f, "media"),
            FileCategory::Documents => write!(f, "documents"),
        }
    }
}

impl FromStr for FileCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "images" => Ok(FileCategory::Images),
            "media" => Ok(FileCategory::Media),
            "documents" => Ok(FileCategory::Documents),
            other => Err(anyhow!("Unknown file category: {}", other)),
        }
    }
}

/// Parse a comma-separated extension list as given on the command line.
///
/// Blank items are dropped; no other normalization happens, matching is
/// case-sensitive and extensions are expected without a leading dot.
pub fn parse_extension_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_presets() {
        assert_eq!(FileCategory::Images.default_extensions(), &["jpg", "png", "svg", "webp"]);
        assert_eq!(
            FileCategory::Media.default_extensions(),
            &["mp3", "mp4", "mpeg4", "wmv", "3gp", "webm"]
        );
        assert_eq!(FileCategory::Documents.default_extensions(), &["doc", "docx", "csv", "pdf"]);
    }

    #[test]
    fn test_category_display_round_trip() {
        for category in [FileCategory::Images, FileCategory::Media, FileCategory::Documents] {
            let parsed: FileCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("videos".parse::<FileCategory>().is_err());
    }

    #[test]
    fn test_parse_extension_list() {
        assert_eq!(parse_extension_list("jpg,png"), vec!["jpg", "png"]);
        assert_eq!(parse_extension_list(" pdf , ,csv,"), vec!["pdf", "csv"]);
        assert_eq!(parse_extension_list("JPG"), vec!["JPG"]);
        assert!(parse_extension_list("").is_empty());
    }
}
