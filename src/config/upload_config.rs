use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cloud::gcs::GcsTarget;
use crate::cloud::s3::S3Target;
use crate::config::env_vars::expand_env_vars;
use crate::constants::{CONFIG_VERSION, DEFAULT_ROOT_DIR, DEFAULT_S3_REGION};

/// Upload configuration, usually read from YAML.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub version: String,

    #[serde(default)]
    pub description: String,

    /// Directory to scan; `$VAR`, `${VAR}` and `%VAR%` are expanded
    pub root: String,

    /// Sort directory entries by name while scanning
    #[serde(default)]
    pub sort_entries: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3Target>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcs: Option<GcsTarget>,
}

impl Default for UploadConfig {
    /// Scan the current directory; no upload targets
    fn default() -> Self {
        UploadConfig {
            version: CONFIG_VERSION.to_string(),
            description: String::new(),
            root: DEFAULT_ROOT_DIR.to_string(),
            sort_entries: false,
            s3: None,
            gcs: None,
        }
    }
}

impl UploadConfig {
    /// Example configuration written by `init-config`, with placeholder
    /// targets meant to be edited before use
    pub fn template() -> Self {
        let mut s3 = S3Target::new("my-media-bucket");
        s3.region = Some(DEFAULT_S3_REGION.to_string());

        let gcs = GcsTarget::new(
            "my-documents-bucket",
            "my-project",
            "${HOME}/.config/gcloud/service-account.json",
        );

        UploadConfig {
            version: CONFIG_VERSION.to_string(),
            description: "Upload images and media to S3, documents to Google Cloud Storage".to_string(),
            root: DEFAULT_ROOT_DIR.to_string(),
            sort_entries: false,
            s3: Some(s3),
            gcs: Some(gcs),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: UploadConfig = serde_yaml::from_str(&content)
            .context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize config to YAML")?;

        fs::write(path, yaml)
            .context(format!("Failed to write config to {}", path.display()))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Expand environment variables in the root and credentials paths
    pub fn process_environment_variables(&mut self) -> Result<()> {
        self.root = expand_env_vars(&self.root);

        if let Some(gcs) = self.gcs.as_mut() {
            let raw = gcs.credentials_path.to_string_lossy().to_string();
            gcs.credentials_path = PathBuf::from(expand_env_vars(&raw));
        }

        Ok(())
    }

    /// Create a default configuration YAML file
    pub fn create_default_config_file(path: &Path) -> Result<()> {
        UploadConfig::template().save_to_yaml_file(path)
    }
}

/// Load a configuration file or create a default one.
///
/// * `Some(path)` that exists is parsed.
/// * `Some(path)` that does not exist gets the [`UploadConfig::template`]
///   written to it, but the returned config has no targets until the file is
///   edited and loaded again.
/// * `None` returns [`UploadConfig::default`] (no targets) without touching
///   the disk.
///
/// Environment variables are expanded in every case.
pub fn load_or_create_config(config_path: Option<&Path>) -> Result<UploadConfig> {
    let mut config = match config_path {
        Some(path) if path.exists() => UploadConfig::from_yaml_file(path)?,
        Some(path) => {
            info!("Creating default config at {}", path.display());
            UploadConfig::create_default_config_file(path)?;
            UploadConfig::default()
        }
        None => {
            debug!("No config path provided, using default configuration");
            UploadConfig::default()
        }
    };

    config.process_environment_variables()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::FileCategory;
    use tempfile::TempDir;

    #[test]
    fn test_config_serialization_deserialization() {
        let config = UploadConfig::template();

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("version: '1.0'"));
        assert!(yaml.contains("my-media-bucket"));

        let deserialized: UploadConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_minimal_yaml_uses_default_categories() {
        let yaml = r#"
version: "1.0"
root: /data
s3:
  bucket: photos
gcs:
  bucket: docs
  project: acme
  credentials_path: /keys/sa.json
"#;
        let config: UploadConfig = serde_yaml::from_str(yaml).unwrap();

        let s3 = config.s3.unwrap();
        assert_eq!(s3.default_categories, vec![FileCategory::Images, FileCategory::Media]);
        assert!(s3.region.is_none());

        let gcs = config.gcs.unwrap();
        assert_eq!(gcs.default_categories, vec![FileCategory::Documents]);
        assert!(!config.sort_entries);
    }

    #[test]
    fn test_yaml_with_extra_args() {
        let yaml = r#"
version: "1.0"
root: /data
s3:
  bucket: archive
  region: eu-west-1
  options:
    storage_class: GLACIER
    acl: private
    metadata:
      owner: ops
  default_categories: [documents, images]
"#;
        let config: UploadConfig = serde_yaml::from_str(yaml).unwrap();
        let s3 = config.s3.unwrap();

        assert_eq!(s3.options.storage_class.as_deref(), Some("GLACIER"));
        assert_eq!(s3.options.acl.as_deref(), Some("private"));
        assert_eq!(s3.options.metadata.get("owner").map(String::as_str), Some("ops"));
        assert_eq!(s3.default_categories, vec![FileCategory::Documents, FileCategory::Images]);
        assert!(config.gcs.is_none());
    }

    #[test]
    fn test_save_and_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cloud-upload.yaml");

        let config = UploadConfig::default();
        config.save_to_yaml_file(&config_path).unwrap();
        assert!(config_path.exists());

        let loaded = UploadConfig::from_yaml_file(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_create_writes_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("new.yaml");

        let config = load_or_create_config(Some(&config_path)).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.root, ".");
        assert!(config.s3.is_none());
        assert!(config.gcs.is_none());

        let written = UploadConfig::from_yaml_file(&config_path).unwrap();
        assert_eq!(written, UploadConfig::template());
    }

    #[test]
    fn test_no_config_has_no_targets() {
        let config = load_or_create_config(None).unwrap();
        assert_eq!(config.root, ".");
        assert!(config.s3.is_none());
        assert!(config.gcs.is_none());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.yaml");
        fs::write(&config_path, "version: [unclosed").unwrap();

        let err = load_or_create_config(Some(&config_path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML config"));
    }

    #[test]
    fn test_process_environment_variables() {
        std::env::set_var("CLOUD_UPLOAD_CFG_ROOT", "/srv/uploads");
        std::env::set_var("CLOUD_UPLOAD_CFG_KEYS", "/srv/keys");

        let mut config = UploadConfig {
            root: "${CLOUD_UPLOAD_CFG_ROOT}/incoming".to_string(),
            gcs: Some(GcsTarget::new("docs", "acme", "$CLOUD_UPLOAD_CFG_KEYS/sa.json")),
            ..UploadConfig::default()
        };
        config.process_environment_variables().unwrap();

        assert_eq!(config.root, "/srv/uploads/incoming");
        assert_eq!(
            config.gcs.unwrap().credentials_path,
            PathBuf::from("/srv/keys/sa.json")
        );

        std::env::remove_var("CLOUD_UPLOAD_CFG_ROOT");
        std::env::remove_var("CLOUD_UPLOAD_CFG_KEYS");
    }
}
