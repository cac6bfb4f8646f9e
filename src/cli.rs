use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::cloud::gcs::GcsTarget;
use crate::cloud::s3::S3Target;
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::scanner::{parse_extension_list, FileCategory};

/// Command-line arguments for the cloud-upload tool.
///
/// Values given on the command line override the ones from the
/// configuration file.
#[derive(Parser, Debug)]
#[clap(
    name = "cloud-upload",
    about = "Classify files by extension and upload them to S3 or Google Cloud Storage"
)]
pub struct Args {
    /// Verbose logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration YAML file
    #[clap(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommands
    #[clap(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List matching files as `name<TAB>path`
    Scan(ScanOpts),

    /// Upload matching files to an S3 bucket
    #[clap(name = "upload-s3")]
    UploadS3(S3Opts),

    /// Upload matching files to a Google Cloud Storage bucket
    #[clap(name = "upload-gcs")]
    UploadGcs(GcsOpts),

    /// Create a default configuration file
    InitConfig {
        /// Path to output configuration file
        #[clap(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

/// Options for the scan subcommand.
#[derive(ClapArgs, Debug)]
pub struct ScanOpts {
    /// Directory to scan (default: `root` from the config)
    #[clap(long)]
    pub root: Option<PathBuf>,

    /// List one preset category
    #[clap(long, value_enum, conflicts_with = "ext")]
    pub category: Option<FileCategory>,

    /// Comma-separated extensions to list instead of a preset
    #[clap(long)]
    pub ext: Option<String>,

    /// Sort directory entries by name
    #[clap(long)]
    pub sorted: bool,
}

/// Options for the upload-s3 subcommand.
#[derive(ClapArgs, Debug, Default)]
pub struct S3Opts {
    /// Directory to scan (default: `root` from the config)
    #[clap(long)]
    pub root: Option<PathBuf>,

    /// S3 bucket name
    #[clap(short, long)]
    pub bucket: Option<String>,

    /// AWS region
    #[clap(long)]
    pub region: Option<String>,

    /// AWS profile to use for credentials
    #[clap(long)]
    pub profile: Option<String>,

    /// Object name for a single-file batch, key prefix for larger batches
    #[clap(long)]
    pub object_name: Option<String>,

    /// Comma-separated extensions (default: the target's categories)
    #[clap(long)]
    pub ext: Option<String>,

    /// Storage class, e.g. STANDARD_IA
    #[clap(long)]
    pub storage_class: Option<String>,

    /// Canned ACL, e.g. private
    #[clap(long)]
    pub acl: Option<String>,

    /// Content type stored with every object
    #[clap(long)]
    pub content_type: Option<String>,

    /// Enable server-side encryption
    #[clap(long)]
    pub encrypt: bool,
}

impl S3Opts {
    /// Merge the flags over the configured target
    pub fn apply(&self, base: Option<S3Target>) -> Result<S3Target> {
        let mut target = match (base, &self.bucket) {
            (Some(mut target), Some(bucket)) => {
                target.bucket = bucket.clone();
                target
            }
            (Some(target), None) => target,
            (None, Some(bucket)) => S3Target::new(bucket.clone()),
            (None, None) => return Err(anyhow!("S3 bucket not provided (use --bucket or the s3 config section)")),
        };

        if let Some(region) = &self.region {
            target.region = Some(region.clone());
        }
        if let Some(profile) = &self.profile {
            target.profile = Some(profile.clone());
        }
        if let Some(storage_class) = &self.storage_class {
            target.options.storage_class = Some(storage_class.clone());
        }
        if let Some(acl) = &self.acl {
            target.options.acl = Some(acl.clone());
        }
        if let Some(content_type) = &self.content_type {
            target.options.content_type = Some(content_type.clone());
        }
        if self.encrypt {
            target.options = target.options.with_encryption();
        }

        Ok(target)
    }

    pub fn extensions(&self) -> Vec<String> {
        self.ext.as_deref().map(parse_extension_list).unwrap_or_default()
    }
}

/// Options for the upload-gcs subcommand.
#[derive(ClapArgs, Debug, Default)]
pub struct GcsOpts {
    /// Directory to scan (default: `root` from the config)
    #[clap(long)]
    pub root: Option<PathBuf>,

    /// GCS bucket name
    #[clap(short, long)]
    pub bucket: Option<String>,

    /// Google Cloud project
    #[clap(long)]
    pub project: Option<String>,

    /// Path to the service-account key file
    #[clap(long)]
    pub credentials: Option<PathBuf>,

    /// Comma-separated extensions (default: the target's categories)
    #[clap(long)]
    pub ext: Option<String>,
}

impl GcsOpts {
    /// Merge the flags over the configured target
    pub fn apply(&self, base: Option<GcsTarget>) -> Result<GcsTarget> {
        let mut target = match base {
            Some(target) => target,
            None => {
                let bucket = self.bucket.clone().ok_or_else(|| anyhow!("GCS bucket not provided"))?;
                let project = self.project.clone().ok_or_else(|| anyhow!("GCS project not provided"))?;
                let credentials = self
                    .credentials
                    .clone()
                    .ok_or_else(|| anyhow!("GCS credentials file not provided"))?;
                return Ok(GcsTarget::new(bucket, project, credentials));
            }
        };

        if let Some(bucket) = &self.bucket {
            target.bucket = bucket.clone();
        }
        if let Some(project) = &self.project {
            target.project = project.clone();
        }
        if let Some(credentials) = &self.credentials {
            target.credentials_path = credentials.clone();
        }

        Ok(target)
    }

    pub fn extensions(&self) -> Vec<String> {
        self.ext.as_deref().map(parse_extension_list).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upload_s3() {
        let args = Args::try_parse_from([
            "cloud-upload",
            "-v",
            "upload-s3",
            "--bucket",
            "photos",
            "--ext",
            "jpg,png",
            "--storage-class",
            "STANDARD_IA",
        ])
        .unwrap();

        assert!(args.verbose);
        match args.command {
            Commands::UploadS3(opts) => {
                assert_eq!(opts.bucket.as_deref(), Some("photos"));
                assert_eq!(opts.extensions(), vec!["jpg", "png"]);
                assert_eq!(opts.storage_class.as_deref(), Some("STANDARD_IA"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_scan_category() {
        let args = Args::try_parse_from(["cloud-upload", "scan", "--category", "media", "--sorted"]).unwrap();
        match args.command {
            Commands::Scan(opts) => {
                assert_eq!(opts.category, Some(FileCategory::Media));
                assert!(opts.sorted);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_scan_category_conflicts_with_ext() {
        let result = Args::try_parse_from(["cloud-upload", "scan", "--category", "media", "--ext", "mp4"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_s3_apply_overrides_config() {
        let mut base = S3Target::new("configured");
        base.region = Some("us-east-1".to_string());

        let opts = S3Opts {
            bucket: Some("override".to_string()),
            acl: Some("private".to_string()),
            encrypt: true,
            ..Default::default()
        };
        let target = opts.apply(Some(base)).unwrap();

        assert_eq!(target.bucket, "override");
        assert_eq!(target.region.as_deref(), Some("us-east-1"));
        assert_eq!(target.options.acl.as_deref(), Some("private"));
        assert_eq!(target.options.server_side_encryption.as_deref(), Some("AES256"));
        assert_eq!(target.default_categories, vec![FileCategory::Images, FileCategory::Media]);
    }

    #[test]
    fn test_s3_apply_requires_bucket() {
        assert!(S3Opts::default().apply(None).is_err());
    }

    #[test]
    fn test_no_config_requires_explicit_targets() {
        let config = crate::config::load_or_create_config(None).unwrap();

        assert!(S3Opts::default().apply(config.s3.clone()).is_err());

        let bucket_only = GcsOpts {
            bucket: Some("mine".to_string()),
            ..Default::default()
        };
        assert!(bucket_only.apply(config.gcs.clone()).is_err());
    }

    #[test]
    fn test_gcs_apply_without_config() {
        let opts = GcsOpts {
            bucket: Some("docs".to_string()),
            project: Some("acme".to_string()),
            credentials: Some(PathBuf::from("/keys/sa.json")),
            ..Default::default()
        };
        let target = opts.apply(None).unwrap();
        assert_eq!(target.bucket, "docs");
        assert_eq!(target.default_categories, vec![FileCategory::Documents]);

        let missing_project = GcsOpts {
            bucket: Some("docs".to_string()),
            ..Default::default()
        };
        assert!(missing_project.apply(None).is_err());
    }
}
