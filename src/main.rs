use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tokio::runtime::Runtime;

use cloud_upload::cli::{Args, Commands, GcsOpts, S3Opts, ScanOpts};
use cloud_upload::cloud::UploadDispatcher;
use cloud_upload::config::{load_or_create_config, UploadConfig};
use cloud_upload::models::UploadReport;
use cloud_upload::scanner::{parse_extension_list, DirectoryScanner, FileCategory};

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    if let Commands::InitConfig { path } = &args.command {
        info!("Creating default configuration file at {}", path.display());
        UploadConfig::create_default_config_file(path)?;
        info!("Configuration created successfully");
        return Ok(());
    }

    let config = load_or_create_config(args.config.as_deref())?;

    match &args.command {
        Commands::Scan(opts) => run_scan(opts, &config),
        Commands::UploadS3(opts) => run_s3_upload(opts, &config),
        Commands::UploadGcs(opts) => run_gcs_upload(opts, &config),
        Commands::InitConfig { .. } => Ok(()),
    }
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ).context("Failed to initialize logger")?;
    Ok(())
}

/// Scanner over the flag root, falling back to the configured one
fn open_scanner(root: Option<&Path>, config: &UploadConfig, sorted: bool) -> Result<DirectoryScanner> {
    let root = root
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.root));

    let scanner = DirectoryScanner::new(&root)?;
    Ok(scanner.with_sorted_entries(sorted || config.sort_entries))
}

fn run_scan(opts: &ScanOpts, config: &UploadConfig) -> Result<()> {
    let scanner = open_scanner(opts.root.as_deref(), config, opts.sorted)?;

    let files = match (&opts.ext, opts.category) {
        (Some(ext), _) => scanner.list_by_extensions(parse_extension_list(ext)),
        (None, Some(category)) => scanner.list_category(category, None),
        (None, None) => scanner.list_categories(&[
            FileCategory::Images,
            FileCategory::Media,
            FileCategory::Documents,
        ]),
    };

    for file in &files {
        println!("{}\t{}", file.name, file.path.display());
    }

    info!("Listed {} files under {}", files.len(), scanner.root().display());
    Ok(())
}

fn run_s3_upload(opts: &S3Opts, config: &UploadConfig) -> Result<()> {
    let target = opts.apply(config.s3.clone())?;
    let scanner = open_scanner(opts.root.as_deref(), config, false)?;
    let dispatcher = UploadDispatcher::from_scanner(scanner);

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    let report = runtime
        .block_on(dispatcher.upload_to_s3(&target, opts.object_name.as_deref(), &opts.extensions()))
        .context("Failed to set up S3 upload")?;

    finish(report)
}

fn run_gcs_upload(opts: &GcsOpts, config: &UploadConfig) -> Result<()> {
    let target = opts.apply(config.gcs.clone())?;
    let scanner = open_scanner(opts.root.as_deref(), config, false)?;
    let dispatcher = UploadDispatcher::from_scanner(scanner);

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    let report = runtime
        .block_on(dispatcher.upload_to_gcs(&target, &opts.extensions()))
        .context("Failed to set up GCS upload")?;

    finish(report)
}

/// Print the report and turn a failed batch into an error exit
fn finish(report: UploadReport) -> Result<()> {
    for object in &report.uploaded {
        println!("{}\t{}/{}", object.file_name, report.destination, object.object_name);
    }

    match report.failures.first() {
        None => {
            info!("Successfully uploaded {} files to {}", report.uploaded_count(), report.destination);
            Ok(())
        }
        Some(failure) => {
            warn!("Upload of {} failed: {}", failure.path.display(), failure.reason);
            Err(anyhow!(
                "Upload to {} stopped at {} after {} files",
                report.destination,
                failure.file_name,
                report.uploaded_count()
            ))
        }
    }
}
