use log::{debug, warn};
use rusoto_core::{HttpClient, Region};
use rusoto_credential::ProfileProvider;
use rusoto_s3::S3Client;

use crate::errors::{UploadError, UploadResult};

/// Parse a region name, falling back to the default region when it is unknown
pub fn parse_region(region_name: Option<&str>) -> Region {
    match region_name {
        Some(name) => match name.parse::<Region>() {
            Ok(r) => r,
            Err(_) => {
                warn!("Invalid region '{}', using default", name);
                Region::default()
            }
        },
        None => Region::default(),
    }
}

/// Create an S3 client with the specified region and profile.
///
/// Without a profile the ambient credential chain is used (environment,
/// shared credentials file, container or instance metadata).
pub fn create_s3_client(region_name: Option<&str>, profile: Option<&str>) -> UploadResult<S3Client> {
    let region = parse_region(region_name);

    let Some(profile_name) = profile else {
        debug!("Creating S3 client for region {}", region.name());
        return Ok(S3Client::new(region));
    };

    let mut provider = ProfileProvider::new()
        .map_err(|e| UploadError::Credentials(format!("AWS profile '{}': {}", profile_name, e)))?;
    provider.set_profile(profile_name);

    let http_client = HttpClient::new().map_err(|e| UploadError::Client(e.to_string()))?;

    debug!(
        "Creating S3 client for region {} with profile {}",
        region.name(),
        profile_name
    );
    Ok(S3Client::new_with(http_client, provider, region))
}
