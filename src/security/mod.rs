//! Security utilities.
//!
//! Currently this is credential scrubbing, applied to backend error text
//! before it is logged or stored in an upload report.

pub mod credential_scrubber;

pub use credential_scrubber::{safe_error_message, scrub_credentials, scrub_path};
