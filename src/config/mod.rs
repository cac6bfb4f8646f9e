// Re-export all items from the submodules
mod env_vars;
mod upload_config;

// Re-export upload config
pub use upload_config::{load_or_create_config, UploadConfig};

// Re-export environment variable functions
pub use env_vars::{expand_env_vars, parse_unix_env_vars, parse_windows_env_vars};
