use std::borrow::Cow;
use std::env;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref WINDOWS_VAR: Regex = Regex::new(r"%([A-Za-z0-9_()]+)%").unwrap();
    static ref UNIX_VAR: Regex = Regex::new(r"\$\{([^}]*)\}|\$([A-Za-z0-9_]+)").unwrap();
}

/// Expand Windows-style `%VAR%` references; unknown variables stay as written
pub fn parse_windows_env_vars(path: &str) -> String {
    WINDOWS_VAR
        .replace_all(path, |caps: &Captures| {
            env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

/// Expand Unix-style `$VAR` and `${VAR}` references.
///
/// Unknown `${VAR}` references expand to nothing; unknown `$VAR` references
/// are left as written. Expanded values are not expanded again.
pub fn parse_unix_env_vars(path: &str) -> String {
    UNIX_VAR
        .replace_all(path, |caps: &Captures| match (caps.get(1), caps.get(2)) {
            (Some(braced), _) => env::var(braced.as_str()).unwrap_or_default(),
            (None, Some(bare)) => env::var(bare.as_str()).unwrap_or_else(|_| caps[0].to_string()),
            (None, None) => caps[0].to_string(),
        })
        .into_owned()
}

/// Expand both variable styles in a configured path
pub fn expand_env_vars(path: &str) -> String {
    let mut result = Cow::Borrowed(path);

    if result.contains('%') {
        result = Cow::Owned(parse_windows_env_vars(&result));
    }
    if result.contains('$') {
        result = Cow::Owned(parse_unix_env_vars(&result));
    }

    result.into_owned()
}
