// Directory scanning and extension classification
mod categories;
mod helpers;
mod walker;

pub use categories::{parse_extension_list, FileCategory};
pub use helpers::file_extension;
pub use walker::DirectoryScanner;
