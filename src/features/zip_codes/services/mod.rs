mod zip_code_directory;

pub use zip_code_directory::{ZipCodeDirectory, ZipCodeDirectoryError};
