mod zip_code_entry;

pub use zip_code_entry::ZipCodeEntry;
