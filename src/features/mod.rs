pub mod predictions;
pub mod regions;
pub mod zip_codes;
