mod zip_code_handler;

pub use zip_code_handler::*;
