pub mod zip_code_dto;

pub use zip_code_dto::ZipCodeResponseDto;
