//! Belgian ZIP code reference data.
//!
//! Optional directory of localities (city and coordinates per ZIP code),
//! loaded from `ZIP_CODE_REFERENCE_PATH` at startup. The prediction flow uses
//! it to reject unknown ZIP codes and to add location features.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/zip-codes/{zip}` | Get locality by ZIP code |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ZipCodeDirectory;
