//! Belgian postal code to region classification.
//!
//! A postal code is mapped to its province and language community through an
//! ordered table of inclusive ranges. The table is built once at startup
//! (built-in or loaded from `REGION_TABLE_PATH`) and shared read-only.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/classify/{postal_code}` | Classify a postal code |
//! | GET | `/api/regions/table` | List configured ranges in lookup order |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::RegionTable;
pub use services::RegionResolver;
