//! Property price estimation.
//!
//! Classifies the ZIP code, builds the feature row expected by the trained
//! model for the property type and forwards it to the model service. Each
//! property type has its own model, accuracy metrics and target encoding.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/predictions` | Estimate a property price |
//! | GET | `/api/predictions/models` | List models and their metrics |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::{HttpModelClient, PricePredictor};
pub use services::PredictionService;
