mod prediction_service;

pub use prediction_service::{build_features, PredictionService};
