use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::predictions::handlers;
use crate::features::predictions::services::PredictionService;

/// Create routes for the predictions feature
pub fn routes(service: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/api/predictions", post(handlers::create_prediction))
        .route("/api/predictions/models", get(handlers::list_models))
        .with_state(service)
}
