use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::predictions::dtos::{
    ModelInfoDto, PredictionRequestDto, PredictionResponseDto,
};
use crate::features::predictions::services::PredictionService;
use crate::shared::types::{ApiResponse, Meta};

/// Estimate the price of an apartment or a house
#[utoipa::path(
    post,
    path = "/api/predictions",
    request_body = PredictionRequestDto,
    responses(
        (status = 200, description = "Price estimate", body = ApiResponse<PredictionResponseDto>),
        (status = 400, description = "Validation error or invalid ZIP code"),
        (status = 502, description = "Model service error")
    ),
    tag = "predictions"
)]
pub async fn create_prediction(
    State(service): State<Arc<PredictionService>>,
    AppJson(dto): AppJson<PredictionRequestDto>,
) -> Result<Json<ApiResponse<PredictionResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let prediction = service.predict(dto).await?;
    Ok(Json(ApiResponse::success(Some(prediction), None, None)))
}

/// List the models with their accuracy metrics
#[utoipa::path(
    get,
    path = "/api/predictions/models",
    responses(
        (status = 200, description = "Model descriptions", body = ApiResponse<Vec<ModelInfoDto>>)
    ),
    tag = "predictions"
)]
pub async fn list_models(
    State(service): State<Arc<PredictionService>>,
) -> Result<Json<ApiResponse<Vec<ModelInfoDto>>>> {
    let models = service.list_models();
    let total = models.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(models),
        None,
        Some(Meta { total }),
    )))
}
