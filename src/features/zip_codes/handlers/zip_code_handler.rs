use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::zip_codes::dtos::ZipCodeResponseDto;
use crate::features::zip_codes::services::ZipCodeDirectory;
use crate::shared::types::ApiResponse;

/// Get the locality registered for a ZIP code
#[utoipa::path(
    get,
    path = "/api/zip-codes/{zip}",
    params(
        ("zip" = String, Path, description = "Belgian ZIP code (4 digits)", example = "1000")
    ),
    responses(
        (status = 200, description = "Locality details", body = ApiResponse<ZipCodeResponseDto>),
        (status = 404, description = "ZIP code not in the reference data")
    ),
    tag = "zip-codes"
)]
pub async fn get_zip_code(
    State(directory): State<Arc<ZipCodeDirectory>>,
    Path(zip): Path<String>,
) -> Result<Json<ApiResponse<ZipCodeResponseDto>>> {
    let zip = zip.trim();
    let entry = directory
        .lookup(zip)
        .ok_or_else(|| AppError::NotFound(format!("ZIP code '{}' not found", zip)))?;

    Ok(Json(ApiResponse::success(Some(entry.into()), None, None)))
}
