use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{ClassificationResponseDto, RegionRangeDto};
use crate::features::regions::services::RegionResolver;
use crate::shared::types::{ApiResponse, Meta};

/// Classify a postal code into its province and language community
#[utoipa::path(
    get,
    path = "/api/regions/classify/{postal_code}",
    params(
        ("postal_code" = String, Path, description = "Belgian postal code (4 digits)", example = "1000")
    ),
    responses(
        (status = 200, description = "Resolved region", body = ApiResponse<ClassificationResponseDto>),
        (status = 400, description = "Invalid or unknown postal code")
    ),
    tag = "regions"
)]
pub async fn classify_postal_code(
    State(resolver): State<Arc<RegionResolver>>,
    Path(postal_code): Path<String>,
) -> Result<Json<ApiResponse<ClassificationResponseDto>>> {
    let postal_code = postal_code.trim();
    let resolved = resolver.classify(postal_code).into_result(postal_code)?;

    Ok(Json(ApiResponse::success(
        Some(ClassificationResponseDto::new(postal_code, resolved)),
        None,
        None,
    )))
}

/// List the configured postal code ranges in lookup order
#[utoipa::path(
    get,
    path = "/api/regions/table",
    responses(
        (status = 200, description = "Configured ranges, first match wins", body = ApiResponse<Vec<RegionRangeDto>>)
    ),
    tag = "regions"
)]
pub async fn list_region_table(
    State(resolver): State<Arc<RegionResolver>>,
) -> Result<Json<ApiResponse<Vec<RegionRangeDto>>>> {
    let table = resolver.table();
    let dtos: Vec<RegionRangeDto> = table.ranges().iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta {
            total: table.len() as i64,
        }),
    )))
}
