use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::models::{RegionRange, ResolvedRegion};

/// Response DTO for a resolved postal code
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResponseDto {
    #[schema(example = "1000")]
    pub postal_code: String,
    #[schema(example = "Brussels Capital Region")]
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Brussels")]
    pub macro_region: Option<String>,
}

impl ClassificationResponseDto {
    pub fn new(postal_code: &str, resolved: ResolvedRegion) -> Self {
        Self {
            postal_code: postal_code.to_string(),
            region: resolved.region,
            macro_region: resolved.macro_region,
        }
    }
}

/// Response DTO for one configured range
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionRangeDto {
    pub lower: u16,
    pub upper: u16,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_region: Option<String>,
}

impl From<&RegionRange> for RegionRangeDto {
    fn from(range: &RegionRange) -> Self {
        Self {
            lower: range.lower,
            upper: range.upper,
            region: range.region.clone(),
            macro_region: range.macro_region.clone(),
        }
    }
}
