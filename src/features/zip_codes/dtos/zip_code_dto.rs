use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::zip_codes::models::ZipCodeEntry;

/// Response DTO for a ZIP code locality
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZipCodeResponseDto {
    #[schema(example = "1000")]
    pub zip: String,
    #[schema(example = "Bruxelles")]
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<&ZipCodeEntry> for ZipCodeResponseDto {
    fn from(entry: &ZipCodeEntry) -> Self {
        Self {
            zip: entry.zip.clone(),
            city: entry.city.clone(),
            lat: entry.lat,
            lng: entry.lng,
        }
    }
}
