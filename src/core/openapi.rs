use utoipa::{Modify, OpenApi};

use crate::features::predictions::{
    dtos as predictions_dtos, handlers as predictions_handlers, models as predictions_models,
};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::zip_codes::{dtos as zip_codes_dtos, handlers as zip_codes_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::classify_postal_code,
        regions_handlers::list_region_table,
        // ZIP codes
        zip_codes_handlers::get_zip_code,
        // Predictions
        predictions_handlers::create_prediction,
        predictions_handlers::list_models,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Regions
            regions_dtos::ClassificationResponseDto,
            regions_dtos::RegionRangeDto,
            ApiResponse<regions_dtos::ClassificationResponseDto>,
            ApiResponse<Vec<regions_dtos::RegionRangeDto>>,
            // ZIP codes
            zip_codes_dtos::ZipCodeResponseDto,
            ApiResponse<zip_codes_dtos::ZipCodeResponseDto>,
            // Predictions
            predictions_models::PropertyType,
            predictions_models::BuildingState,
            predictions_dtos::PredictionRequestDto,
            predictions_dtos::PredictionResponseDto,
            predictions_dtos::ModelMetricsDto,
            predictions_dtos::ModelInfoDto,
            ApiResponse<predictions_dtos::PredictionResponseDto>,
            ApiResponse<Vec<predictions_dtos::ModelInfoDto>>,
        )
    ),
    tags(
        (name = "regions", description = "Belgian postal code to province / language community classification"),
        (name = "zip-codes", description = "Belgian ZIP code reference data"),
        (name = "predictions", description = "Property price estimation"),
    ),
    info(
        title = "Immo Estimator API",
        version = "0.1.0",
        description = "Property price estimation for Belgium",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_paths() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;
        assert!(paths.contains_key("/api/regions/classify/{postal_code}"));
        assert!(paths.contains_key("/api/regions/table"));
        assert!(paths.contains_key("/api/zip-codes/{zip}"));
        assert!(paths.contains_key("/api/predictions"));
        assert!(paths.contains_key("/api/predictions/models"));
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Desc".to_string(),
        }
        .modify(&mut openapi);

        assert_eq!(openapi.info.title, "Custom");
        assert_eq!(openapi.info.version, "9.9.9");
        assert_eq!(openapi.info.description.as_deref(), Some("Desc"));
    }
}
