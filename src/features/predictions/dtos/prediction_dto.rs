use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::predictions::models::{BuildingState, ModelProfile, PropertyType};

/// Request DTO for a price estimate
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequestDto {
    pub property_type: PropertyType,

    /// Belgian ZIP code; surrounding whitespace is ignored
    #[serde(alias = "zip_code")]
    #[validate(length(min = 1, max = 16, message = "ZIP code must be 1-16 characters"))]
    #[schema(example = "1000")]
    pub zip_code: String,

    #[validate(range(min = 10.0, max = 1000.0, message = "Total area must be 10-1000 sqm"))]
    #[schema(example = 75.0)]
    pub total_area_sqm: f64,

    #[validate(range(max = 10, message = "Number of bedrooms must be 0-10"))]
    #[schema(example = 2)]
    pub nbr_bedrooms: u32,

    #[validate(range(min = 1900, max = 2030, message = "Construction year must be 1900-2030"))]
    #[schema(example = 2000)]
    pub construction_year: i32,

    pub state_building: BuildingState,

    /// Free-form heating type (GAS, ELECTRIC, ...), upper-cased before prediction
    #[validate(length(min = 1, max = 64, message = "Heating type must be 1-64 characters"))]
    #[schema(example = "GAS")]
    pub heating_type: Option<String>,

    /// Apartments only
    #[validate(range(min = 0.0, max = 100.0, message = "Terrace area must be 0-100 sqm"))]
    pub terrace_sqm: Option<f64>,

    /// Houses only
    #[validate(range(min = 0.0, max = 2000.0, message = "Garden area must be 0-2000 sqm"))]
    pub garden_sqm: Option<f64>,

    #[serde(default)]
    pub fl_furnished: bool,

    #[serde(default = "default_double_glazing")]
    pub fl_double_glazing: bool,

    /// Defaults to whether a terrace area was given
    pub fl_terrace: Option<bool>,
}

fn default_double_glazing() -> bool {
    true
}

/// Accuracy of the model behind an estimate
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetricsDto {
    pub r_squared: f64,
    pub mae: f64,
    pub median_ae: f64,
}

/// Response DTO for a model description
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfoDto {
    pub property_type: PropertyType,
    pub log_target: bool,
    pub metrics: ModelMetricsDto,
}

impl From<ModelProfile> for ModelInfoDto {
    fn from(profile: ModelProfile) -> Self {
        Self {
            property_type: profile.property_type,
            log_target: profile.log_target,
            metrics: ModelMetricsDto {
                r_squared: profile.metrics.r_squared,
                mae: profile.metrics.mae,
                median_ae: profile.metrics.median_ae,
            },
        }
    }
}

/// Response DTO for a price estimate
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponseDto {
    /// Estimated price in euros, rounded to cents
    #[schema(example = 312500.25)]
    pub predicted_price: f64,
    pub property_type: PropertyType,
    pub zip_code: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub metrics: ModelMetricsDto,
    pub predicted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_request() -> serde_json::Value {
        json!({
            "propertyType": "apartment",
            "zipCode": "1000",
            "totalAreaSqm": 75.0,
            "nbrBedrooms": 2,
            "constructionYear": 2000,
            "stateBuilding": "GOOD"
        })
    }

    #[test]
    fn test_defaults() {
        let dto: PredictionRequestDto = serde_json::from_value(valid_request()).unwrap();
        assert!(dto.validate().is_ok());
        assert!(!dto.fl_furnished);
        assert!(dto.fl_double_glazing);
        assert_eq!(dto.fl_terrace, None);
        assert_eq!(dto.heating_type, None);
    }

    #[test]
    fn test_accepts_snake_case_zip_code() {
        let mut value = valid_request();
        value.as_object_mut().unwrap().remove("zipCode");
        value["zip_code"] = json!("1000");

        let dto: PredictionRequestDto = serde_json::from_value(value).unwrap();
        assert_eq!(dto.zip_code, "1000");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_area_out_of_range() {
        let mut value = valid_request();
        value["totalAreaSqm"] = json!(5.0);
        let dto: PredictionRequestDto = serde_json::from_value(value).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("total_area_sqm"));
    }

    #[test]
    fn test_bedrooms_and_year_out_of_range() {
        let mut value = valid_request();
        value["nbrBedrooms"] = json!(11);
        value["constructionYear"] = json!(1850);
        let dto: PredictionRequestDto = serde_json::from_value(value).unwrap();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nbr_bedrooms"));
        assert!(fields.contains_key("construction_year"));
    }

    #[test]
    fn test_optional_areas_are_validated_when_present() {
        let mut value = valid_request();
        value["gardenSqm"] = json!(2500.0);
        let dto: PredictionRequestDto = serde_json::from_value(value).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("garden_sqm"));
    }

    #[test]
    fn test_unknown_building_state_is_rejected() {
        let mut value = valid_request();
        value["stateBuilding"] = json!("RUINED");
        assert!(serde_json::from_value::<PredictionRequestDto>(value).is_err());
    }
}
