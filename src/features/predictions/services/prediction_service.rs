use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::predictions::clients::PricePredictor;
use crate::features::predictions::dtos::{
    ModelInfoDto, PredictionRequestDto, PredictionResponseDto,
};
use crate::features::predictions::models::{flag, FeatureRecord, ModelProfile, PropertyType};
use crate::features::regions::models::{ResolvedRegion, UnresolvedPostalCode};
use crate::features::regions::RegionResolver;
use crate::features::zip_codes::models::ZipCodeEntry;
use crate::features::zip_codes::ZipCodeDirectory;

/// Service turning a property description into a price estimate
pub struct PredictionService {
    resolver: Arc<RegionResolver>,
    zip_codes: Option<Arc<ZipCodeDirectory>>,
    apartment_model: Arc<dyn PricePredictor>,
    house_model: Arc<dyn PricePredictor>,
}

impl PredictionService {
    pub fn new(
        resolver: Arc<RegionResolver>,
        zip_codes: Option<Arc<ZipCodeDirectory>>,
        apartment_model: Arc<dyn PricePredictor>,
        house_model: Arc<dyn PricePredictor>,
    ) -> Self {
        Self {
            resolver,
            zip_codes,
            apartment_model,
            house_model,
        }
    }

    fn model_for(&self, property_type: PropertyType) -> &Arc<dyn PricePredictor> {
        match property_type {
            PropertyType::Apartment => &self.apartment_model,
            PropertyType::House => &self.house_model,
        }
    }

    /// Estimate the price of a property
    ///
    /// Fails with `UnresolvedPostalCode` when the ZIP code maps to no region,
    /// or is missing from the reference directory when one is configured.
    pub async fn predict(&self, dto: PredictionRequestDto) -> Result<PredictionResponseDto> {
        let zip_code = dto.zip_code.trim();
        let resolved = self.resolver.classify(zip_code).into_result(zip_code)?;

        let locality = match &self.zip_codes {
            Some(directory) => Some(
                directory
                    .lookup(zip_code)
                    .ok_or_else(|| UnresolvedPostalCode::new(zip_code))?,
            ),
            None => None,
        };

        let record = build_features(&dto, zip_code, &resolved, locality);
        let profile = ModelProfile::for_property(dto.property_type);

        let raw = self.model_for(dto.property_type).predict(&record).await?;
        let price = profile.to_price(raw);
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::ExternalServiceError(format!(
                "Model returned an unusable prediction: {}",
                raw
            )));
        }

        tracing::info!(
            "Price predicted: type={}, zip={}, province={}, price={:.2}",
            dto.property_type,
            zip_code,
            resolved.region,
            price
        );

        Ok(PredictionResponseDto {
            predicted_price: (price * 100.0).round() / 100.0,
            property_type: dto.property_type,
            zip_code: zip_code.to_string(),
            region: resolved.region,
            macro_region: resolved.macro_region,
            city: locality.map(|entry| entry.city.clone()),
            metrics: ModelInfoDto::from(profile).metrics,
            predicted_at: Utc::now(),
        })
    }

    /// Static description of every model
    pub fn list_models(&self) -> Vec<ModelInfoDto> {
        [PropertyType::Apartment, PropertyType::House]
            .into_iter()
            .map(|kind| ModelProfile::for_property(kind).into())
            .collect()
    }
}

/// Build the model input row for a request.
///
/// Categoricals are upper-cased to match the training data. Apartments carry
/// terrace and comfort flags, houses carry garden area and a flood-zone flag
/// defaulting to 0.
pub fn build_features(
    dto: &PredictionRequestDto,
    zip_code: &str,
    resolved: &ResolvedRegion,
    locality: Option<&ZipCodeEntry>,
) -> FeatureRecord {
    let mut record = FeatureRecord {
        zip_code: zip_code.to_string(),
        total_area_sqm: dto.total_area_sqm,
        nbr_bedrooms: dto.nbr_bedrooms,
        construction_year: dto.construction_year,
        state_building: dto.state_building.as_feature().to_string(),
        province: resolved.region.to_uppercase(),
        region: resolved.macro_region.as_ref().map(|m| m.to_uppercase()),
        heating_type: dto
            .heating_type
            .as_ref()
            .map(|h| h.trim().to_uppercase())
            .filter(|h| !h.is_empty()),
        latitude: locality.map(|entry| entry.lat),
        longitude: locality.map(|entry| entry.lng),
        terrace_sqm: None,
        garden_sqm: None,
        fl_furnished: None,
        fl_double_glazing: None,
        fl_terrace: None,
        fl_floodzone: None,
    };

    match dto.property_type {
        PropertyType::Apartment => {
            let terrace_sqm = dto.terrace_sqm.unwrap_or(0.0);
            record.terrace_sqm = Some(terrace_sqm);
            record.fl_furnished = Some(flag(dto.fl_furnished));
            record.fl_double_glazing = Some(flag(dto.fl_double_glazing));
            record.fl_terrace = Some(flag(dto.fl_terrace.unwrap_or(terrace_sqm > 0.0)));
        }
        PropertyType::House => {
            record.garden_sqm = Some(dto.garden_sqm.unwrap_or(0.0));
            record.fl_floodzone = Some(0);
        }
    }

    record
}
